mod autosave;
mod draft;
mod error;

pub use autosave::Freshness;
pub use draft::DraftStore;
pub use error::StorageError;
