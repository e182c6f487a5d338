mod clipboard;
mod image;
mod share;
mod text;

pub use clipboard::{copy_text, paste_text};
pub use image::{ImageOptions, encode_png, image_export_path};
pub use share::{ShareTarget, open_share, share_url};
pub use text::{export_text, text_export_path};

use std::path::PathBuf;

/// Directory exported files land in: the user's download directory when it
/// exists, otherwise the home directory, otherwise the data directory.
pub(crate) fn output_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")) {
        let home = PathBuf::from(home);
        let downloads = home.join("Downloads");
        if downloads.is_dir() {
            return downloads;
        }
        return home;
    }
    crate::storage::DraftStore::open()
        .map(|store| store.dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
