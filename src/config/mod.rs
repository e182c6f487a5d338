mod model;
mod persistence;

pub use model::{AppConfig, UiConfig, WindowConfig};
pub use persistence::{config_base_dir, load_config, save_config};
