#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod config;
mod doc;
mod export;
mod gui;
mod storage;

fn main() {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .and_then(|logger| logger.start());
    if let Err(err) = &_logger {
        eprintln!("Failed to initialize logging: {err}");
    }

    log::info!("Starting Quill {}", env!("CARGO_PKG_VERSION"));
    gui::run();
}
