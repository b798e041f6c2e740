//! Main application entry point.

use shapeview_app::{App, AppConfig};
use std::io;

fn main() {
    #[cfg(feature = "native")]
    env_logger::init();
    log::info!("Starting ShapeView");

    let config = match std::env::args().nth(1) {
        Some(path) => match AppConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("Failed to load config {}: {}", path, err);
                eprintln!("shapeview: {path}: {err}");
                std::process::exit(2);
            }
        },
        None => AppConfig::default(),
    };

    let mut app = App::new(config);
    if let Err(err) = app.run(io::stdin().lock(), io::stdout().lock()) {
        log::error!("{}", err);
        eprintln!("shapeview: {err}");
        std::process::exit(1);
    }
}
