//! Demo binary: `swivel [preset.toml]`.
//!
//! Opens the demo viewer with default options, or with a TOML preset
//! when a path is given.

use std::path::Path;

use swivel::options::Options;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().collect();
    let options = match args.get(1) {
        Some(path) => match Options::load(Path::new(path)) {
            Ok(options) => {
                log::info!("loaded preset {path}");
                options
            }
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = swivel::viewer::run(options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
