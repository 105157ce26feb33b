#![allow(non_snake_case)]

mod client;

use dioxus_logger::tracing;
use pokedex::backend::{config::Config, util::logging};

fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Logging setup failed: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Starting {}", config.app.title);

    let launcher = dioxus::LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let launcher = {
        use dioxus::desktop::{LogicalSize, WindowBuilder};

        launcher.with_cfg(
            dioxus::desktop::Config::new().with_window(
                WindowBuilder::new()
                    .with_title(config.app.title.clone())
                    .with_inner_size(LogicalSize::new(1200.0, 800.0)),
            ),
        )
    };

    launcher.with_context(config).launch(client::App);
}
