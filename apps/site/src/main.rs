//! Koidulauliku E-laulik: Dioxus front page with search and page helpers.

use std::sync::Mutex;


mod app;
mod content;
mod gallery;
mod scroll;
mod search;
mod state;

use app::App;
use laulik_core::types::WidgetConfig;

/// Pre-runtime storage, loaded before Dioxus launches, consumed on first read of `CONFIG`.
pub static INITIAL_CONFIG: Mutex<Option<WidgetConfig>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("laulik=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
        use dioxus::prelude::*;

        let config = match std::env::current_dir() {
            Ok(cwd) => laulik_core::load_laulik_config(&cwd),
            Err(e) => {
                tracing::warn!(error = %e, "Could not determine current directory, using defaults");
                WidgetConfig::default()
            }
        };
        tracing::info!(base_url = config.base_url.as_str(), scope = ?config.scope, "Starting E-laulik");
        if let Ok(mut slot) = INITIAL_CONFIG.lock() {
            *slot = Some(config);
        }

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((250, 248, 243, 255))
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Koidulauliku E-laulik")
                            .with_inner_size(LogicalSize::new(1200.0, 860.0))
                            .with_min_inner_size(LogicalSize::new(640.0, 480.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
