//! Byline Desktop — Dioxus-powered blog reader.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod state;
mod header;
mod articles;
mod sidebar;
mod notifications;
mod scroll;

use app::App;
use state::ReaderState;

/// Pre-runtime storage — feed loaded before Dioxus launches, consumed on first render.
pub static INITIAL_STATE: Mutex<Option<ReaderState>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("byline=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Load the feed at startup (blocking) — store in Mutex, NOT in the signal
    let prefs = byline_core::prefs::Prefs::load();
    let initial_state = ReaderState::from_prefs(&prefs);
    *INITIAL_STATE.lock().unwrap() = Some(initial_state);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((16, 18, 27, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Byline")
                            .with_inner_size(LogicalSize::new(1280.0, 860.0))
                            .with_min_inner_size(LogicalSize::new(720.0, 500.0))
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
