//! Theme toggle — flips dark/light, persists the choice, announces it.

use byline_core::notify::NotificationKind;
use byline_core::prefs::Prefs;
use dioxus::prelude::*;

use crate::notifications::push_notification;
use crate::state::DARK_MODE;

#[component]
pub fn ThemeToggle() -> Element {
    let dark = *DARK_MODE.read();

    rsx! {
        button {
            class: "theme-toggle",
            aria_label: "Toggle theme",
            onclick: move |_| {
                let dark = !*DARK_MODE.read();
                *DARK_MODE.write() = dark;

                let mut prefs = Prefs::load();
                prefs.dark_mode = dark;
                if let Err(e) = prefs.save() {
                    tracing::warn!(error = %e, "Could not save theme preference");
                }

                let theme = if dark { "dark" } else { "light" };
                push_notification(NotificationKind::Success, format!("Switched to {theme} mode"));
            },
            if dark {
                // Sun: tap to go light
                svg {
                    class: "theme-icon",
                    width: "18",
                    height: "18",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "12", cy: "12", r: "5" }
                    line { x1: "12", y1: "1", x2: "12", y2: "3" }
                    line { x1: "12", y1: "21", x2: "12", y2: "23" }
                    line { x1: "4.22", y1: "4.22", x2: "5.64", y2: "5.64" }
                    line { x1: "18.36", y1: "18.36", x2: "19.78", y2: "19.78" }
                    line { x1: "1", y1: "12", x2: "3", y2: "12" }
                    line { x1: "21", y1: "12", x2: "23", y2: "12" }
                    line { x1: "4.22", y1: "19.78", x2: "5.64", y2: "18.36" }
                    line { x1: "18.36", y1: "5.64", x2: "19.78", y2: "4.22" }
                }
            } else {
                // Moon: tap to go dark
                svg {
                    class: "theme-icon",
                    width: "18",
                    height: "18",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    path { d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" }
                }
            }
        }
    }
}
