//! Root application component — magazine-style reader layout.

use dioxus::prelude::*;

use byline_core::prefs::Prefs;

use crate::articles::ArticleGrid;
use crate::header::Header;
use crate::notifications::NotificationStack;
use crate::scroll::{self, ScrollTopButton};
use crate::sidebar::Sidebar;
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // First render: consume the pre-loaded feed and apply the saved theme.
    use_hook(|| {
        *DARK_MODE.write() = Prefs::load().dark_mode;
        *READER.write() = crate::INITIAL_STATE.lock().unwrap().take();
    });

    // Scroll positions come from the webview; see scroll.rs.
    use_future(|| async move {
        scroll::track_scroll().await;
    });

    let dark = *DARK_MODE.read();

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            id: "reader-scroll",
            class: if dark { "reader-shell" } else { "reader-shell light" },

            Header {}

            Hero {}

            // Main split: article grid + sidebar widgets
            div {
                class: "page-body",
                main {
                    class: "article-pane",
                    ArticleGrid {}
                }
                Sidebar {}
            }

            Footer {}

            ScrollTopButton {}
            NotificationStack {}
        }
    }
}

/// Hero banner — feed title and tagline, the nav's "home" target.
#[component]
fn Hero() -> Element {
    let reader = READER.read();
    let (title, tagline) = match reader.as_ref() {
        Some(r) => (r.title.as_str(), r.tagline.as_str()),
        None => ("Byline", ""),
    };

    rsx! {
        section {
            class: "hero",
            id: "home",
            h1 { class: "hero-title", "{title}" }
            if !tagline.is_empty() {
                p { class: "hero-tagline", "{tagline}" }
            }
        }
    }
}

/// Footer strip at the bottom of the page.
#[component]
fn Footer() -> Element {
    let reader = READER.read();
    let title = reader.as_ref().map(|r| r.title.as_str()).unwrap_or("Byline");

    rsx! {
        footer {
            class: "site-footer",
            span { class: "footer-title", "{title}" }
            span { class: "footer-sep", "|" }
            span { class: "footer-note", "Written with too much coffee." }
        }
    }
}
