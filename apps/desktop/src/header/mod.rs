//! Header components — brand, nav links, search box, and theme toggle.

mod search_bar;
mod theme_toggle;

use dioxus::prelude::*;

use crate::scroll::scroll_to_section;
use crate::state::*;
use search_bar::HeaderSearch;
use theme_toggle::ThemeToggle;

/// Sticky site header; slides out of view when scrolling down past the
/// threshold and returns on any upward scroll.
#[component]
pub fn Header() -> Element {
    let hidden = *HEADER_HIDDEN.read();
    let reader = READER.read();
    let title = reader.as_ref().map(|r| r.title.as_str()).unwrap_or("Byline");

    rsx! {
        header {
            class: if hidden { "site-header hidden" } else { "site-header" },
            div {
                class: "header-inner",
                span { class: "brand", "{title}" }
                Nav {}
                div {
                    class: "header-tools",
                    HeaderSearch {}
                    ThemeToggle {}
                }
            }
        }
    }
}

const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("articles", "Articles"),
    ("categories", "Categories"),
    ("newsletter", "Newsletter"),
];

/// Nav links smooth-scroll to their section instead of jumping.
#[component]
fn Nav() -> Element {
    let active = *ACTIVE_NAV.read();

    rsx! {
        nav {
            class: "main-nav",
            for (id, label) in NAV_SECTIONS.iter().copied() {
                a {
                    class: if id == active { "nav-link active" } else { "nav-link" },
                    href: "#{id}",
                    onclick: move |e: Event<MouseData>| {
                        e.prevent_default();
                        *ACTIVE_NAV.write() = id;
                        scroll_to_section(id);
                    },
                    "{label}"
                }
            }
        }
    }
}
