//! Sidebar search widget — a second way in to the same text filter.

use dioxus::prelude::*;

use crate::state::{run_search, SIDEBAR_QUERY};

#[component]
pub fn SearchWidget() -> Element {
    let query = SIDEBAR_QUERY.read();

    rsx! {
        div {
            class: "sidebar-section",
            h3 { class: "sidebar-title", "Search" }
            div {
                class: "search-widget",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search articles...",
                    value: "{query}",
                    oninput: move |e: Event<FormData>| {
                        let value = e.value();
                        let cleared = value.is_empty();
                        *SIDEBAR_QUERY.write() = value;
                        if cleared {
                            run_search("");
                        }
                    },
                    onkeydown: move |e: Event<KeyboardData>| {
                        if e.key() == Key::Enter {
                            let q = SIDEBAR_QUERY.read().clone();
                            run_search(&q);
                        }
                    },
                }
                button {
                    class: "search-button",
                    onclick: move |_| {
                        let q = SIDEBAR_QUERY.read().clone();
                        run_search(&q);
                    },
                    "Search"
                }
            }
        }
    }
}
