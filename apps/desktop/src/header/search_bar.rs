//! Header search box — searches on Enter or the button, resets when cleared.

use dioxus::prelude::*;

use crate::state::{run_search, HEADER_QUERY};

#[component]
pub fn HeaderSearch() -> Element {
    let query = HEADER_QUERY.read();

    rsx! {
        div {
            class: "header-search",
            input {
                class: "header-search-input",
                r#type: "text",
                placeholder: "Search articles...",
                value: "{query}",
                oninput: move |e: Event<FormData>| {
                    let value = e.value();
                    let cleared = value.is_empty();
                    *HEADER_QUERY.write() = value;
                    // Emptying the box resets the grid; typing waits for Enter.
                    if cleared {
                        run_search("");
                    }
                },
                onkeydown: move |e: Event<KeyboardData>| {
                    if e.key() == Key::Enter {
                        let q = HEADER_QUERY.read().clone();
                        run_search(&q);
                    }
                },
            }
            button {
                class: "header-search-btn",
                aria_label: "Search",
                onclick: move |_| {
                    let q = HEADER_QUERY.read().clone();
                    run_search(&q);
                },
                svg {
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                }
            }
        }
    }
}
