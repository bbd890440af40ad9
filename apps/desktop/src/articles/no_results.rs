//! Empty-state panel for searches with no hits. Only text searches show it;
//! an empty category just gets a zero-count heading.

use dioxus::prelude::*;

#[component]
pub fn NoResults(term: String) -> Element {
    rsx! {
        div {
            class: "no-results-message",
            div {
                class: "no-results-content",
                h3 { "No articles found" }
                p {
                    "Sorry, we couldn't find any articles matching \""
                    strong { "{term}" }
                    "\""
                }
                p { "Try different keywords or browse our categories." }
            }
        }
    }
}
