//! Article grid — section heading, cards, and the no-results panel.

mod card;
mod no_results;

use byline_core::filter::FilterMode;
use dioxus::prelude::*;

use crate::state::READER;
use card::ArticleCard;
use no_results::NoResults;

/// The card grid under the dynamic section heading. Cards keep their feed
/// order; filtering only changes which ones render.
#[component]
pub fn ArticleGrid() -> Element {
    let reader = READER.read();
    let Some(reader) = reader.as_ref() else {
        return rsx! {
            section {
                class: "articles-section",
                id: "articles",
                div { class: "grid-empty", "Loading feed..." }
            }
        };
    };

    let outcome = reader.controller.outcome();
    let text_mode = matches!(reader.controller.mode(), FilterMode::Text(_));

    rsx! {
        section {
            class: "articles-section",
            id: "articles",
            h2 { class: "section-title", "{outcome.heading}" }

            div {
                class: "blog-grid",
                for (i, article) in reader.controller.articles().iter().enumerate() {
                    if reader.controller.is_visible(i) {
                        ArticleCard {
                            key: "{article.slug}",
                            article: article.clone(),
                            index: i,
                            highlighted: text_mode,
                        }
                    }
                }

                if let Some(term) = outcome.no_results.as_ref() {
                    NoResults { term: term.clone() }
                }
            }
        }
    }
}
