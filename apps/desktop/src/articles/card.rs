//! One article card. Entrance animation is staggered by feed position, so a
//! card keeps its delay even when filtering hides its neighbors.

use byline_core::article::Article;
use dioxus::prelude::*;

#[component]
pub fn ArticleCard(article: Article, index: usize, highlighted: bool) -> Element {
    let delay = format!("animation-delay: {:.1}s;", index as f64 * 0.1);

    rsx! {
        article {
            class: if highlighted { "blog-card search-highlight" } else { "blog-card" },
            style: "{delay}",

            div { class: "blog-category", "{article.category}" }
            h3 { class: "blog-title", "{article.title}" }
            p { class: "blog-excerpt", "{article.excerpt}" }

            div {
                class: "blog-meta",
                span { class: "blog-author", "{article.author}" }
                span { class: "meta-sep", "\u{00B7}" }
                span { class: "blog-date", "{article.date}" }
                span { class: "meta-sep", "\u{00B7}" }
                span { class: "blog-read-time", "{article.read_minutes} min read" }
            }
        }
    }
}
