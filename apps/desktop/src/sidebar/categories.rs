//! Category list with per-category counts. Clicking one filters the grid and
//! clears both search boxes; the clicked link keeps its highlight until the
//! next category click.

use dioxus::prelude::*;

use crate::state::{select_category, ACTIVE_CATEGORY, READER};

#[component]
pub fn CategoriesWidget() -> Element {
    let reader = READER.read();
    let active = ACTIVE_CATEGORY.read();
    let active = active.as_deref();

    rsx! {
        div {
            class: "sidebar-section",
            id: "categories",
            h3 { class: "sidebar-title", "Categories" }
            ul {
                class: "category-list",
                li {
                    a {
                        class: if active == Some("all") { "category-link active-category" } else { "category-link" },
                        href: "#",
                        onclick: move |e: Event<MouseData>| {
                            e.prevent_default();
                            select_category("all");
                        },
                        "All"
                    }
                }
                if let Some(reader) = reader.as_ref() {
                    for summary in reader.categories.iter() {
                        li {
                            key: "{summary.label}",
                            a {
                                class: if active == Some(summary.label.to_lowercase().as_str()) { "category-link active-category" } else { "category-link" },
                                href: "#",
                                onclick: {
                                    let label = summary.label.clone();
                                    move |e: Event<MouseData>| {
                                        e.prevent_default();
                                        select_category(&label);
                                    }
                                },
                                "{summary.label} ({summary.count})"
                            }
                        }
                    }
                }
            }
        }
    }
}
