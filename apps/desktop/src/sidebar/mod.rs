//! Sidebar widgets — search box, category list, newsletter signup.

mod categories;
mod newsletter;
mod search_widget;

use dioxus::prelude::*;

use categories::CategoriesWidget;
use newsletter::NewsletterWidget;
use search_widget::SearchWidget;

/// The widget column beside the article grid.
#[component]
pub fn Sidebar() -> Element {
    rsx! {
        aside {
            class: "sidebar",
            SearchWidget {}
            CategoriesWidget {}
            NewsletterWidget {}
        }
    }
}
