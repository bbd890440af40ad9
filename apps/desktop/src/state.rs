//! Global reader state using Dioxus signals.

use std::path::Path;

use byline_core::article::{category_summaries, load_feed, sample_feed, CategorySummary, Feed};
use byline_core::filter::{FilterCommand, FilterController};
use byline_core::notify::NotificationCenter;
use byline_core::prefs::Prefs;
use dioxus::prelude::*;

/// The loaded feed plus the filter state driving the card grid — created once
/// at startup, replaced only when a different feed is loaded.
pub struct ReaderState {
    pub title: String,
    pub tagline: String,
    pub categories: Vec<CategorySummary>,
    pub controller: FilterController,
}

impl ReaderState {
    /// Build reader state from preferences: the configured feed if it loads,
    /// the embedded sample otherwise.
    pub fn from_prefs(prefs: &Prefs) -> Self {
        let feed = match &prefs.feed {
            Some(path) => match load_feed(Path::new(path)) {
                Ok(feed) => feed,
                Err(e) => {
                    tracing::warn!(path = path.as_str(), error = %e, "Configured feed failed to load; using sample");
                    sample_feed()
                }
            },
            None => sample_feed(),
        };
        Self::from_feed(feed)
    }

    pub fn from_feed(feed: Feed) -> Self {
        let categories = category_summaries(&feed.articles);
        ReaderState {
            title: feed.title,
            tagline: feed.tagline,
            categories,
            controller: FilterController::new(feed.articles),
        }
    }
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Loaded feed + filter controller — set once at startup
pub static READER: GlobalSignal<Option<ReaderState>> = Signal::global(|| None);

/// Theme choice, mirrored to `prefs.toml` on toggle
pub static DARK_MODE: GlobalSignal<bool> = Signal::global(|| true);

/// Text in the header search box
pub static HEADER_QUERY: GlobalSignal<String> = Signal::global(|| String::new());

/// Text in the sidebar search box
pub static SIDEBAR_QUERY: GlobalSignal<String> = Signal::global(|| String::new());

/// Category link currently marked active (lowercased). Text searches leave
/// the last clicked link highlighted, same as the category list always has.
pub static ACTIVE_CATEGORY: GlobalSignal<Option<String>> = Signal::global(|| None);

/// Nav link currently marked active
pub static ACTIVE_NAV: GlobalSignal<&'static str> = Signal::global(|| "home");

/// Queued toasts
pub static NOTIFICATIONS: GlobalSignal<NotificationCenter> =
    Signal::global(|| NotificationCenter::new());

/// Whether the header is slid out of view (scrolling down past the threshold)
pub static HEADER_HIDDEN: GlobalSignal<bool> = Signal::global(|| false);

/// Whether the scroll-to-top button is shown
pub static SHOW_SCROLL_TOP: GlobalSignal<bool> = Signal::global(|| false);

// ---------------------------------------------------------------------------
// Filter plumbing
// ---------------------------------------------------------------------------

/// Route a filter command to the controller and re-render everything that
/// reads the outcome.
pub fn apply_filter(command: FilterCommand) {
    if let Some(reader) = READER.write().as_mut() {
        reader.controller.dispatch(command);
    }
}

/// Run a text search from either search box.
pub fn run_search(raw_query: &str) {
    apply_filter(FilterCommand::TextQueryChanged(raw_query.to_string()));
}

/// Select a category from the sidebar. Also clears both search boxes; the
/// category link highlight is the only input state that survives.
pub fn select_category(label: &str) {
    apply_filter(FilterCommand::CategorySelected(label.to_string()));
    *ACTIVE_CATEGORY.write() = Some(label.to_lowercase());
    *HEADER_QUERY.write() = String::new();
    *SIDEBAR_QUERY.write() = String::new();
}
