//! Article filtering — the search and category state machine behind the card grid.
//!
//! One filter mode is active at a time: no filter, a free-text query, or a
//! category selection. Applying either operation fully overwrites the previous
//! outcome; the visible set, heading, and no-results panel are re-derived from
//! scratch on every call, so repeated application is idempotent by construction.
//!
//! Text matching is case-insensitive unanchored substring over title, excerpt,
//! and category. Category matching is case-insensitive equality — deliberately
//! stricter than the text rule.

use crate::article::Article;

/// Heading shown when no filter is active.
pub const DEFAULT_HEADING: &str = "Latest Articles";

/// Category label that clears filtering entirely.
pub const ALL_CATEGORY: &str = "all";

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// The active filter. `Text` holds the normalized (trimmed, lowercased) query
/// and is never empty; `Category` holds the lowercased label and is never
/// `"all"` — both degenerate inputs normalize to `All`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMode {
    All,
    Text(String),
    Category(String),
}

impl FilterMode {
    fn from_query(raw: &str) -> FilterMode {
        let query = raw.trim().to_lowercase();
        if query.is_empty() {
            FilterMode::All
        } else {
            FilterMode::Text(query)
        }
    }

    /// Category labels are lowercased but not trimmed: surfaces hand over the
    /// bare label with any count suffix already stripped.
    fn from_category(label: &str) -> FilterMode {
        let category = label.to_lowercase();
        if category == ALL_CATEGORY {
            FilterMode::All
        } else {
            FilterMode::Category(category)
        }
    }
}

/// Input routed from any surface — search boxes, category links, CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCommand {
    TextQueryChanged(String),
    CategorySelected(String),
}

/// Everything a display surface needs after a filter application: one
/// visibility flag per article (in feed order), the derived count, the
/// heading text, and the query to echo when the no-results panel must show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub visible: Vec<bool>,
    pub visible_count: usize,
    pub heading: String,
    pub no_results: Option<String>,
}

// ---------------------------------------------------------------------------
// Match index
// ---------------------------------------------------------------------------

/// Pre-lowered matching fields for one article, built once at startup so
/// repeated filtering never re-lowercases the feed.
#[derive(Debug, Clone)]
struct IndexEntry {
    title_lower: String,
    excerpt_lower: String,
    category_lower: String,
}

impl IndexEntry {
    fn of(article: &Article) -> IndexEntry {
        IndexEntry {
            title_lower: article.title.to_lowercase(),
            excerpt_lower: article.excerpt.to_lowercase(),
            category_lower: article.category.to_lowercase(),
        }
    }

    fn matches_text(&self, needle: &str) -> bool {
        self.title_lower.contains(needle)
            || self.excerpt_lower.contains(needle)
            || self.category_lower.contains(needle)
    }
}

// ---------------------------------------------------------------------------
// Pure resolution
// ---------------------------------------------------------------------------

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn heading_for(mode: &FilterMode, count: usize) -> String {
    match mode {
        FilterMode::All => DEFAULT_HEADING.to_string(),
        FilterMode::Text(_) => format!("Search Results ({count} found)"),
        FilterMode::Category(name) => format!("{} Articles ({count})", capitalize_first(name)),
    }
}

/// Derive the next outcome from a mode and the match index. Pure: two calls
/// with the same inputs produce identical outcomes.
fn resolve(mode: &FilterMode, index: &[IndexEntry]) -> FilterOutcome {
    let visible: Vec<bool> = match mode {
        FilterMode::All => vec![true; index.len()],
        FilterMode::Text(needle) => index.iter().map(|e| e.matches_text(needle)).collect(),
        FilterMode::Category(name) => index.iter().map(|e| e.category_lower == *name).collect(),
    };
    let visible_count = visible.iter().filter(|v| **v).count();
    let heading = heading_for(mode, visible_count);
    // Only the text filter owns a no-results panel; category filtering stays
    // silent on zero matches.
    let no_results = match mode {
        FilterMode::Text(query) if visible_count == 0 => Some(query.clone()),
        _ => None,
    };
    FilterOutcome { visible, visible_count, heading, no_results }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Owns the article list, the active [`FilterMode`], and the last
/// [`FilterOutcome`]. All surfaces mutate filtering through this type only.
#[derive(Debug, Clone)]
pub struct FilterController {
    articles: Vec<Article>,
    index: Vec<IndexEntry>,
    mode: FilterMode,
    outcome: FilterOutcome,
}

impl FilterController {
    /// Build a controller over the feed's articles. Starts unfiltered: every
    /// article visible under the default heading.
    pub fn new(articles: Vec<Article>) -> FilterController {
        let index: Vec<IndexEntry> = articles.iter().map(IndexEntry::of).collect();
        let mode = FilterMode::All;
        let outcome = resolve(&mode, &index);
        FilterController { articles, index, mode, outcome }
    }

    /// Route a command to the matching operation.
    pub fn dispatch(&mut self, command: FilterCommand) -> &FilterOutcome {
        match command {
            FilterCommand::TextQueryChanged(query) => self.apply_text_filter(&query),
            FilterCommand::CategorySelected(label) => self.apply_category_filter(&label),
        }
    }

    /// Apply a free-text filter. An all-whitespace query resets to the
    /// unfiltered state; anything else matches case-insensitive substrings
    /// against title, excerpt, or category.
    pub fn apply_text_filter(&mut self, raw_query: &str) -> &FilterOutcome {
        self.mode = FilterMode::from_query(raw_query);
        self.outcome = resolve(&self.mode, &self.index);
        &self.outcome
    }

    /// Apply a category filter. `"all"` (any casing) resets to the unfiltered
    /// state; anything else keeps exactly the articles whose category equals
    /// the label case-insensitively.
    pub fn apply_category_filter(&mut self, label: &str) -> &FilterOutcome {
        self.mode = FilterMode::from_category(label);
        self.outcome = resolve(&self.mode, &self.index);
        &self.outcome
    }

    pub fn mode(&self) -> &FilterMode {
        &self.mode
    }

    pub fn outcome(&self) -> &FilterOutcome {
        &self.outcome
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Visibility of the article at `idx` in feed order.
    pub fn is_visible(&self, idx: usize) -> bool {
        self.outcome.visible.get(idx).copied().unwrap_or(false)
    }

    /// The articles currently visible, in feed order.
    pub fn visible_articles(&self) -> impl Iterator<Item = &Article> + '_ {
        self.articles
            .iter()
            .zip(self.outcome.visible.iter())
            .filter_map(|(article, visible)| visible.then_some(article))
    }
}
