//! Blog feed model — articles, feed loading, and category summaries.
//!
//! A feed is a single JSON document with the blog's title, tagline, and an
//! ordered list of articles. The feed is read once at startup; everything
//! downstream (filtering, category counts, rendering) works on the in-memory
//! article list in feed order.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Embedded sample feed, used when no feed path is configured.
pub const SAMPLE_FEED_JSON: &str = include_str!("../assets/sample_feed.json");

fn default_feed_title() -> String {
    "Byline".to_string()
}

// ---------------------------------------------------------------------------
// Core types
// ---------------------------------------------------------------------------

/// One displayable blog entry. `title`, `excerpt`, and `category` participate
/// in filtering; the remaining fields are card chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, rename = "readMinutes")]
    pub read_minutes: u32,
}

/// A parsed blog feed: site metadata plus the ordered article list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    #[serde(default = "default_feed_title")]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    pub articles: Vec<Article>,
}

impl Feed {
    /// Look up an article by its slug.
    pub fn article_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }
}

/// One sidebar category entry: display label (first-seen spelling) and the
/// number of articles carrying it, grouped case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub label: String,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Feed loading
// ---------------------------------------------------------------------------

/// Parse a feed from its JSON text.
pub fn parse_feed(json: &str) -> Result<Feed, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read and parse a feed file. Parse failures surface as `InvalidData` so
/// callers handle one error type for both missing and malformed feeds.
pub fn load_feed(path: &Path) -> io::Result<Feed> {
    let raw = std::fs::read_to_string(path)?;
    let feed = parse_feed(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    for (i, article) in feed.articles.iter().enumerate() {
        if feed.articles[..i].iter().any(|a| a.slug == article.slug) {
            warn!(slug = article.slug.as_str(), "Duplicate slug in feed — lookups return the first");
        }
    }
    info!(feed = %path.display(), articles = feed.articles.len(), "Feed loaded");
    Ok(feed)
}

/// The embedded sample feed.
pub fn sample_feed() -> Feed {
    parse_feed(SAMPLE_FEED_JSON).expect("embedded sample feed is valid JSON")
}

// ---------------------------------------------------------------------------
// Category summaries
// ---------------------------------------------------------------------------

/// Count articles per category, case-insensitively, in first-seen order.
/// The display label keeps the spelling of the first article that used it.
pub fn category_summaries(articles: &[Article]) -> Vec<CategorySummary> {
    let mut out: Vec<CategorySummary> = Vec::new();
    for article in articles {
        let key = article.category.to_lowercase();
        match out.iter_mut().find(|c| c.label.to_lowercase() == key) {
            Some(entry) => entry.count += 1,
            None => out.push(CategorySummary { label: article.category.clone(), count: 1 }),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, category: &str) -> Article {
        Article {
            slug: title.to_lowercase().replace(' ', "-"),
            title: title.to_string(),
            excerpt: String::new(),
            category: category.to_string(),
            author: String::new(),
            date: String::new(),
            read_minutes: 0,
        }
    }

    #[test]
    fn parse_feed_minimal_fields() {
        let feed = parse_feed(
            r#"{ "articles": [ { "slug": "a", "title": "A", "excerpt": "x", "category": "Food" } ] }"#,
        )
        .expect("minimal feed should parse");
        assert_eq!(feed.title, "Byline", "missing title falls back to the default");
        assert_eq!(feed.tagline, "");
        assert_eq!(feed.articles.len(), 1);
        assert_eq!(feed.articles[0].read_minutes, 0);
    }

    #[test]
    fn parse_feed_reads_camel_case_minutes() {
        let feed = parse_feed(
            r#"{ "articles": [ { "slug": "a", "title": "A", "excerpt": "x", "category": "Food", "readMinutes": 9 } ] }"#,
        )
        .unwrap();
        assert_eq!(feed.articles[0].read_minutes, 9);
    }

    #[test]
    fn parse_feed_rejects_malformed_json() {
        assert!(parse_feed("{ not json").is_err());
        assert!(parse_feed(r#"{ "articles": "nope" }"#).is_err());
    }

    #[test]
    fn sample_feed_is_well_formed() {
        let feed = sample_feed();
        assert!(!feed.articles.is_empty());
        assert!(feed.articles.iter().all(|a| !a.title.is_empty() && !a.category.is_empty()));
    }

    #[test]
    fn article_by_slug_finds_first_match() {
        let feed = Feed {
            title: "t".into(),
            tagline: "".into(),
            articles: vec![article("One", "Food"), article("Two", "Travel")],
        };
        assert_eq!(feed.article_by_slug("two").map(|a| a.title.as_str()), Some("Two"));
        assert!(feed.article_by_slug("missing").is_none());
    }

    #[test]
    fn category_summaries_group_case_insensitively() {
        let articles = vec![
            article("A", "Programming"),
            article("B", "programming"),
            article("C", "Fitness"),
        ];
        let summaries = category_summaries(&articles);
        assert_eq!(summaries.len(), 2);
        // First-seen spelling wins as the label
        assert_eq!(summaries[0].label, "Programming");
        assert_eq!(summaries[0].count, 2);
        assert_eq!(summaries[1].label, "Fitness");
        assert_eq!(summaries[1].count, 1);
    }

    #[test]
    fn category_summaries_keep_feed_order() {
        let articles =
            vec![article("A", "Travel"), article("B", "Food"), article("C", "Travel")];
        let summaries = category_summaries(&articles);
        let labels: Vec<&str> = summaries.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Travel", "Food"]);
    }
}
