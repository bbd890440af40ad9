//! Byline — core library for the blog reader.
//!
//! This crate holds everything about reading a feed that is independent of how
//! it is displayed: the article model, the search/category filter state
//! machine, persisted preferences, newsletter signup validation, and the toast
//! queue. The desktop app and the CLI are both thin layers over these types.
//!
//! # Modules
//!
//! - [`article`] — Feed model, JSON parsing/loading, category summaries
//! - [`filter`] — Search and category filtering state machine
//! - [`prefs`] — Persisted reader preferences (`prefs.toml`)
//! - [`subscribe`] — Newsletter signup validation and canned responses
//! - [`notify`] — Toast notification queue shared by display surfaces

pub mod article;
pub mod filter;
pub mod notify;
pub mod prefs;
pub mod subscribe;

use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Cross-platform path helpers
// ---------------------------------------------------------------------------

/// Platform-aware home directory: `HOME` on Unix, `USERPROFILE` on Windows.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")).ok().map(PathBuf::from)
}

/// Platform-aware config directory: `~/.byline` on Unix, `%APPDATA%/byline` on Windows.
pub fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var("APPDATA").ok().map(|a| PathBuf::from(a).join("byline"))
    } else {
        home_dir().map(|h| h.join(".byline"))
    }
}
