//! Reader preferences — the small piece of state that survives restarts.
//!
//! Stored as `prefs.toml` in the Byline config directory. Only the theme
//! choice and an optional feed override persist; filter state is deliberately
//! session-only.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Known keys in `prefs.toml` for config validation.
const KNOWN_PREFS_KEYS: &[&str] = &["dark_mode", "feed"];

/// Persisted reader preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefs {
    /// Theme choice. Dark is the house default.
    pub dark_mode: bool,
    /// Path to a feed JSON file to load instead of the embedded sample.
    pub feed: Option<String>,
}

impl Default for Prefs {
    fn default() -> Prefs {
        Prefs { dark_mode: true, feed: None }
    }
}

/// Location of `prefs.toml`, or `None` when no home directory is resolvable.
pub fn prefs_path() -> Option<PathBuf> {
    crate::config_dir().map(|d| d.join("prefs.toml"))
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

impl Prefs {
    /// Load preferences from the default location. Any failure — no home
    /// directory, missing file, parse error — falls back to defaults so the
    /// reader always starts.
    pub fn load() -> Prefs {
        match prefs_path() {
            Some(path) => Prefs::load_from(&path),
            None => {
                warn!("No home directory; using default preferences");
                Prefs::default()
            }
        }
    }

    /// Load preferences from a specific file, merging overrides onto defaults.
    /// Unknown keys trigger a warning with a typo suggestion.
    pub fn load_from(path: &Path) -> Prefs {
        let mut prefs = Prefs::default();
        if !path.exists() {
            debug!(path = %path.display(), "No prefs file; using defaults");
            return prefs;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read prefs file");
                return prefs;
            }
        };

        let table: toml::Table = match content.parse() {
            Ok(t) => t,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to parse prefs file");
                return prefs;
            }
        };

        // Validate keys — warn on unknown
        for key in table.keys() {
            if !KNOWN_PREFS_KEYS.contains(&key.as_str()) {
                let suggestion =
                    KNOWN_PREFS_KEYS.iter().min_by_key(|k| edit_distance(key, k)).unwrap();
                let dist = edit_distance(key, suggestion);
                if dist <= 3 {
                    warn!(
                        key = key.as_str(),
                        suggestion = *suggestion,
                        "Unknown key in prefs.toml — did you mean '{suggestion}'?"
                    );
                } else {
                    warn!(
                        key = key.as_str(),
                        "Unknown key in prefs.toml (known keys: {})",
                        KNOWN_PREFS_KEYS.join(", ")
                    );
                }
            }
        }

        if let Some(value) = table.get("dark_mode") {
            match value.as_bool() {
                Some(b) => prefs.dark_mode = b,
                None => warn!("prefs.toml: dark_mode must be a boolean"),
            }
        }

        if let Some(value) = table.get("feed") {
            match value.as_str() {
                Some(s) => prefs.feed = Some(s.to_string()),
                None => warn!("prefs.toml: feed must be a string path"),
            }
        }

        prefs
    }

    /// Persist to the default location, creating the config directory first.
    pub fn save(&self) -> io::Result<()> {
        let path = prefs_path()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
        self.save_to(&path)
    }

    /// Persist to a specific file.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml())
    }

    fn to_toml(&self) -> String {
        let mut out = String::new();
        out.push_str("# Byline reader preferences\n");
        out.push_str(&format!("dark_mode = {}\n", self.dark_mode));
        if let Some(feed) = &self.feed {
            out.push_str(&format!("feed = {:?}\n", feed));
        }
        out
    }
}
