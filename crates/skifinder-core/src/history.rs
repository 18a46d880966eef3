// crates/skifinder-core/src/history.rs

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::warn;

/// Maximum number of remembered queries.
pub const MAX_RECENT: usize = 5;

/// File name of the persisted history inside the data directory.
pub const HISTORY_FILE: &str = "recent_searches.json";

/// Bounded, ordered list of recent search queries.
///
/// Most-recent-first, deduplicated by exact string match, capped at
/// [`MAX_RECENT`]. Serialized as a plain JSON array of strings. Single
/// writer: only the search dispatch path records entries.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentSearches {
    entries: Vec<String>,
}

impl RecentSearches {
    /// Front-insert a query, dropping an exact duplicate and truncating to
    /// the cap. Called after every successful search.
    pub fn record(&mut self, query: &str) {
        self.entries.retain(|q| q != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_RECENT);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load the history from `dir/recent_searches.json`.
    ///
    /// A missing or corrupt file yields the empty history, never an error;
    /// the history is a convenience, not a source of truth.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(HISTORY_FILE);
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(_) => return Self::default(),
        };
        match serde_json::from_reader(BufReader::new(file)) {
            Ok(entries) => Self { entries },
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unreadable history file");
                Self::default()
            }
        }
    }

    /// Persist the history to `dir/recent_searches.json`.
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        let path = dir.join(HISTORY_FILE);
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), &self.entries)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entry_is_first() {
        let mut h = RecentSearches::default();
        h.record("vermont");
        h.record("maine");
        assert_eq!(h.entries(), ["maine", "vermont"]);
    }

    #[test]
    fn duplicates_are_promoted_not_repeated() {
        let mut h = RecentSearches::default();
        h.record("vermont");
        h.record("maine");
        h.record("vermont");
        assert_eq!(h.entries(), ["vermont", "maine"]);
    }

    #[test]
    fn never_exceeds_the_cap() {
        let mut h = RecentSearches::default();
        for q in ["a", "b", "c", "d", "e", "f", "g"] {
            h.record(q);
        }
        assert_eq!(h.entries().len(), MAX_RECENT);
        assert_eq!(h.entries(), ["g", "f", "e", "d", "c"]);
    }

    #[test]
    fn round_trips_through_the_data_dir() {
        let dir = std::env::temp_dir().join(format!(
            "skifinder-history-{}-{:?}",
            std::process::id(),
            std::thread::current().id()
        ));
        let mut h = RecentSearches::default();
        h.record("new hampshire");
        h.record("vermont");
        h.save(&dir).unwrap();

        let loaded = RecentSearches::load(&dir);
        assert_eq!(loaded.entries(), ["vermont", "new hampshire"]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_file_yields_empty_history() {
        let loaded = RecentSearches::load(Path::new("/nonexistent/skifinder-test"));
        assert!(loaded.is_empty());
    }
}
