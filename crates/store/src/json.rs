//! JSON-file high-score store.
//!
//! Keeps a bounded, ordered top list in a single pretty-printed JSON file.
//! The store surface is total: an absent or unreadable backing file reads as
//! an empty ledger, and persistence failures are logged, never propagated -
//! the ranking decision does not depend on I/O success.
//!
//! Each add is a read-modify-write over the shared file, serialized within a
//! process by the `&mut self` receiver. The full top list is rewritten after
//! every add, including rejected candidates (persistence is idempotent).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use tracing::{debug, warn};

use tui_memory_core::{LedgerOutcome, ScoreLedger, ScoreRecord};

use crate::entry::HighScoreEntry;

/// Maximum number of entries the ledger retains.
pub const TOP_LIST_CAPACITY: usize = 10;

/// Default ledger file name, relative to the working directory.
pub const DEFAULT_LEDGER_FILE: &str = "memory_highscores.json";

/// File-backed high-score store with a capacity of [`TOP_LIST_CAPACITY`].
///
/// Ordering: score descending, then duration ascending, then achievement
/// date ascending - efficiency first, then seniority.
#[derive(Debug)]
pub struct JsonHighScoreStore {
    path: PathBuf,
}

impl JsonHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store using [`DEFAULT_LEDGER_FILE`] in the working directory.
    pub fn at_default_path() -> Self {
        Self::new(DEFAULT_LEDGER_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The top `n` entries in rank order, capped at the store capacity.
    ///
    /// Never fails: a missing or malformed backing file yields an empty list.
    pub fn get_top(&self, n: usize) -> Vec<HighScoreEntry> {
        let mut list = self.load();
        sort_ranked(&mut list);
        list.truncate(n.min(TOP_LIST_CAPACITY));
        list
    }

    /// Offer a candidate entry to the top list.
    ///
    /// The candidate joins the current list, the full ordering is re-applied,
    /// and the list is trimmed to capacity. Returns whether the candidate
    /// survived and its 1-based rank (-1 otherwise). The resulting list is
    /// persisted either way.
    pub fn add_or_update(&mut self, entry: HighScoreEntry) -> LedgerOutcome {
        let mut list = self.get_top(TOP_LIST_CAPACITY);
        list.push(entry.clone());
        sort_ranked(&mut list);
        list.truncate(TOP_LIST_CAPACITY);

        let rank = list.iter().position(|e| *e == entry);
        self.persist(&list);

        match rank {
            Some(index) => LedgerOutcome {
                added: true,
                rank: (index + 1) as i32,
            },
            None => LedgerOutcome::rejected(),
        }
    }

    /// Empty the ledger wholesale by removing the backing file.
    pub fn clear(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => warn!(path = %self.path.display(), %err, "failed to clear ledger"),
        }
    }

    fn load(&self) -> Vec<HighScoreEntry> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                // Absent backing file is the empty ledger, not an error.
                if err.kind() != ErrorKind::NotFound {
                    warn!(path = %self.path.display(), %err, "ledger unreadable, treating as empty");
                }
                return Vec::new();
            }
        };

        match serde_json::from_str(&text) {
            Ok(list) => list,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ledger malformed, treating as empty");
                Vec::new()
            }
        }
    }

    fn persist(&self, list: &[HighScoreEntry]) {
        let json = match serde_json::to_string_pretty(list) {
            Ok(json) => json,
            Err(err) => {
                warn!(%err, "failed to serialize ledger");
                return;
            }
        };
        match fs::write(&self.path, json) {
            Ok(()) => debug!(path = %self.path.display(), entries = list.len(), "ledger persisted"),
            Err(err) => warn!(path = %self.path.display(), %err, "failed to persist ledger"),
        }
    }
}

impl ScoreLedger for JsonHighScoreStore {
    fn submit(&mut self, record: ScoreRecord) -> LedgerOutcome {
        let entry = HighScoreEntry::from_record(record, OffsetDateTime::now_utc());
        self.add_or_update(entry)
    }
}

/// Score descending, then duration ascending, then date achieved ascending.
fn sort_ranked(list: &mut [HighScoreEntry]) {
    list.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.duration_seconds.cmp(&b.duration_seconds))
            .then(a.date_achieved.cmp(&b.date_achieved))
    });
}
