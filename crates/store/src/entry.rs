//! Persisted high-score entry.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use tui_memory_core::ScoreRecord;

/// One historical result in the high-score ledger.
///
/// Immutable once stored; the ledger only reorders and trims whole entries.
/// Serialized as pretty JSON with an RFC 3339 achievement timestamp so the
/// backing file stays human-readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub player_name: String,
    pub score: u32,
    pub card_count: u32,
    pub attempts: u32,
    pub duration_seconds: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub date_achieved: OffsetDateTime,
}

impl HighScoreEntry {
    /// Build an entry from a core score record, stamping the achievement
    /// date. "Now" belongs to this layer, not the game core.
    pub fn from_record(record: ScoreRecord, date_achieved: OffsetDateTime) -> Self {
        Self {
            player_name: record.player_name,
            score: record.score,
            card_count: record.card_count,
            attempts: record.attempts,
            duration_seconds: record.duration_seconds,
            date_achieved,
        }
    }
}
