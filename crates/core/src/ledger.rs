//! Ledger seam between the game core and score persistence.
//!
//! The core builds a [`ScoreRecord`] for a finished game; the storage layer
//! decides acceptance and rank, and stamps the achievement timestamp. The
//! trait keeps the core free of I/O while letting `Game::save_high_score`
//! drive the whole flow.

/// Stats of one finished (or abandoned) game, as produced by the core.
///
/// A record carries no timestamp; "now" belongs to the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub player_name: String,
    /// 0 for a non-qualifying (incomplete) attempt.
    pub score: u32,
    pub card_count: u32,
    pub attempts: u32,
    pub duration_seconds: u64,
}

/// The ledger's verdict on a submitted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerOutcome {
    /// Whether the record survived capacity trimming.
    pub added: bool,
    /// 1-based rank within the top list, or -1 when not added.
    pub rank: i32,
}

impl LedgerOutcome {
    /// Outcome for a record that was not accepted.
    pub fn rejected() -> Self {
        Self {
            added: false,
            rank: -1,
        }
    }
}

/// A ranked, bounded store of historical results.
///
/// Implementations decide acceptance and rank, persist the updated top list,
/// and stamp the achievement date.
pub trait ScoreLedger {
    /// Submit a finished game's record, returning acceptance and rank.
    fn submit(&mut self, record: ScoreRecord) -> LedgerOutcome;
}
