//! Core error type.

use thiserror::Error;

/// Errors surfaced by the game core.
///
/// These are programmer errors: invalid arguments detected immediately, never
/// retried. Invalid *flips* (unknown id, already face-up, already matched,
/// mismatch pending) are deliberately not errors — they are expected from a
/// loosely synchronized presentation layer and are silently ignored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("pair count must be at least 1, got {0}")]
    InvalidPairCount(u32),
}
