//! Score calculation.
//!
//! `score = floor(card_count² × 1000 / (seconds × attempts))`
//!
//! Larger boards are rewarded quadratically; slow completion and wasted
//! attempts are penalized linearly and symmetrically. There is no upper
//! bound. Callers clamp `seconds` and `attempts` to at least 1 before
//! calling (see `Game::calculate_score`).

/// Calculate the performance score for a completed game.
///
/// - `card_count`: total cards on the board (2 × pair count)
/// - `seconds`: whole seconds taken to complete
/// - `attempts`: completed pair-flips (2 single flips = 1 attempt)
///
/// Returns 0 when any argument is 0.
///
/// # Examples
///
/// ```
/// use tui_memory_core::calculate_score;
///
/// assert_eq!(calculate_score(4, 10, 2), 800);
/// assert_eq!(calculate_score(10, 20, 5), 1000);
/// ```
pub fn calculate_score(card_count: u32, seconds: u32, attempts: u32) -> u32 {
    if card_count == 0 || seconds == 0 || attempts == 0 {
        return 0;
    }

    let reward = (card_count as u64) * (card_count as u64) * 1000;
    let penalty = (seconds as u64) * (attempts as u64);

    (reward / penalty).min(u32::MAX as u64) as u32
}
