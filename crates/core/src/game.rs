//! Game - the central turn state machine.
//!
//! Ties together the board, the attempt counter, elapsed-time tracking, and
//! score computation. The machine moves through four phases:
//!
//! - `Idle`: no flipped card is awaiting a partner
//! - `OneFlipped`: first card of a turn is face-up
//! - `MismatchPending`: a failed pair is face-up, waiting for the caller to
//!   resolve it (the core never turns the cards back itself, and never
//!   sleeps - the delay policy belongs to the presentation loop)
//! - `Completed`: every card matched; elapsed time is frozen
//!
//! Time is tick-driven: the gameplay loop calls [`Game::tick`] with the
//! elapsed milliseconds since the last call. This keeps the core
//! deterministic under test and stops the clock exactly at completion.

use tui_memory_types::{CardId, GamePhase};

use crate::board::Board;
use crate::card::Card;
use crate::error::GameError;
use crate::ledger::{LedgerOutcome, ScoreLedger, ScoreRecord};
use crate::scoring::calculate_score;

/// Result of a [`Game::save_high_score`] call: the ledger's verdict plus the
/// record that was (or would have been) submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub added: bool,
    /// 1-based rank in the top list, or -1 when not added.
    pub rank: i32,
    pub record: ScoreRecord,
}

/// One memory game in play.
///
/// All mutation goes through `start`, `flip_card`, `resolve_mismatch`, and
/// `tick`; queries expose read-only views so collaborators cannot bypass the
/// state machine.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    attempts: u32,
    /// First card of the current turn, face-up and awaiting its partner.
    first_flip: Option<CardId>,
    /// A failed pair, both face-up, awaiting external resolution.
    pending_mismatch: Option<(CardId, CardId)>,
    elapsed_ms: u64,
    started: bool,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a game with `pair_count` pairs.
    ///
    /// Re-initializes the board, resets attempts and pending state, and
    /// restarts the clock. Passing the same seed reproduces the same layout;
    /// `None` shuffles from the system clock.
    pub fn start(&mut self, pair_count: u32, seed: Option<u32>) -> Result<(), GameError> {
        self.board.initialize(pair_count, seed)?;
        self.attempts = 0;
        self.first_flip = None;
        self.pending_mismatch = None;
        self.elapsed_ms = 0;
        self.started = true;
        Ok(())
    }

    /// Advance the game clock by `dt_ms` milliseconds.
    ///
    /// Accumulation stops permanently the moment the last pair matches, so
    /// elapsed time sampled after completion never changes.
    pub fn tick(&mut self, dt_ms: u64) {
        if self.started && !self.is_completed() {
            self.elapsed_ms += dt_ms;
        }
    }

    /// Flip the card with the given id.
    ///
    /// Silently ignored when the id is unknown, the card is already face-up
    /// or matched, or a mismatch is pending (rapid input during the
    /// "show both" window is debounced here, not surfaced as an error).
    ///
    /// The second flip of a turn always costs one attempt. A matching pair is
    /// marked matched; a failed pair stays face-up and moves the game to
    /// `MismatchPending` until [`Game::resolve_mismatch`] is called.
    pub fn flip_card(&mut self, id: CardId) {
        if self.pending_mismatch.is_some() {
            return;
        }

        let symbol = match self.board.card(id) {
            Some(card) if !card.is_face_up() && !card.is_matched() => card.symbol(),
            _ => return,
        };

        if let Some(card) = self.board.card_mut(id) {
            card.flip();
        }

        let first = match self.first_flip.take() {
            None => {
                self.first_flip = Some(id);
                return;
            }
            Some(first) => first,
        };

        // Second flip of the turn: one attempt, match or mismatch.
        self.attempts += 1;

        let first_symbol = self.board.card(first).map(|c| c.symbol());
        if first_symbol == Some(symbol) {
            if let Some(card) = self.board.card_mut(first) {
                card.mark_matched();
            }
            if let Some(card) = self.board.card_mut(id) {
                card.mark_matched();
            }
        } else {
            self.pending_mismatch = Some((first, id));
        }
    }

    /// Whether a failed pair is face-up awaiting resolution.
    pub fn has_pending_mismatch(&self) -> bool {
        self.pending_mismatch.is_some()
    }

    /// Turn a pending failed pair back face-down.
    ///
    /// Only meaningful in `MismatchPending`; a no-op otherwise, so callers
    /// may invoke it unconditionally.
    pub fn resolve_mismatch(&mut self) {
        if let Some((first, second)) = self.pending_mismatch.take() {
            if let Some(card) = self.board.card_mut(first) {
                card.flip();
            }
            if let Some(card) = self.board.card_mut(second) {
                card.flip();
            }
        }
    }

    /// Current phase of the turn state machine.
    pub fn phase(&self) -> GamePhase {
        if self.is_completed() {
            GamePhase::Completed
        } else if self.pending_mismatch.is_some() {
            GamePhase::MismatchPending
        } else if self.first_flip.is_some() {
            GamePhase::OneFlipped
        } else {
            GamePhase::Idle
        }
    }

    /// Read-only view of the cards in board order.
    pub fn cards(&self) -> &[Card] {
        self.board.cards()
    }

    /// Completed pair-flips so far (2 single flips = 1 attempt).
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Elapsed play time in milliseconds. Frozen once completed.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// True iff the board is non-empty and every card is matched.
    pub fn is_completed(&self) -> bool {
        self.board.all_matched()
    }

    /// Score of the current game: 0 unless completed, otherwise the score
    /// formula over (board size, elapsed whole seconds, attempts), with
    /// seconds and attempts clamped to at least 1 to guard sub-second or
    /// degenerate completions.
    pub fn calculate_score(&self) -> u32 {
        if !self.is_completed() {
            return 0;
        }
        let seconds = (self.elapsed_ms / 1000).max(1) as u32;
        let attempts = self.attempts.max(1);
        calculate_score(self.board.len() as u32, seconds, attempts)
    }

    /// Offer this game's result to a high-score ledger.
    ///
    /// An incomplete game returns a non-added outcome carrying a zero-score
    /// record with the current (partial) stats; nothing is submitted or
    /// persisted. A completed game submits a full record and returns the
    /// ledger's decision alongside it.
    pub fn save_high_score<L: ScoreLedger>(&self, ledger: &mut L, player_name: &str) -> SaveOutcome {
        if !self.is_completed() {
            let record = ScoreRecord {
                player_name: player_name.to_owned(),
                score: 0,
                card_count: self.board.len() as u32,
                attempts: self.attempts,
                duration_seconds: self.elapsed_ms / 1000,
            };
            let LedgerOutcome { added, rank } = LedgerOutcome::rejected();
            return SaveOutcome {
                added,
                rank,
                record,
            };
        }

        let record = ScoreRecord {
            player_name: player_name.to_owned(),
            score: self.calculate_score(),
            card_count: self.board.len() as u32,
            attempts: self.attempts,
            duration_seconds: (self.elapsed_ms / 1000).max(1),
        };
        let LedgerOutcome { added, rank } = ledger.submit(record.clone());
        SaveOutcome {
            added,
            rank,
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_memory_types::Symbol;

    /// Ids of a (first, partner) pair and of two mismatching cards, resolved
    /// from the seeded layout so tests do not depend on shuffle order.
    fn pair_and_mismatch(game: &Game) -> ((CardId, CardId), (CardId, CardId)) {
        let cards = game.cards();
        let first = cards[0];
        let partner = cards
            .iter()
            .skip(1)
            .find(|c| c.symbol() == first.symbol())
            .expect("every symbol appears twice");
        let other = cards
            .iter()
            .find(|c| c.symbol() != first.symbol())
            .expect("board has at least two pairs");
        (
            (first.id(), partner.id()),
            (first.id(), other.id()),
        )
    }

    #[test]
    fn test_start_resets_stats() {
        let mut game = Game::new();
        game.start(3, Some(1)).unwrap();

        assert_eq!(game.cards().len(), 6);
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.elapsed_ms(), 0);
        assert!(!game.is_completed());
        assert_eq!(game.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_start_rejects_zero_pairs() {
        let mut game = Game::new();
        assert_eq!(game.start(0, None), Err(GameError::InvalidPairCount(0)));
    }

    #[test]
    fn test_first_flip_turns_one_card_only() {
        let mut game = Game::new();
        game.start(2, Some(1)).unwrap();

        game.flip_card(0);

        assert!(game.cards()[0].is_face_up());
        assert_eq!(game.cards().iter().filter(|c| c.is_face_up()).count(), 1);
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.phase(), GamePhase::OneFlipped);
    }

    #[test]
    fn test_matching_pair_marks_both_matched() {
        let mut game = Game::new();
        game.start(2, Some(1)).unwrap();
        let ((a, b), _) = pair_and_mismatch(&game);

        game.flip_card(a);
        game.flip_card(b);

        assert!(game.cards()[a as usize].is_matched());
        assert!(game.cards()[b as usize].is_matched());
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_mismatch_stays_face_up_until_resolved() {
        let mut game = Game::new();
        game.start(2, Some(1)).unwrap();
        let (_, (a, b)) = pair_and_mismatch(&game);

        game.flip_card(a);
        game.flip_card(b);

        assert_eq!(game.phase(), GamePhase::MismatchPending);
        assert!(game.has_pending_mismatch());
        assert!(game.cards()[a as usize].is_face_up());
        assert!(game.cards()[b as usize].is_face_up());
        assert_eq!(game.attempts(), 1);

        game.resolve_mismatch();

        assert_eq!(game.phase(), GamePhase::Idle);
        assert!(!game.cards()[a as usize].is_face_up());
        assert!(!game.cards()[b as usize].is_face_up());
    }

    #[test]
    fn test_flips_ignored_while_mismatch_pending() {
        let mut game = Game::new();
        game.start(3, Some(1)).unwrap();
        let (_, (a, b)) = pair_and_mismatch(&game);

        game.flip_card(a);
        game.flip_card(b);
        assert!(game.has_pending_mismatch());

        // Any further flip is debounced until the caller resolves.
        let third = game
            .cards()
            .iter()
            .find(|c| !c.is_face_up())
            .map(|c| c.id())
            .unwrap();
        game.flip_card(third);

        assert!(!game.cards()[third as usize].is_face_up());
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn test_invalid_flips_are_ignored() {
        let mut game = Game::new();
        game.start(2, Some(1)).unwrap();

        // Unknown id.
        game.flip_card(99);
        assert_eq!(game.phase(), GamePhase::Idle);

        // Re-flipping the same face-up card is not a second flip.
        game.flip_card(0);
        game.flip_card(0);
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.phase(), GamePhase::OneFlipped);
    }

    #[test]
    fn test_matched_cards_cannot_be_reflipped() {
        let mut game = Game::new();
        game.start(2, Some(1)).unwrap();
        let ((a, b), _) = pair_and_mismatch(&game);

        game.flip_card(a);
        game.flip_card(b);
        assert!(game.cards()[a as usize].is_matched());

        game.flip_card(a);
        assert_eq!(game.phase(), GamePhase::Idle);
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn test_resolve_is_a_no_op_outside_mismatch_pending() {
        let mut game = Game::new();
        game.start(2, Some(1)).unwrap();

        game.resolve_mismatch();
        assert_eq!(game.phase(), GamePhase::Idle);

        game.flip_card(0);
        game.resolve_mismatch();
        assert_eq!(game.phase(), GamePhase::OneFlipped);
        assert!(game.cards()[0].is_face_up());
    }

    #[test]
    fn test_completion_stops_the_clock() {
        let mut game = Game::new();
        game.start(1, Some(1)).unwrap();

        game.tick(2500);
        game.flip_card(0);
        game.flip_card(1);
        assert!(game.is_completed());
        assert_eq!(game.phase(), GamePhase::Completed);

        let frozen = game.elapsed_ms();
        game.tick(5000);
        assert_eq!(game.elapsed_ms(), frozen);
    }

    #[test]
    fn test_clock_does_not_run_before_start() {
        let mut game = Game::new();
        game.tick(1000);
        assert_eq!(game.elapsed_ms(), 0);
    }

    #[test]
    fn test_attempts_count_pairs_not_single_flips() {
        let mut game = Game::new();
        game.start(2, Some(1)).unwrap();
        let (_, (a, b)) = pair_and_mismatch(&game);

        game.flip_card(a);
        assert_eq!(game.attempts(), 0);
        game.flip_card(b);
        assert_eq!(game.attempts(), 1);

        game.resolve_mismatch();
        game.flip_card(a);
        assert_eq!(game.attempts(), 1);
        game.flip_card(b);
        assert_eq!(game.attempts(), 2);
    }

    #[test]
    fn test_score_zero_unless_completed() {
        let mut game = Game::new();
        game.start(2, Some(1)).unwrap();
        game.tick(10_000);
        assert_eq!(game.calculate_score(), 0);
    }

    #[test]
    fn test_score_uses_elapsed_seconds_and_attempts() {
        let mut game = Game::new();
        game.start(1, Some(1)).unwrap();

        game.tick(10_000);
        game.flip_card(0);
        game.flip_card(1);

        // 2 cards, 10 seconds, 1 attempt: 4 * 1000 / 10 = 400.
        assert_eq!(game.calculate_score(), 400);
    }

    #[test]
    fn test_score_clamps_sub_second_completion() {
        let mut game = Game::new();
        game.start(1, Some(1)).unwrap();

        game.tick(300);
        game.flip_card(0);
        game.flip_card(1);

        // Floors to 1 second rather than dividing by zero.
        assert_eq!(game.calculate_score(), 4000);
    }

    /// Ledger stub recording submissions and answering with a fixed rank.
    struct RecordingLedger {
        submitted: Vec<ScoreRecord>,
    }

    impl ScoreLedger for RecordingLedger {
        fn submit(&mut self, record: ScoreRecord) -> LedgerOutcome {
            self.submitted.push(record);
            LedgerOutcome {
                added: true,
                rank: 1,
            }
        }
    }

    #[test]
    fn test_save_high_score_incomplete_game_is_not_submitted() {
        let mut game = Game::new();
        game.start(2, Some(1)).unwrap();
        game.tick(3000);
        game.flip_card(0);

        let mut ledger = RecordingLedger {
            submitted: Vec::new(),
        };
        let outcome = game.save_high_score(&mut ledger, "ada");

        assert!(!outcome.added);
        assert_eq!(outcome.rank, -1);
        assert_eq!(outcome.record.score, 0);
        assert_eq!(outcome.record.card_count, 4);
        assert_eq!(outcome.record.duration_seconds, 3);
        assert!(ledger.submitted.is_empty());
    }

    #[test]
    fn test_save_high_score_completed_game_submits_full_record() {
        let mut game = Game::new();
        game.start(1, Some(1)).unwrap();
        game.tick(5000);
        game.flip_card(0);
        game.flip_card(1);

        let mut ledger = RecordingLedger {
            submitted: Vec::new(),
        };
        let outcome = game.save_high_score(&mut ledger, "ada");

        assert!(outcome.added);
        assert_eq!(outcome.rank, 1);
        assert_eq!(ledger.submitted.len(), 1);

        let record = &ledger.submitted[0];
        assert_eq!(record.player_name, "ada");
        assert_eq!(record.card_count, 2);
        assert_eq!(record.attempts, 1);
        assert_eq!(record.duration_seconds, 5);
        assert_eq!(record.score, game.calculate_score());
    }

    #[test]
    fn test_full_game_to_completion() {
        let mut game = Game::new();
        game.start(3, Some(7)).unwrap();

        // Match every pair by looking the partners up by symbol.
        for value in 0..3 {
            let ids: Vec<CardId> = game
                .cards()
                .iter()
                .filter(|c| c.symbol() == Symbol(value))
                .map(|c| c.id())
                .collect();
            game.flip_card(ids[0]);
            game.flip_card(ids[1]);
        }

        assert!(game.is_completed());
        assert_eq!(game.attempts(), 3);
    }
}
