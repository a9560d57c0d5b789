//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the complete rules of the memory game. It performs no
//! I/O of its own (apart from optional clock-based seeding of the shuffle),
//! making it:
//!
//! - **Deterministic**: the same seed produces identical board layouts
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: usable from a terminal UI, a test harness, or headless
//!
//! # Module structure
//!
//! - [`card`]: the smallest state unit - identity, symbol, face-up/matched
//! - [`board`]: ordered card collection with seeded pair generation
//! - [`game`]: the turn state machine - flips, matching, timing, scoring
//! - [`ledger`]: the seam towards score persistence ([`ScoreLedger`])
//! - [`rng`]: seedable generator driving the Fisher-Yates shuffle
//! - [`scoring`]: the pure score formula
//!
//! # Turn protocol
//!
//! A turn is two single-card flips. The second flip always costs one attempt.
//! A failed pair is *not* turned back by the core: the game enters a
//! mismatch-pending phase and the presentation layer decides when to call
//! [`Game::resolve_mismatch`] - typically after a short display delay. Flips
//! arriving inside that window are silently ignored.
//!
//! # Example
//!
//! ```
//! use tui_memory_core::Game;
//!
//! let mut game = Game::new();
//! game.start(2, Some(42)).unwrap();
//!
//! // Find and flip the first card's partner.
//! let first = game.cards()[0];
//! let partner = game
//!     .cards()
//!     .iter()
//!     .skip(1)
//!     .find(|c| c.symbol() == first.symbol())
//!     .unwrap()
//!     .id();
//!
//! game.flip_card(first.id());
//! game.flip_card(partner);
//!
//! assert_eq!(game.attempts(), 1);
//! assert!(game.cards()[0].is_matched());
//! ```

pub mod board;
pub mod card;
pub mod error;
pub mod game;
pub mod ledger;
pub mod rng;
pub mod scoring;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use card::Card;
pub use error::GameError;
pub use game::{Game, SaveOutcome};
pub use ledger::{LedgerOutcome, ScoreLedger, ScoreRecord};
pub use rng::SimpleRng;
pub use scoring::calculate_score;
