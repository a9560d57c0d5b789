//! High-score persistence for the memory game.
//!
//! A bounded (top-10), strictly ordered ledger of historical results, kept in
//! a single human-readable JSON file. Ordering is score descending, ties
//! broken by shorter duration and then earlier achievement date.
//!
//! The store implements [`tui_memory_core::ScoreLedger`], so a completed
//! `Game` can submit its result directly:
//!
//! ```no_run
//! use tui_memory_core::Game;
//! use tui_memory_store::JsonHighScoreStore;
//!
//! let mut game = Game::new();
//! game.start(5, None).unwrap();
//! // ... play to completion ...
//! let mut store = JsonHighScoreStore::at_default_path();
//! let outcome = game.save_high_score(&mut store, "ada");
//! if outcome.added {
//!     println!("rank #{}", outcome.rank);
//! }
//! ```
//!
//! The surface is total by design: missing or corrupt files read as an empty
//! ledger, and I/O failures on write are logged via `tracing` rather than
//! propagated.

pub mod entry;
pub mod json;

pub use entry::HighScoreEntry;
pub use json::{JsonHighScoreStore, DEFAULT_LEDGER_FILE, TOP_LIST_CAPACITY};
