//! Terminal input for the memory game.
//!
//! Intentionally independent of any UI framework: maps `crossterm` key
//! events into [`tui_memory_types::GameAction`]. Cursor navigation over the
//! card grid is handled by the gameplay loop; this crate only names the
//! actions.

pub mod map;

pub use map::{handle_key_event, should_quit};
