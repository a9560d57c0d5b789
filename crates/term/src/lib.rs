//! Terminal rendering for the memory game.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer (pure, unit-testable), and a crossterm-backed renderer
//! flushes frames with diff-based redraws.
//!
//! Goals:
//! - Keep the game core deterministic and testable
//! - Keep all layout/styling decisions out of the gameplay loop

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_store as store;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{format_elapsed, grid_columns, GameView, ScoreboardView, Viewport};
pub use renderer::TerminalRenderer;
