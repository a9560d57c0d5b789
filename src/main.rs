//! Terminal memory game runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input and
//! a framebuffer-based renderer (no ratatui widgets/layout).
//!
//! The gameplay loop owns every policy the core leaves to the presentation
//! layer: cursor navigation over the card grid, the mismatch display delay,
//! and the save-on-completion flow.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_memory::core::{Game, SaveOutcome};
use tui_memory::input::{handle_key_event, should_quit};
use tui_memory::store::{JsonHighScoreStore, TOP_LIST_CAPACITY};
use tui_memory::term::{grid_columns, GameView, ScoreboardView, TerminalRenderer, Viewport};
use tui_memory::types::{
    CardId, GameAction, DEFAULT_PAIR_COUNT, MISMATCH_DELAY_MS, TICK_MS,
};

fn main() -> Result<()> {
    let pair_count = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_PAIR_COUNT);
    let player_name = std::env::var("USER").unwrap_or_else(|_| "player".to_owned());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, pair_count, &player_name);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, pair_count: u32, player_name: &str) -> Result<()> {
    let mut game = Game::new();
    game.start(pair_count, None)?;

    let mut store = JsonHighScoreStore::at_default_path();
    let view = GameView::default();
    let scoreboard = ScoreboardView;

    let mut cursor: CardId = 0;
    let mut mismatch_timer_ms: i32 = 0;
    let mut save: Option<SaveOutcome> = None;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let mut fb = view.render(&game, cursor, viewport);
        if let Some(outcome) = &save {
            let highlight = if outcome.added {
                Some(outcome.rank)
            } else {
                None
            };
            scoreboard.render_into(&mut fb, &store.get_top(TOP_LIST_CAPACITY), highlight, viewport);
        }
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        match action {
                            GameAction::Restart => {
                                game.start(pair_count, None)?;
                                cursor = 0;
                                mismatch_timer_ms = 0;
                                save = None;
                                term.invalidate();
                            }
                            GameAction::Flip => {
                                let was_pending = game.has_pending_mismatch();
                                game.flip_card(cursor);
                                if game.has_pending_mismatch() && !was_pending {
                                    mismatch_timer_ms = MISMATCH_DELAY_MS as i32;
                                }
                            }
                            _ => move_cursor(&mut cursor, action, game.cards().len()),
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS as u64);

            // Mismatch display delay: the core waits for us to resolve.
            if game.has_pending_mismatch() {
                mismatch_timer_ms -= TICK_MS as i32;
                if mismatch_timer_ms <= 0 {
                    game.resolve_mismatch();
                }
            }

            if game.is_completed() && save.is_none() {
                save = Some(game.save_high_score(&mut store, player_name));
            }
        }
    }
}

/// Move the cursor over the card grid, clamped at the edges.
fn move_cursor(cursor: &mut CardId, action: GameAction, card_count: usize) {
    if card_count == 0 {
        return;
    }
    let cols = grid_columns(card_count) as u32;
    let last = card_count as u32 - 1;

    *cursor = match action {
        GameAction::MoveLeft => cursor.saturating_sub(1),
        GameAction::MoveRight => (*cursor + 1).min(last),
        GameAction::MoveUp => cursor.checked_sub(cols).unwrap_or(*cursor),
        GameAction::MoveDown => {
            if *cursor + cols <= last {
                *cursor + cols
            } else {
                *cursor
            }
        }
        _ => *cursor,
    };
}
