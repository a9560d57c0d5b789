//! GameView: maps the game state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_memory_core::Game;
use tui_memory_store::HighScoreEntry;
use tui_memory_types::{CardId, GamePhase};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Number of grid columns for a board of `card_count` cards.
///
/// Smallest square-ish layout: `ceil(sqrt(count))` columns.
pub fn grid_columns(card_count: usize) -> u16 {
    let mut cols: u16 = 1;
    while (cols as usize) * (cols as usize) < card_count {
        cols += 1;
    }
    cols
}

/// Format elapsed milliseconds as `MM:SS`.
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let total_seconds = elapsed_ms / 1000;
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Renders the card grid plus a stats side panel.
pub struct GameView {
    /// Card width in terminal columns.
    card_w: u16,
    /// Card height in terminal rows.
    card_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 cards read well at typical terminal glyph aspect ratios.
        Self {
            card_w: 6,
            card_h: 3,
        }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self { card_w, card_h }
    }

    /// Render the current game state into a framebuffer.
    ///
    /// `cursor` is the id of the card under the player's cursor.
    pub fn render(&self, game: &Game, cursor: CardId, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let count = game.cards().len();
        if count == 0 {
            return fb;
        }

        let cols = grid_columns(count);
        let rows = (count as u16 + cols - 1) / cols;
        let grid_w = cols * (self.card_w + 1) - 1;
        let grid_h = rows * (self.card_h + 1) - 1;
        let frame_w = grid_w + 2;
        let frame_h = grid_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        let mismatch = game.phase() == GamePhase::MismatchPending;
        for (i, card) in game.cards().iter().enumerate() {
            let col = (i as u16) % cols;
            let row = (i as u16) / cols;
            let px = start_x + 1 + col * (self.card_w + 1);
            let py = start_y + 1 + row * (self.card_h + 1);

            if card.is_matched() {
                let style = CellStyle {
                    fg: Rgb::new(110, 200, 130),
                    bg: Rgb::new(20, 40, 25),
                    bold: false,
                    dim: true,
                };
                fb.fill_rect(px, py, self.card_w, self.card_h, ' ', style);
                self.put_glyph(&mut fb, px, py, card.symbol().glyph(), style);
            } else if card.is_face_up() {
                // During the mismatch window the failed pair glows red.
                let bg = if mismatch {
                    Rgb::new(70, 25, 25)
                } else {
                    Rgb::new(45, 45, 60)
                };
                let style = CellStyle {
                    fg: Rgb::new(240, 240, 240),
                    bg,
                    bold: true,
                    dim: false,
                };
                fb.fill_rect(px, py, self.card_w, self.card_h, ' ', style);
                self.put_glyph(&mut fb, px, py, card.symbol().glyph(), style);
            } else {
                let style = CellStyle {
                    fg: Rgb::new(90, 100, 140),
                    bg: Rgb::new(30, 30, 40),
                    bold: false,
                    dim: false,
                };
                fb.fill_rect(px, py, self.card_w, self.card_h, '▒', style);
            }

            if i == cursor as usize && !game.is_completed() {
                let marker = CellStyle {
                    fg: Rgb::new(250, 210, 80),
                    bg: Rgb::new(0, 0, 0),
                    bold: true,
                    dim: false,
                };
                let mid = py + self.card_h / 2;
                fb.put_char(px.saturating_sub(1), mid, '▸', marker);
                fb.put_char(px + self.card_w, mid, '◂', marker);
            }
        }

        self.draw_side_panel(&mut fb, game, viewport, start_x, start_y, frame_w);

        if game.is_completed() {
            let banner = format!(" COMPLETE - SCORE {} ", game.calculate_score());
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, &banner);
        }

        fb
    }

    fn put_glyph(&self, fb: &mut FrameBuffer, px: u16, py: u16, glyph: char, style: CellStyle) {
        fb.put_char(px + self.card_w / 2, py + self.card_h / 2, glyph, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        if viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let matched_pairs = game.cards().iter().filter(|c| c.is_matched()).count() / 2;
        let total_pairs = game.cards().len() / 2;

        let mut y = start_y;
        fb.put_str(panel_x, y, "ATTEMPTS", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", game.attempts()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format_elapsed(game.elapsed_ms()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PAIRS", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{matched_pairs}/{total_pairs}"), value);
        y = y.saturating_add(2);

        let hint = match game.phase() {
            GamePhase::Idle | GamePhase::OneFlipped => "flip: space",
            GamePhase::MismatchPending => "memorize!",
            GamePhase::Completed => "r: again",
        };
        fb.put_str(panel_x, y, hint, CellStyle { dim: true, ..value });
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Renders the high-score list as a centered panel, drawn over the game view
/// after completion.
#[derive(Default)]
pub struct ScoreboardView;

impl ScoreboardView {
    /// Draw the top list; `highlight_rank` marks the freshly achieved rank.
    pub fn render_into(
        &self,
        fb: &mut FrameBuffer,
        entries: &[HighScoreEntry],
        highlight_rank: Option<i32>,
        viewport: Viewport,
    ) {
        let panel_w: u16 = 38;
        let panel_h = entries.len() as u16 + 4;
        let x = viewport.width.saturating_sub(panel_w) / 2;
        let y = viewport.height.saturating_sub(panel_h) / 2;

        let frame = CellStyle {
            fg: Rgb::new(250, 210, 80),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        fb.fill_rect(x, y, panel_w, panel_h, ' ', frame);
        GameView::default().draw_border(fb, x, y, panel_w, panel_h, frame);

        let title = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x + (panel_w - 11) / 2, y + 1, "HIGH SCORES", title);

        for (i, entry) in entries.iter().enumerate() {
            let rank = (i + 1) as i32;
            let row = y + 3 + i as u16;
            let line = format!(
                "{:>2}. {:<12} {:>6}  {}",
                rank,
                truncate(&entry.player_name, 12),
                entry.score,
                format_elapsed(entry.duration_seconds * 1000),
            );
            let style = if highlight_rank == Some(rank) {
                CellStyle {
                    fg: Rgb::new(250, 210, 80),
                    bg: Rgb::new(0, 0, 0),
                    bold: true,
                    dim: false,
                }
            } else {
                CellStyle {
                    fg: Rgb::new(200, 200, 200),
                    bg: Rgb::new(0, 0, 0),
                    bold: false,
                    dim: false,
                }
            };
            fb.put_str(x + 2, row, &line, style);
        }
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
