//! GameView rendering tests - pure framebuffer output, no terminal needed.

use tui_memory::core::Game;
use tui_memory::store::HighScoreEntry;
use tui_memory::term::{FrameBuffer, GameView, ScoreboardView, Viewport};
use tui_memory::types::CardId;

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn match_pair(game: &mut Game, index: usize) {
    let pairs: Vec<(CardId, CardId)> = game
        .cards()
        .iter()
        .filter_map(|card| {
            game.cards()
                .iter()
                .find(|c| c.id() > card.id() && c.symbol() == card.symbol())
                .map(|partner| (card.id(), partner.id()))
        })
        .collect();
    let (first, partner) = pairs[index];
    game.flip_card(first);
    game.flip_card(partner);
}

#[test]
fn test_face_down_cards_show_their_backs() {
    let mut game = Game::new();
    game.start(2, Some(1)).unwrap();

    let fb = GameView::default().render(&game, 0, Viewport::new(80, 24));
    let text = screen_text(&fb);

    assert!(text.contains('▒'), "face-down cards render as card backs");
    assert!(text.contains("ATTEMPTS"), "side panel is present");
    assert!(text.contains("00:00"), "fresh game shows zero elapsed time");
}

#[test]
fn test_face_up_card_shows_its_symbol() {
    let mut game = Game::new();
    game.start(2, Some(1)).unwrap();
    game.flip_card(0);

    // Narrow viewport: the side panel is skipped, so the only letter on
    // screen is the flipped card's glyph.
    let glyph = game.cards()[0].symbol().glyph();
    let fb = GameView::default().render(&game, 0, Viewport::new(30, 24));
    let text = screen_text(&fb);
    assert!(text.contains(glyph), "flipped card shows glyph {glyph:?}");
    assert_eq!(
        text.chars().filter(|c| c.is_ascii_alphanumeric()).count(),
        1,
        "exactly one symbol is visible"
    );
}

#[test]
fn test_completion_banner_shows_the_score() {
    let mut game = Game::new();
    game.start(2, Some(1)).unwrap();
    game.tick(8000);
    match_pair(&mut game, 0);
    match_pair(&mut game, 1);
    assert!(game.is_completed());

    let fb = GameView::default().render(&game, 0, Viewport::new(80, 24));
    let text = screen_text(&fb);
    assert!(text.contains("COMPLETE"));
    assert!(text.contains(&game.calculate_score().to_string()));
}

#[test]
fn test_render_fits_small_viewports_without_panicking() {
    let mut game = Game::new();
    game.start(13, Some(1)).unwrap();

    for (w, h) in [(5, 3), (20, 10), (200, 60)] {
        let fb = GameView::default().render(&game, 0, Viewport::new(w, h));
        assert_eq!(fb.width(), w);
        assert_eq!(fb.height(), h);
    }
}

#[test]
fn test_scoreboard_lists_entries_in_rank_order() {
    let entries = vec![
        HighScoreEntry {
            player_name: "first".to_owned(),
            score: 900,
            card_count: 10,
            attempts: 5,
            duration_seconds: 20,
            date_achieved: time::OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap(),
        },
        HighScoreEntry {
            player_name: "second".to_owned(),
            score: 500,
            card_count: 10,
            attempts: 8,
            duration_seconds: 35,
            date_achieved: time::OffsetDateTime::from_unix_timestamp(1_700_000_100).unwrap(),
        },
    ];

    let mut fb = FrameBuffer::new(80, 24);
    ScoreboardView.render_into(&mut fb, &entries, Some(1), Viewport::new(80, 24));

    let text = screen_text(&fb);
    assert!(text.contains("HIGH SCORES"));
    let first_pos = text.find("first").unwrap();
    let second_pos = text.find("second").unwrap();
    assert!(first_pos < second_pos, "rank 1 renders above rank 2");
    assert!(text.contains("900"));
}
