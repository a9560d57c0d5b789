//! High-score ledger CLI.
//!
//! Lists the persisted top-10 outside of a game session, and supports
//! clearing the ledger:
//!
//! ```text
//! scores            # print the top list
//! scores --clear    # wipe the ledger
//! ```

use anyhow::Result;
use time::macros::format_description;

use tui_memory::store::{JsonHighScoreStore, TOP_LIST_CAPACITY};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut store = JsonHighScoreStore::at_default_path();

    if std::env::args().any(|arg| arg == "--clear") {
        store.clear();
        println!("high scores cleared");
        return Ok(());
    }

    let entries = store.get_top(TOP_LIST_CAPACITY);
    if entries.is_empty() {
        println!("no high scores yet - finish a game first");
        return Ok(());
    }

    let date_format = format_description!("[year]-[month]-[day] [hour]:[minute]");

    println!(
        "{:>2}  {:<12} {:>6} {:>6} {:>8} {:>6}  {}",
        "#", "player", "score", "cards", "attempts", "time", "achieved"
    );
    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{:>2}  {:<12} {:>6} {:>6} {:>8} {:>5}s  {}",
            i + 1,
            entry.player_name,
            entry.score,
            entry.card_count,
            entry.attempts,
            entry.duration_seconds,
            entry.date_achieved.format(&date_format)?,
        );
    }
    Ok(())
}
