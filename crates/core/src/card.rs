//! Card - the smallest unit of game state.

use tui_memory_types::{CardId, Symbol};

/// A single card: stable identity, a symbol shared with exactly one other
/// card on the board, and face-up/matched flags.
///
/// Once matched, a card is permanently face-up; neither flag changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    symbol: Symbol,
    face_up: bool,
    matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Toggle the face-up state.
    ///
    /// Matched cards stay face-up; flipping one is a no-op.
    pub fn flip(&mut self) {
        if !self.matched {
            self.face_up = !self.face_up;
        }
    }

    /// Mark the card as matched and face-up. Idempotent.
    pub fn mark_matched(&mut self) {
        if !self.matched {
            self.matched = true;
            self.face_up = true;
        }
    }
}
