//! Board - the ordered card collection.
//!
//! A board owns `2 × pair_count` cards. Each symbol appears on exactly two
//! cards. Card ids are positional (`0..2N`), assigned after the shuffle, so a
//! card's id is also its index into the card slice.

use tui_memory_types::{CardId, Symbol};

use crate::card::Card;
use crate::error::GameError;
use crate::rng::{entropy_seed, SimpleRng};

/// The game board: an ordered, mutable collection of cards.
#[derive(Debug, Clone, Default)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Create an empty board. Populate it with [`Board::initialize`].
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Populate the board with `pair_count` shuffled pairs.
    ///
    /// Clears any prior cards, generates one symbol per pair, duplicates each
    /// symbol, Fisher-Yates shuffles the sequence, and assigns positional ids
    /// `0..2N`. The same `(pair_count, seed)` always reproduces the same
    /// order; `None` draws a seed from the system clock.
    pub fn initialize(&mut self, pair_count: u32, seed: Option<u32>) -> Result<(), GameError> {
        if pair_count < 1 {
            return Err(GameError::InvalidPairCount(pair_count));
        }

        self.cards.clear();

        let mut symbols: Vec<Symbol> = (0..pair_count)
            .flat_map(|v| [Symbol(v), Symbol(v)])
            .collect();

        let mut rng = SimpleRng::new(seed.unwrap_or_else(entropy_seed));
        rng.shuffle(&mut symbols);

        self.cards = symbols
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| Card::new(i as CardId, symbol))
            .collect();

        Ok(())
    }

    /// Number of cards on the board.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Read-only view of all cards in board order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id. Unknown ids return `None`.
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id as usize)
    }

    /// Mutable card lookup, for the game state machine.
    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id as usize)
    }

    /// True iff the board is non-empty and every card is matched.
    pub fn all_matched(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.is_matched())
    }
}
