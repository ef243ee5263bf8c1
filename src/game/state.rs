//! Round state types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::ThrowKind;
use crate::result::JhyapResult;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human player.
    Human,
    /// The computer opponent.
    Bot,
}

impl Seat {
    /// Returns the seat index used by per-seat arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Human => Self::Bot,
            Self::Bot => Self::Human,
        }
    }
}

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Seats are taking turns.
    InProgress,
    /// A Jhyap call ended the round.
    Finished(JhyapResult),
}

/// Where a seat wants to draw from after throwing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawChoice {
    /// Draw the top card of the deck.
    FromDeck,
    /// Pick up a card from the opponent's last throw.
    FromPile(Card),
}

/// Where a drawn card came from, as recorded in the round events.
///
/// Deck draws do not reveal the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawSource {
    /// The top of the deck.
    Deck,
    /// The opponent's last throw.
    Pile(Card),
}

/// An entry in the round's activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A seat threw a group of cards.
    Threw {
        /// The throwing seat.
        seat: Seat,
        /// The thrown cards.
        cards: Vec<Card>,
        /// The kind of throw.
        kind: ThrowKind,
    },
    /// A seat drew a card.
    Drew {
        /// The drawing seat.
        seat: Seat,
        /// Where the card came from.
        source: DrawSource,
    },
    /// The discard pile was shuffled into a new deck.
    Reshuffled {
        /// Number of cards in the new deck.
        cards: usize,
    },
    /// A seat called Jhyap.
    Jhyap {
        /// The calling seat.
        seat: Seat,
    },
}
