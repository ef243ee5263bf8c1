//! Round controller and state management.
//!
//! A [`Round`] is a plain value. Every action borrows the current round and
//! returns the next one, so a rejected action leaves the caller's round
//! exactly as it was.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use log::debug;
use rand::Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, CardId};
use crate::deck::{DECK_SIZE, create_deck, shuffle_deck};
use crate::error::TurnError;
use crate::hand::Hand;

mod jhyap;
pub mod state;
mod turn;

pub use state::{DrawChoice, DrawSource, Event, RoundState, Seat};

/// Number of cards dealt to each seat.
pub const HAND_SIZE: usize = 7;

/// Highest hand value that may call Jhyap.
pub const JHYAP_LIMIT: u32 = 7;

/// Points added to a failed Jhyap caller on top of their hand value.
pub const JHYAP_PENALTY: u32 = 20;

/// Match score at which the match ends.
pub const TARGET_SCORE: u32 = 40;

/// A single two-seat round.
///
/// The round owns the deck, both hands, both last-thrown piles and the
/// discard pile. The top of the deck is the end of [`Round::deck`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Cards left to draw.
    deck: Vec<Card>,
    /// Hands indexed by seat.
    hands: [Hand; 2],
    /// Each seat's last throw, pickable by the other seat.
    last_thrown: [Vec<Card>; 2],
    /// Cards out of play until the deck runs out.
    discard: Vec<Card>,
    /// Seat to move.
    turn: Seat,
    /// Current round state.
    state: RoundState,
    /// Activity log.
    events: Vec<Event>,
}

impl Round {
    /// Shuffles a fresh deck and deals a new round.
    ///
    /// Each seat receives [`HAND_SIZE`] cards and the human moves first.
    ///
    /// # Example
    ///
    /// ```
    /// use dhumbaal::{Round, Seat};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let round = Round::deal(&mut rng);
    /// assert_eq!(round.deck().len(), 38);
    /// assert_eq!(round.turn(), Seat::Human);
    /// ```
    #[must_use]
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = shuffle_deck(&create_deck(), rng);
        let human = deck.split_off(deck.len() - HAND_SIZE);
        let bot = deck.split_off(deck.len() - HAND_SIZE);

        debug!("dealt a new round, {} cards left in the deck", deck.len());
        Self::from_parts(deck, human, bot)
    }

    /// Builds a round from the given piles with the human to move.
    ///
    /// The last card of `deck` is drawn first.
    #[must_use]
    pub fn from_parts(deck: Vec<Card>, human: Vec<Card>, bot: Vec<Card>) -> Self {
        Self {
            deck,
            hands: [Hand::from(human), Hand::from(bot)],
            last_thrown: [Vec::new(), Vec::new()],
            discard: Vec::new(),
            turn: Seat::Human,
            state: RoundState::InProgress,
            events: Vec::new(),
        }
    }

    /// Returns the hand of `seat`.
    #[must_use]
    pub const fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    /// Returns the penalty value of the hand of `seat`.
    #[must_use]
    pub fn hand_value(&self, seat: Seat) -> u32 {
        self.hand(seat).value()
    }

    /// Returns the last throw of `seat`.
    #[must_use]
    pub fn last_thrown(&self, seat: Seat) -> &[Card] {
        &self.last_thrown[seat.index()]
    }

    /// Returns the cards left in the deck.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the discard pile.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the seat to move.
    #[must_use]
    pub const fn turn(&self) -> Seat {
        self.turn
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns whether the round has finished.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, RoundState::Finished(_))
    }

    /// Returns the activity log, oldest first.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns whether every card of the deck is held exactly once across
    /// the deck, both hands, both last throws and the discard pile.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        let ids: Vec<CardId> = self
            .deck
            .iter()
            .chain(self.hands.iter().flat_map(Hand::cards))
            .chain(self.last_thrown.iter().flatten())
            .chain(&self.discard)
            .map(Card::id)
            .collect();
        let unique: HashSet<CardId> = ids.iter().copied().collect();

        ids.len() == DECK_SIZE && unique.len() == DECK_SIZE
    }

    /// Draws the top card, reshuffling the discard pile if the deck is empty.
    fn draw_from_deck<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, TurnError> {
        if self.deck.is_empty() {
            if self.discard.is_empty() {
                return Err(TurnError::EmptyDrawSources);
            }

            let discard = core::mem::take(&mut self.discard);
            self.deck = shuffle_deck(&discard, rng);
            debug!("reshuffled {} discarded cards into the deck", self.deck.len());
            self.events.push(Event::Reshuffled {
                cards: self.deck.len(),
            });
        }

        self.deck.pop().ok_or(TurnError::EmptyDrawSources)
    }
}
