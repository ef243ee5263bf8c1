//! Hand evaluation and throw validation.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, CardId};

/// The kind of a valid throw group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowKind {
    /// A single card of any rank and suit.
    Single,
    /// Two or more cards of the same rank.
    Set,
    /// Three or more same-suit cards with consecutive values.
    Sequence,
}

/// Returns the penalty value of a group of cards.
///
/// Aces count 1, number cards their face value, and J, Q, K count 10 each.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u32 {
    cards.iter().map(|card| u32::from(card.points())).sum()
}

/// Returns whether the cards form a set (two or more cards of one rank).
#[must_use]
pub fn is_valid_set(cards: &[Card]) -> bool {
    match cards {
        [first, rest @ ..] if !rest.is_empty() => rest.iter().all(|card| card.rank == first.rank),
        _ => false,
    }
}

/// Returns whether the cards form a sequence.
///
/// A sequence has at least three cards of one suit whose values are
/// consecutive once sorted. Input order is irrelevant and there is no
/// wraparound from king to ace.
#[must_use]
pub fn is_valid_sequence(cards: &[Card]) -> bool {
    let Some(first) = cards.first() else {
        return false;
    };
    if cards.len() < 3 || cards.iter().any(|card| card.suit != first.suit) {
        return false;
    }

    let mut values: Vec<u8> = cards.iter().map(Card::value).collect();
    values.sort_unstable();
    values.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

/// Classifies a selection of cards as a throw group.
///
/// Returns `None` when the selection is empty or is neither a single card,
/// a set, nor a sequence.
#[must_use]
pub fn classify_throw(cards: &[Card]) -> Option<ThrowKind> {
    if cards.len() == 1 {
        Some(ThrowKind::Single)
    } else if is_valid_set(cards) {
        Some(ThrowKind::Set)
    } else if is_valid_sequence(cards) {
        Some(ThrowKind::Sequence)
    } else {
        None
    }
}

/// The hand with the lowest score among several hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowestHand {
    /// Index of the hand in the input.
    pub index: usize,
    /// The hand value.
    pub score: u32,
    /// Number of cards in the hand.
    pub card_count: usize,
}

/// Finds the hand with the lowest value.
///
/// Ties on value go to the hand with fewer cards; a remaining tie keeps the
/// earliest hand. Returns `None` for an empty input.
///
/// # Example
///
/// ```
/// use dhumbaal::{Card, Rank, Suit, lowest_hand_score};
///
/// let a = [Card::new(Suit::Spade, Rank::Four)];
/// let b = [Card::new(Suit::Heart, Rank::Two), Card::new(Suit::Club, Rank::Two)];
/// let lowest = lowest_hand_score([&a[..], &b[..]]).unwrap();
/// assert_eq!(lowest.index, 0);
/// ```
pub fn lowest_hand_score<I, H>(hands: I) -> Option<LowestHand>
where
    I: IntoIterator<Item = H>,
    H: AsRef<[Card]>,
{
    hands
        .into_iter()
        .enumerate()
        .map(|(index, hand)| {
            let cards = hand.as_ref();
            LowestHand {
                index,
                score: hand_value(cards),
                card_count: cards.len(),
            }
        })
        .reduce(|lowest, candidate| {
            let lower_score = candidate.score < lowest.score;
            let fewer_cards =
                candidate.score == lowest.score && candidate.card_count < lowest.card_count;
            if lower_score || fewer_cards {
                candidate
            } else {
                lowest
            }
        })
}

/// A player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the penalty value of the hand.
    #[must_use]
    pub fn value(&self) -> u32 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand holds the given card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        let id = card.id();
        self.cards.iter().any(|held| held.id() == id)
    }

    /// Returns a copy of the hand without `cards`, matched by id.
    ///
    /// Returns `None` if any of the cards is not held or is listed twice.
    #[must_use]
    pub fn without(&self, cards: &[Card]) -> Option<Self> {
        let remove: HashSet<CardId> = cards.iter().map(Card::id).collect();
        if remove.len() != cards.len() {
            return None;
        }

        let kept: Vec<Card> = self
            .cards
            .iter()
            .filter(|card| !remove.contains(&card.id()))
            .copied()
            .collect();

        (kept.len() + remove.len() == self.cards.len()).then_some(Self { cards: kept })
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
