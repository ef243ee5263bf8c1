//! Deck construction and shuffling.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit};

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Creates an ordered 52-card deck.
///
/// Suits are enumerated in the outer loop and ranks in the inner loop, both
/// in canonical order, so the first card is the ace of spades and the last
/// is the king of clubs.
#[must_use]
pub fn create_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Returns a uniformly shuffled copy of `cards`.
///
/// The input is left untouched. The shuffle is a Fisher-Yates pass driven
/// by `rng`, so a seeded generator yields a reproducible order.
///
/// # Example
///
/// ```
/// use dhumbaal::{create_deck, shuffle_deck};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let deck = create_deck();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let shuffled = shuffle_deck(&deck, &mut rng);
/// assert_eq!(shuffled.len(), deck.len());
/// ```
#[must_use]
pub fn shuffle_deck<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
