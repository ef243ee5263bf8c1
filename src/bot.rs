//! Opponent throw and draw policy.
//!
//! The free functions here are the whole decision procedure and are pure.
//! [`DefaultBot`] wraps them behind the [`Strategy`] trait the round
//! controller drives, adding the randomized Jhyap decision.

use alloc::vec::Vec;

use log::{debug, trace};
use rand::Rng;

use crate::card::{Card, Rank, Suit};
use crate::game::{DrawChoice, JHYAP_LIMIT};
use crate::options::OpponentOptions;

/// Minimum length of a sequence worth throwing.
const MIN_SEQUENCE: usize = 3;

/// Minimum size of a set worth throwing.
const MIN_SET: usize = 2;

/// Offered cards with this value or lower are always worth picking up.
const LOW_CARD_VALUE: u8 = 3;

/// A decision policy for one seat.
pub trait Strategy {
    /// Chooses the cards to throw from `hand`.
    ///
    /// The returned group must be a valid throw for a non-empty hand.
    fn choose_throw(&mut self, hand: &[Card]) -> Vec<Card>;

    /// Chooses where to draw from after throwing.
    ///
    /// `hand` is the hand left after the throw and `offered` is the
    /// opponent's last throw.
    fn choose_draw(&mut self, hand: &[Card], offered: &[Card]) -> DrawChoice;

    /// Decides whether to end the round with a Jhyap call.
    ///
    /// Only asked when `hand_value` is within the Jhyap limit.
    fn should_call_jhyap<R: Rng + ?Sized>(&mut self, hand_value: u32, rng: &mut R) -> bool;
}

/// The built-in opponent.
#[derive(Debug, Clone, Default)]
pub struct DefaultBot {
    options: OpponentOptions,
}

impl DefaultBot {
    /// Creates a bot with the given options.
    #[must_use]
    pub const fn new(options: OpponentOptions) -> Self {
        Self { options }
    }

    /// Returns the bot options.
    #[must_use]
    pub const fn options(&self) -> &OpponentOptions {
        &self.options
    }
}

impl Strategy for DefaultBot {
    fn choose_throw(&mut self, hand: &[Card]) -> Vec<Card> {
        let throw = bot_throw(hand);
        debug!("bot throws {} of {} cards", throw.len(), hand.len());
        throw
    }

    fn choose_draw(&mut self, hand: &[Card], offered: &[Card]) -> DrawChoice {
        let choice = bot_draw(hand, offered);
        debug!("bot draws {choice:?}");
        choice
    }

    fn should_call_jhyap<R: Rng + ?Sized>(&mut self, hand_value: u32, rng: &mut R) -> bool {
        if hand_value > JHYAP_LIMIT {
            return false;
        }
        let roll: f64 = rng.random();
        trace!(
            "bot jhyap roll {roll:.3} against chance {:.3}",
            self.options.jhyap_chance
        );
        roll < self.options.jhyap_chance
    }
}

/// Chooses the cards the opponent throws.
///
/// The longest same-suit run of three or more wins, then the largest group
/// of two or more cards sharing a rank, then the single highest card (the
/// earliest one in hand order on ties). An empty hand yields an empty group.
///
/// # Example
///
/// ```
/// use dhumbaal::{Card, Rank, Suit, bot_throw};
///
/// let hand = [
///     Card::new(Suit::Heart, Rank::Two),
///     Card::new(Suit::Diamond, Rank::Two),
///     Card::new(Suit::Club, Rank::Nine),
/// ];
/// assert_eq!(bot_throw(&hand), hand[..2].to_vec());
/// ```
#[must_use]
pub fn bot_throw(hand: &[Card]) -> Vec<Card> {
    let sequence = best_sequence(hand);
    if sequence.len() >= MIN_SEQUENCE {
        return sequence;
    }

    let set = best_set(hand);
    if set.len() >= MIN_SET {
        return set;
    }

    highest_card(hand).into_iter().collect()
}

/// Chooses where the opponent draws from.
///
/// Picks the first offered card that lengthens the best run or grows the
/// best set, otherwise the lowest offered card if its value is 3 or less,
/// otherwise the deck.
#[must_use]
pub fn bot_draw(hand: &[Card], offered: &[Card]) -> DrawChoice {
    let Some(lowest) = lowest_card(offered) else {
        return DrawChoice::FromDeck;
    };

    let run = best_sequence(hand).len();
    let set = best_set(hand).len();
    if let Some(card) = offered
        .iter()
        .find(|card| improves_hand(hand, **card, run, set))
    {
        return DrawChoice::FromPile(*card);
    }

    if lowest.value() <= LOW_CARD_VALUE {
        DrawChoice::FromPile(lowest)
    } else {
        DrawChoice::FromDeck
    }
}

/// Returns the longest same-suit run of three or more consecutive cards.
///
/// Suits are visited in order of first appearance and an earlier run is
/// kept over a later one of the same length. Returns an empty vector when
/// no such run exists.
#[must_use]
pub fn best_sequence(hand: &[Card]) -> Vec<Card> {
    suits_in_order(hand)
        .into_iter()
        .fold(Vec::new(), |best, suit| {
            let mut cards: Vec<Card> = hand.iter().filter(|c| c.suit == suit).copied().collect();
            cards.sort_by_key(Card::value);

            let (best, streak) =
                cards
                    .into_iter()
                    .fold((best, Vec::new()), |(best, mut streak), card| {
                        let extends = streak
                            .last()
                            .is_none_or(|last: &Card| card.value() == last.value() + 1);
                        if extends {
                            streak.push(card);
                            (best, streak)
                        } else {
                            (longer_run(best, streak), alloc::vec![card])
                        }
                    });
            longer_run(best, streak)
        })
}

/// Returns the largest group of two or more cards sharing a rank.
///
/// On equal size the earlier group wins. Groups of number ranks (2 to 10)
/// come first in ascending rank, followed by aces and face cards in order
/// of first appearance. Returns an empty vector when the hand holds no pair.
#[must_use]
pub fn best_set(hand: &[Card]) -> Vec<Card> {
    rank_groups(hand).into_iter().fold(Vec::new(), |best, group| {
        if group.len() >= MIN_SET && group.len() > best.len() {
            group
        } else {
            best
        }
    })
}

fn longer_run(best: Vec<Card>, streak: Vec<Card>) -> Vec<Card> {
    if streak.len() >= MIN_SEQUENCE && streak.len() > best.len() {
        streak
    } else {
        best
    }
}

fn suits_in_order(hand: &[Card]) -> Vec<Suit> {
    hand.iter().fold(Vec::with_capacity(4), |mut suits, card| {
        if !suits.contains(&card.suit) {
            suits.push(card.suit);
        }
        suits
    })
}

fn rank_groups(hand: &[Card]) -> Vec<Vec<Card>> {
    let mut groups = hand.iter().fold(Vec::new(), |mut groups: Vec<Vec<Card>>, card| {
        match groups.iter_mut().find(|group| group[0].rank == card.rank) {
            Some(group) => group.push(*card),
            None => groups.push(alloc::vec![*card]),
        }
        groups
    });

    // Stable, so aces and faces keep their first-appearance order.
    groups.sort_by_key(|group| group_order(group[0].rank));
    groups
}

const fn group_order(rank: Rank) -> (u8, u8) {
    match rank {
        Rank::Ace | Rank::Jack | Rank::Queen | Rank::King => (1, 0),
        _ => (0, rank.value()),
    }
}

fn highest_card(hand: &[Card]) -> Option<Card> {
    hand.iter()
        .copied()
        .reduce(|best, card| if card.value() > best.value() { card } else { best })
}

fn lowest_card(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .copied()
        .reduce(|low, card| if card.value() < low.value() { card } else { low })
}

fn improves_hand(hand: &[Card], card: Card, run: usize, set: usize) -> bool {
    let mut tentative = Vec::with_capacity(hand.len() + 1);
    tentative.extend_from_slice(hand);
    tentative.push(card);

    best_sequence(&tentative).len() > run || best_set(&tentative).len() > set
}
