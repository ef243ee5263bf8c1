//! A Dhumbaal rules engine with optional `no_std` support.
//!
//! The crate provides deck construction, hand evaluation, throw validation
//! and the computer opponent's throw/draw policy. A [`Round`] value
//! sequences them for one two-seat round, and [`MatchScore`] tracks the
//! match.
//!
//! # Example
//!
//! ```
//! use dhumbaal::{DefaultBot, DrawChoice, Round, Seat, bot_throw};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let round = Round::deal(&mut rng);
//!
//! let throw = bot_throw(round.hand(Seat::Human).cards());
//! let round = round
//!     .play_turn(Seat::Human, &throw, DrawChoice::FromDeck, &mut rng)
//!     .unwrap();
//! let round = round.bot_turn(&mut DefaultBot::default(), &mut rng).unwrap();
//! assert!(round.is_conserved());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bot;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use bot::{DefaultBot, Strategy, best_sequence, best_set, bot_draw, bot_throw};
pub use card::{Card, CardId, Rank, Suit};
pub use deck::{DECK_SIZE, create_deck, shuffle_deck};
pub use error::{JhyapError, TurnError};
pub use game::{
    DrawChoice, DrawSource, Event, HAND_SIZE, JHYAP_LIMIT, JHYAP_PENALTY, Round, RoundState, Seat,
    TARGET_SCORE,
};
pub use hand::{
    Hand, LowestHand, ThrowKind, classify_throw, hand_value, is_valid_sequence, is_valid_set,
    lowest_hand_score,
};
pub use options::OpponentOptions;
pub use result::{JhyapOutcome, JhyapResult, MatchScore};
