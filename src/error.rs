//! Error types for round actions.

use thiserror::Error;

/// Errors that can occur while playing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The round has already finished.
    #[error("the round is over")]
    RoundOver,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// A thrown card is not in the hand.
    #[error("thrown card is not in the hand")]
    CardNotInHand,
    /// The selection is neither a single card, a set, nor a sequence.
    #[error("selection is not a single card, set or sequence")]
    InvalidThrowSelection,
    /// The requested card is not in the opponent's last throw.
    #[error("card is not in the opponent's last throw")]
    CardNotOffered,
    /// Both the deck and the discard pile are empty.
    #[error("no cards left in the deck or discard pile")]
    EmptyDrawSources,
}

/// Errors that can occur when calling Jhyap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JhyapError {
    /// The round has already finished.
    #[error("the round is over")]
    RoundOver,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// The hand value is above the Jhyap limit.
    #[error("hand value {value} is above the jhyap limit")]
    PrematureJhyap {
        /// The caller's hand value.
        value: u32,
    },
}
