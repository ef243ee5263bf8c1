//! Round settlement and match scoring.

use crate::game::{Seat, TARGET_SCORE};

/// Outcome of a Jhyap call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JhyapOutcome {
    /// The caller's hand was strictly lower than the opponent's.
    Won,
    /// The opponent's hand was lower or equal.
    Failed,
}

/// Result of a round ended by a Jhyap call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JhyapResult {
    /// The seat that called Jhyap.
    pub caller: Seat,
    /// Whether the call succeeded.
    pub outcome: JhyapOutcome,
    /// The caller's hand value.
    pub caller_value: u32,
    /// The opponent's hand value.
    pub opponent_value: u32,
    /// Points charged to each seat, indexed by [`Seat::index`].
    pub points: [u32; 2],
}

impl JhyapResult {
    /// Returns the points charged to `seat` this round.
    #[must_use]
    pub const fn points_for(&self, seat: Seat) -> u32 {
        self.points[seat.index()]
    }
}

/// Cumulative match scores.
///
/// Lower is better: the match ends once either seat reaches
/// [`TARGET_SCORE`], and the seat with the lower score wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchScore {
    scores: [u32; 2],
}

impl MatchScore {
    /// Creates a fresh score with both seats at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { scores: [0; 2] }
    }

    /// Returns the score of `seat`.
    #[must_use]
    pub const fn score(&self, seat: Seat) -> u32 {
        self.scores[seat.index()]
    }

    /// Returns the score after charging a round's points.
    #[must_use]
    pub const fn apply(&self, result: &JhyapResult) -> Self {
        Self {
            scores: [
                self.scores[0] + result.points[0],
                self.scores[1] + result.points[1],
            ],
        }
    }

    /// Returns whether either seat has reached the target score.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.scores[0] >= TARGET_SCORE || self.scores[1] >= TARGET_SCORE
    }

    /// Returns the match winner, or `None` while the match is running.
    ///
    /// The human wins only with a strictly lower score.
    #[must_use]
    pub const fn winner(&self) -> Option<Seat> {
        if !self.is_over() {
            return None;
        }
        if self.score(Seat::Human) < self.score(Seat::Bot) {
            Some(Seat::Human)
        } else {
            Some(Seat::Bot)
        }
    }
}
