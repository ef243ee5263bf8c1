//! Jhyap calls and round settlement.

use log::debug;

use crate::error::JhyapError;
use crate::result::{JhyapOutcome, JhyapResult};

use super::{Event, JHYAP_LIMIT, JHYAP_PENALTY, Round, RoundState, Seat};

impl Round {
    /// Ends the round with a Jhyap call by `seat`.
    ///
    /// If the caller's hand is strictly lower than the opponent's, the
    /// opponent is charged their own hand value. Otherwise the caller is
    /// charged their hand value plus [`JHYAP_PENALTY`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is over, it is not the seat's turn, or
    /// the caller's hand value is above [`JHYAP_LIMIT`].
    pub fn call_jhyap(&self, seat: Seat) -> Result<Self, JhyapError> {
        if self.is_over() {
            return Err(JhyapError::RoundOver);
        }

        if self.turn != seat {
            return Err(JhyapError::NotYourTurn);
        }

        let value = self.hand_value(seat);
        if value > JHYAP_LIMIT {
            return Err(JhyapError::PrematureJhyap { value });
        }

        Ok(self.settle_jhyap(seat))
    }

    /// Settles the round for a Jhyap call without checking eligibility.
    pub(super) fn settle_jhyap(&self, caller: Seat) -> Self {
        let opponent = caller.other();
        let caller_value = self.hand_value(caller);
        let opponent_value = self.hand_value(opponent);

        let mut points = [0; 2];
        let outcome = if caller_value < opponent_value {
            points[opponent.index()] = opponent_value;
            JhyapOutcome::Won
        } else {
            points[caller.index()] = caller_value + JHYAP_PENALTY;
            JhyapOutcome::Failed
        };

        debug!("{caller:?} called jhyap with {caller_value} against {opponent_value}: {outcome:?}");

        let mut next = self.clone();
        next.events.push(Event::Jhyap { seat: caller });
        next.state = RoundState::Finished(JhyapResult {
            caller,
            outcome,
            caller_value,
            opponent_value,
            points,
        });
        next
    }
}
