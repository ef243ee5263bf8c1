//! Turn actions: throwing, drawing and the bot's turn.

use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use crate::bot::Strategy;
use crate::card::Card;
use crate::error::TurnError;
use crate::hand::classify_throw;

use super::{DrawChoice, DrawSource, Event, JHYAP_LIMIT, Round, Seat};

impl Round {
    fn ensure_turn(&self, seat: Seat) -> Result<(), TurnError> {
        if self.is_over() {
            return Err(TurnError::RoundOver);
        }

        if self.turn != seat {
            return Err(TurnError::NotYourTurn);
        }

        Ok(())
    }

    /// Plays a full turn for `seat`: throws `throw`, then draws.
    ///
    /// Drawing from the deck sends the opponent's whole last throw to the
    /// discard pile; picking a card from it discards the rest. When the deck
    /// is empty the discard pile is reshuffled into a new deck first. The
    /// turn then passes to the other seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is over, it is not the seat's turn, a
    /// thrown card is not in the hand, the throw is not a single card, set
    /// or sequence, the picked card was not offered, or there is nothing
    /// left to draw. The round is unchanged on error.
    pub fn play_turn<R: Rng + ?Sized>(
        &self,
        seat: Seat,
        throw: &[Card],
        draw: DrawChoice,
        rng: &mut R,
    ) -> Result<Self, TurnError> {
        self.ensure_turn(seat)?;

        let mut hand = self.hands[seat.index()]
            .without(throw)
            .ok_or(TurnError::CardNotInHand)?;
        let kind = classify_throw(throw).ok_or(TurnError::InvalidThrowSelection)?;

        let mut next = self.clone();
        next.events.push(Event::Threw {
            seat,
            cards: throw.to_vec(),
            kind,
        });

        let opponent = seat.other();
        let offered = core::mem::take(&mut next.last_thrown[opponent.index()]);
        let (card, source) = match draw {
            DrawChoice::FromDeck => {
                let card = next.draw_from_deck(rng)?;
                next.discard.extend(offered);
                (card, DrawSource::Deck)
            }
            DrawChoice::FromPile(card) => {
                if !offered.contains(&card) {
                    return Err(TurnError::CardNotOffered);
                }
                next.discard
                    .extend(offered.into_iter().filter(|left| *left != card));
                (card, DrawSource::Pile(card))
            }
        };

        let stale = core::mem::replace(&mut next.last_thrown[seat.index()], throw.to_vec());
        next.discard.extend(stale);

        hand.add_card(card);
        next.hands[seat.index()] = hand;
        next.events.push(Event::Drew { seat, source });
        next.turn = opponent;

        debug!(
            "{seat:?} threw {} card(s) as {kind:?} and drew from {source:?}",
            throw.len()
        );

        Ok(next)
    }

    /// Plays the bot's turn using `strategy`.
    ///
    /// The strategy is first offered a Jhyap call when the bot's hand is
    /// within [`JHYAP_LIMIT`]. Otherwise the bot throws and then draws from
    /// the human's last throw or the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is over, it is not the bot's turn, the
    /// strategy picks an invalid throw or draw, or there is nothing left to
    /// draw.
    pub fn bot_turn<S: Strategy, R: Rng + ?Sized>(
        &self,
        strategy: &mut S,
        rng: &mut R,
    ) -> Result<Self, TurnError> {
        self.ensure_turn(Seat::Bot)?;

        let value = self.hand_value(Seat::Bot);
        if value <= JHYAP_LIMIT && strategy.should_call_jhyap(value, rng) {
            return Ok(self.settle_jhyap(Seat::Bot));
        }

        let hand = self.hand(Seat::Bot);
        let throw: Vec<Card> = strategy.choose_throw(hand.cards());
        let remaining = hand.without(&throw).ok_or(TurnError::CardNotInHand)?;
        let draw = strategy.choose_draw(remaining.cards(), self.last_thrown(Seat::Human));

        self.play_turn(Seat::Bot, &throw, draw, rng)
    }
}
