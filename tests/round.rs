//! Round controller integration tests.

use dhumbaal::{
    Card, DefaultBot, DrawChoice, DrawSource, Event, HAND_SIZE, JhyapError, JhyapOutcome,
    JhyapResult, MatchScore, OpponentOptions, Rank, Round, RoundState, Seat, Suit, ThrowKind,
    TurnError,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds a round whose deck yields `draws` in order.
fn round_from_draws(draws: &[Card], human: &[Card], bot: &[Card]) -> Round {
    let mut deck: Vec<Card> = draws.to_vec();
    deck.reverse();
    Round::from_parts(deck, human.to_vec(), bot.to_vec())
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

#[test]
fn deal_gives_seven_cards_each() {
    let round = Round::deal(&mut rng());

    assert_eq!(round.deck().len(), 38);
    assert_eq!(round.hand(Seat::Human).len(), HAND_SIZE);
    assert_eq!(round.hand(Seat::Bot).len(), HAND_SIZE);
    assert_eq!(round.turn(), Seat::Human);
    assert_eq!(round.state(), RoundState::InProgress);
    assert!(round.discard().is_empty());
    assert!(round.events().is_empty());
    assert!(round.is_conserved());
}

#[test]
fn throw_single_and_draw_from_deck() {
    let round = round_from_draws(
        &[card(Suit::Club, Rank::Four)],
        &[card(Suit::Heart, Rank::King), card(Suit::Spade, Rank::Two)],
        &[card(Suit::Diamond, Rank::Nine)],
    );

    let next = round
        .play_turn(
            Seat::Human,
            &[card(Suit::Heart, Rank::King)],
            DrawChoice::FromDeck,
            &mut rng(),
        )
        .unwrap();

    assert_eq!(
        next.hand(Seat::Human).cards(),
        &[card(Suit::Spade, Rank::Two), card(Suit::Club, Rank::Four)]
    );
    assert_eq!(next.last_thrown(Seat::Human), &[card(Suit::Heart, Rank::King)]);
    assert!(next.deck().is_empty());
    assert_eq!(next.turn(), Seat::Bot);
    assert_eq!(
        next.events(),
        &[
            Event::Threw {
                seat: Seat::Human,
                cards: vec![card(Suit::Heart, Rank::King)],
                kind: ThrowKind::Single,
            },
            Event::Drew {
                seat: Seat::Human,
                source: DrawSource::Deck,
            },
        ]
    );

    // The input round is untouched.
    assert_eq!(round.hand(Seat::Human).len(), 2);
    assert_eq!(round.deck().len(), 1);
}

#[test]
fn rejected_turns_leave_round_unchanged() {
    let round = round_from_draws(
        &[card(Suit::Club, Rank::Four)],
        &[
            card(Suit::Spade, Rank::Two),
            card(Suit::Heart, Rank::Nine),
            card(Suit::Heart, Rank::Ten),
        ],
        &[card(Suit::Diamond, Rank::Nine)],
    );
    let before = round.clone();
    let mut rng = rng();

    assert_eq!(
        round
            .play_turn(
                Seat::Human,
                &[card(Suit::Spade, Rank::Two), card(Suit::Heart, Rank::Nine)],
                DrawChoice::FromDeck,
                &mut rng,
            )
            .unwrap_err(),
        TurnError::InvalidThrowSelection
    );
    assert_eq!(
        round
            .play_turn(Seat::Human, &[], DrawChoice::FromDeck, &mut rng)
            .unwrap_err(),
        TurnError::InvalidThrowSelection
    );
    assert_eq!(
        round
            .play_turn(
                Seat::Human,
                &[card(Suit::Club, Rank::Ace)],
                DrawChoice::FromDeck,
                &mut rng,
            )
            .unwrap_err(),
        TurnError::CardNotInHand
    );
    assert_eq!(
        round
            .play_turn(
                Seat::Bot,
                &[card(Suit::Diamond, Rank::Nine)],
                DrawChoice::FromDeck,
                &mut rng,
            )
            .unwrap_err(),
        TurnError::NotYourTurn
    );
    assert_eq!(
        round
            .play_turn(
                Seat::Human,
                &[card(Suit::Spade, Rank::Two)],
                DrawChoice::FromPile(card(Suit::Diamond, Rank::Nine)),
                &mut rng,
            )
            .unwrap_err(),
        TurnError::CardNotOffered
    );

    assert_eq!(round, before);
}

#[test]
fn pick_up_from_opponent_throw_discards_the_rest() {
    let round = round_from_draws(
        &[card(Suit::Club, Rank::Ace), card(Suit::Club, Rank::Two)],
        &[
            card(Suit::Heart, Rank::Four),
            card(Suit::Club, Rank::Four),
            card(Suit::Spade, Rank::King),
        ],
        &[card(Suit::Diamond, Rank::Four), card(Suit::Diamond, Rank::Jack)],
    );
    let mut rng = rng();

    let round = round
        .play_turn(
            Seat::Human,
            &[card(Suit::Heart, Rank::Four), card(Suit::Club, Rank::Four)],
            DrawChoice::FromDeck,
            &mut rng,
        )
        .unwrap();
    assert_eq!(round.hand(Seat::Human).len(), 2);

    let round = round
        .play_turn(
            Seat::Bot,
            &[card(Suit::Diamond, Rank::Jack)],
            DrawChoice::FromPile(card(Suit::Club, Rank::Four)),
            &mut rng,
        )
        .unwrap();

    assert_eq!(
        round.hand(Seat::Bot).cards(),
        &[card(Suit::Diamond, Rank::Four), card(Suit::Club, Rank::Four)]
    );
    assert!(round.last_thrown(Seat::Human).is_empty());
    assert_eq!(round.discard(), &[card(Suit::Heart, Rank::Four)]);
    assert_eq!(round.last_thrown(Seat::Bot), &[card(Suit::Diamond, Rank::Jack)]);
    assert_eq!(round.deck(), &[card(Suit::Club, Rank::Two)]);
    assert_eq!(round.turn(), Seat::Human);
    assert_eq!(
        round.events().last(),
        Some(&Event::Drew {
            seat: Seat::Bot,
            source: DrawSource::Pile(card(Suit::Club, Rank::Four)),
        })
    );
}

#[test]
fn deck_draw_discards_opponent_throw_and_reshuffles_when_empty() {
    let round = round_from_draws(
        &[card(Suit::Club, Rank::Ace), card(Suit::Club, Rank::Two)],
        &[card(Suit::Heart, Rank::Five), card(Suit::Heart, Rank::Six)],
        &[card(Suit::Spade, Rank::Queen)],
    );
    let mut rng = rng();

    let round = round
        .play_turn(
            Seat::Human,
            &[card(Suit::Heart, Rank::Five)],
            DrawChoice::FromDeck,
            &mut rng,
        )
        .unwrap();
    let round = round
        .play_turn(
            Seat::Bot,
            &[card(Suit::Spade, Rank::Queen)],
            DrawChoice::FromDeck,
            &mut rng,
        )
        .unwrap();

    assert!(round.deck().is_empty());
    assert_eq!(round.discard(), &[card(Suit::Heart, Rank::Five)]);
    assert!(round.last_thrown(Seat::Human).is_empty());

    let round = round
        .play_turn(
            Seat::Human,
            &[card(Suit::Heart, Rank::Six)],
            DrawChoice::FromDeck,
            &mut rng,
        )
        .unwrap();

    assert!(round.hand(Seat::Human).contains(&card(Suit::Heart, Rank::Five)));
    assert!(round.deck().is_empty());
    assert_eq!(round.discard(), &[card(Suit::Spade, Rank::Queen)]);
    assert!(round.events().contains(&Event::Reshuffled { cards: 1 }));
}

#[test]
fn empty_draw_sources_rejects_deck_draw() {
    let round = Round::from_parts(
        Vec::new(),
        vec![card(Suit::Heart, Rank::Five)],
        vec![card(Suit::Spade, Rank::Queen)],
    );

    assert_eq!(
        round
            .play_turn(
                Seat::Human,
                &[card(Suit::Heart, Rank::Five)],
                DrawChoice::FromDeck,
                &mut rng(),
            )
            .unwrap_err(),
        TurnError::EmptyDrawSources
    );
}

#[test]
fn jhyap_win_charges_opponent() {
    let round = round_from_draws(
        &[],
        &[card(Suit::Spade, Rank::Ace), card(Suit::Heart, Rank::Two)],
        &[card(Suit::Club, Rank::King), card(Suit::Diamond, Rank::Nine)],
    );

    let done = round.call_jhyap(Seat::Human).unwrap();
    let RoundState::Finished(result) = done.state() else {
        panic!("round should be finished");
    };

    assert_eq!(result.caller, Seat::Human);
    assert_eq!(result.outcome, JhyapOutcome::Won);
    assert_eq!(result.caller_value, 3);
    assert_eq!(result.opponent_value, 19);
    assert_eq!(result.points_for(Seat::Human), 0);
    assert_eq!(result.points_for(Seat::Bot), 19);
    assert_eq!(done.events(), &[Event::Jhyap { seat: Seat::Human }]);

    assert_eq!(
        done.call_jhyap(Seat::Human).unwrap_err(),
        JhyapError::RoundOver
    );
    assert_eq!(
        done.play_turn(
            Seat::Human,
            &[card(Suit::Spade, Rank::Ace)],
            DrawChoice::FromDeck,
            &mut rng(),
        )
        .unwrap_err(),
        TurnError::RoundOver
    );
}

#[test]
fn jhyap_tie_fails_with_penalty() {
    let round = round_from_draws(
        &[],
        &[card(Suit::Spade, Rank::Three), card(Suit::Heart, Rank::Four)],
        &[card(Suit::Club, Rank::Seven)],
    );

    let done = round.call_jhyap(Seat::Human).unwrap();
    let RoundState::Finished(result) = done.state() else {
        panic!("round should be finished");
    };

    assert_eq!(result.outcome, JhyapOutcome::Failed);
    assert_eq!(result.points_for(Seat::Human), 27);
    assert_eq!(result.points_for(Seat::Bot), 0);
}

#[test]
fn jhyap_rejections() {
    let round = round_from_draws(
        &[],
        &[card(Suit::Spade, Rank::Three), card(Suit::Heart, Rank::Jack)],
        &[card(Suit::Club, Rank::Two)],
    );

    assert_eq!(
        round.call_jhyap(Seat::Human).unwrap_err(),
        JhyapError::PrematureJhyap { value: 13 }
    );
    assert_eq!(
        round.call_jhyap(Seat::Bot).unwrap_err(),
        JhyapError::NotYourTurn
    );
    assert!(!round.is_over());
}

#[test]
fn bot_turn_calls_jhyap_when_eager() {
    let round = round_from_draws(
        &[card(Suit::Club, Rank::Nine)],
        &[card(Suit::Heart, Rank::King)],
        &[card(Suit::Club, Rank::Two), card(Suit::Spade, Rank::Three)],
    );
    let mut rng = rng();
    let mut bot = DefaultBot::new(OpponentOptions::default().with_jhyap_chance(1.0));

    assert_eq!(
        round.bot_turn(&mut bot, &mut rng).unwrap_err(),
        TurnError::NotYourTurn
    );

    let round = round
        .play_turn(
            Seat::Human,
            &[card(Suit::Heart, Rank::King)],
            DrawChoice::FromDeck,
            &mut rng,
        )
        .unwrap();
    let done = round.bot_turn(&mut bot, &mut rng).unwrap();

    let RoundState::Finished(result) = done.state() else {
        panic!("bot should have called jhyap");
    };
    assert_eq!(result.caller, Seat::Bot);
    assert_eq!(result.outcome, JhyapOutcome::Won);
    assert_eq!(result.points_for(Seat::Human), 9);
}

#[test]
fn bot_turn_throws_run_and_picks_useful_card() {
    let round = round_from_draws(
        &[card(Suit::Club, Rank::Ace), card(Suit::Club, Rank::Two)],
        &[card(Suit::Heart, Rank::King), card(Suit::Diamond, Rank::Ten)],
        &[
            card(Suit::Spade, Rank::Five),
            card(Suit::Spade, Rank::Six),
            card(Suit::Spade, Rank::Seven),
            card(Suit::Heart, Rank::Queen),
        ],
    );
    let mut rng = rng();
    let mut bot = DefaultBot::new(OpponentOptions::default().with_jhyap_chance(0.0));

    let round = round
        .play_turn(
            Seat::Human,
            &[card(Suit::Heart, Rank::King)],
            DrawChoice::FromDeck,
            &mut rng,
        )
        .unwrap();
    let round = round.bot_turn(&mut bot, &mut rng).unwrap();

    assert_eq!(
        round.last_thrown(Seat::Bot),
        &[
            card(Suit::Spade, Rank::Five),
            card(Suit::Spade, Rank::Six),
            card(Suit::Spade, Rank::Seven),
        ]
    );
    // The offered king helps neither a run nor a set, so the bot draws from the deck.
    assert_eq!(
        round.hand(Seat::Bot).cards(),
        &[card(Suit::Heart, Rank::Queen), card(Suit::Club, Rank::Two)]
    );
    assert_eq!(round.discard(), &[card(Suit::Heart, Rank::King)]);
    assert_eq!(round.turn(), Seat::Human);
}

#[test]
fn match_score_tracks_rounds_and_winner() {
    let round = round_from_draws(
        &[],
        &[card(Suit::Spade, Rank::Three), card(Suit::Heart, Rank::Four)],
        &[card(Suit::Club, Rank::Seven)],
    );
    let RoundState::Finished(failed) = round.call_jhyap(Seat::Human).unwrap().state() else {
        panic!("round should be finished");
    };

    let score = MatchScore::new().apply(&failed);
    assert_eq!(score.score(Seat::Human), 27);
    assert_eq!(score.score(Seat::Bot), 0);
    assert!(!score.is_over());
    assert_eq!(score.winner(), None);

    let score = score.apply(&failed);
    assert_eq!(score.score(Seat::Human), 54);
    assert!(score.is_over());
    assert_eq!(score.winner(), Some(Seat::Bot));
}

#[test]
fn match_tie_goes_to_bot() {
    let bot_charged = JhyapResult {
        caller: Seat::Human,
        outcome: JhyapOutcome::Won,
        caller_value: 2,
        opponent_value: 40,
        points: [0, 40],
    };
    let human_charged = JhyapResult {
        caller: Seat::Bot,
        outcome: JhyapOutcome::Won,
        caller_value: 3,
        opponent_value: 40,
        points: [40, 0],
    };

    let score = MatchScore::new().apply(&bot_charged);
    assert!(score.is_over());
    assert_eq!(score.winner(), Some(Seat::Human));

    let score = score.apply(&human_charged);
    assert_eq!(score.score(Seat::Human), score.score(Seat::Bot));
    assert_eq!(score.winner(), Some(Seat::Bot));
}
