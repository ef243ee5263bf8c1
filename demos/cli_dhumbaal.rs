//! CLI Dhumbaal example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use dhumbaal::{
    Card, DefaultBot, DrawChoice, Event, JHYAP_LIMIT, JhyapOutcome, MatchScore, Round,
    RoundState, Seat, Suit, TARGET_SCORE,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    println!("Dhumbaal CLI example (type 'q' to quit)");
    println!("Call Jhyap at {JHYAP_LIMIT} or less. First to {TARGET_SCORE} points loses.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut bot = DefaultBot::default();
    let mut score = MatchScore::new();

    while !score.is_over() {
        let mut round = Round::deal(&mut rng);

        while !round.is_over() {
            if round.turn() == Seat::Bot {
                let seen = round.events().len();
                match round.bot_turn(&mut bot, &mut rng) {
                    Ok(next) => round = next,
                    Err(err) => {
                        println!("Bot error: {err}");
                        return;
                    }
                }
                print_events(&round.events()[seen..]);
                continue;
            }

            print_table(&round);
            let action = prompt_line("Action: [t]hrow [j]hyap [q]uit: ");
            match action.as_str() {
                "t" | "throw" => {
                    let Some(throw) = prompt_throw(&round) else {
                        continue;
                    };
                    let Some(draw) = prompt_draw(&round) else {
                        continue;
                    };
                    match round.play_turn(Seat::Human, &throw, draw, &mut rng) {
                        Ok(next) => round = next,
                        Err(err) => println!("Turn error: {err}"),
                    }
                }
                "j" | "jhyap" => match round.call_jhyap(Seat::Human) {
                    Ok(next) => round = next,
                    Err(err) => println!("Jhyap error: {err}"),
                },
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        if let RoundState::Finished(result) = round.state() {
            print_hands(&round);
            let verdict = match result.outcome {
                JhyapOutcome::Won => "and won",
                JhyapOutcome::Failed => "and failed",
            };
            println!(
                "{:?} called Jhyap with {} against {} {verdict}.",
                result.caller, result.caller_value, result.opponent_value
            );
            score = score.apply(&result);
            println!(
                "Score: you {} | bot {}",
                score.score(Seat::Human),
                score.score(Seat::Bot)
            );
        }
    }

    match score.winner() {
        Some(Seat::Human) => println!("You win the match."),
        Some(Seat::Bot) => println!("The bot wins the match."),
        None => {}
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_indices(prompt: &str, len: usize) -> Option<Vec<usize>> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() || input == "q" {
            return None;
        }
        let parsed: Result<Vec<usize>, _> = input.split_whitespace().map(str::parse).collect();
        match parsed {
            Ok(indices) if indices.iter().all(|&i| i < len) => return Some(indices),
            _ => println!("Please enter card numbers between 0 and {}.", len - 1),
        }
    }
}

fn prompt_throw(round: &Round) -> Option<Vec<Card>> {
    let cards = round.hand(Seat::Human).cards();
    let indices = prompt_indices("Cards to throw (e.g. '0 2 3', empty to cancel): ", cards.len())?;
    Some(indices.into_iter().map(|i| cards[i]).collect())
}

fn prompt_draw(round: &Round) -> Option<DrawChoice> {
    let offered = round.last_thrown(Seat::Bot);
    if offered.is_empty() {
        return Some(DrawChoice::FromDeck);
    }

    println!("Bot's last throw: {}", format_indexed(offered));
    loop {
        let input = prompt_line("Draw from [d]eck or pick a card number: ");
        match input.as_str() {
            "" | "q" => return None,
            "d" | "deck" => return Some(DrawChoice::FromDeck),
            _ => match input.parse::<usize>() {
                Ok(index) if index < offered.len() => {
                    return Some(DrawChoice::FromPile(offered[index]));
                }
                _ => println!("Please enter 'd' or a card number."),
            },
        }
    }
}

fn print_table(round: &Round) {
    println!("\nDeck: {} cards | discard: {}", round.deck().len(), round.discard().len());

    let offered = round.last_thrown(Seat::Bot);
    if !offered.is_empty() {
        println!("Bot threw: {}", format_cards(offered));
    }
    println!("Bot holds {} card(s)", round.hand(Seat::Bot).len());

    let hand = round.hand(Seat::Human);
    println!(
        "Your hand: {} | value {}",
        format_indexed(hand.cards()),
        hand.value()
    );
    println!();
}

fn print_hands(round: &Round) {
    for seat in [Seat::Human, Seat::Bot] {
        let hand = round.hand(seat);
        println!(
            "{seat:?}: {} | value {}",
            format_cards(hand.cards()),
            hand.value()
        );
    }
}

fn print_events(events: &[Event]) {
    for event in events {
        match event {
            Event::Threw { seat, cards, kind } => {
                println!("{seat:?} throws {kind:?}: {}", format_cards(cards));
            }
            Event::Drew { seat, source } => println!("{seat:?} draws from {source:?}"),
            Event::Reshuffled { cards } => println!("Discard pile reshuffled into {cards} cards."),
            Event::Jhyap { seat } => println!("{seat:?} calls Jhyap!"),
        }
    }
}

fn format_indexed(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{index}:{}", format_card(card)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Heart | Suit::Diamond => "31",
        Suit::Club => "32",
        Suit::Spade => "34",
    };
    colorize(&card.to_string(), color_code)
}
