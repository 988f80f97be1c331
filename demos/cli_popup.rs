//! Terminal front end for the popup engine.
//!
//! Plays the same role as the browser popup: reads intents, drains engine
//! events and reveals them with a short pause between cards.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use popjack::{
    BetSlip, Card, Color, Event, Game, GameState, Seat, TableOptions, TableView, parse_bet,
};

const REVEAL_DELAY: Duration = Duration::from_millis(500);

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(io::stderr)
        .init();

    println!("Blackjack popup (type 'q' to quit, 'r' to reset)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default();
    let mut game = Game::new(options, seed);

    loop {
        print_table(&game.view());

        match game.state() {
            GameState::AwaitingBet => {
                if game.is_session_over() && !offer_reset(&mut game) {
                    break;
                }
                let Some(amount) = prompt_bet(&game) else {
                    println!("Goodbye.");
                    break;
                };
                if let Err(err) = game.place_bet(amount) {
                    println!("{err}");
                    continue;
                }
                if let Err(err) = game.deal() {
                    println!("Deal error: {err}");
                }
            }
            GameState::PlayerTurn => {
                let Some(action) = prompt_line("[h]it [s]tand: ") else {
                    return;
                };
                let result = match action.as_str() {
                    "h" | "hit" => game.hit().map(|_| ()),
                    "s" | "stand" => game.stand(),
                    "r" | "reset" => {
                        game.reset_session();
                        Ok(())
                    }
                    "q" | "quit" => return,
                    _ => {
                        println!("Unknown action.");
                        continue;
                    }
                };
                if let Err(err) = result {
                    println!("Action error: {err}");
                }
            }
            GameState::DealerTurn => {
                if let Err(err) = game.settle() {
                    println!("Settle error: {err}");
                }
            }
            GameState::Settled => {
                if game.start_next_round().is_err() && !offer_reset(&mut game) {
                    break;
                }
            }
            GameState::Dealing => {
                if let Err(err) = game.deal() {
                    println!("Deal error: {err}");
                }
            }
        }

        pace_events(game.drain_events());
    }
}

fn offer_reset(game: &mut Game) -> bool {
    println!("{}", game.status());
    match prompt_line("Reset balance and play again? (y/n): ").as_deref() {
        Some("y" | "yes") => {
            game.reset_session();
            true
        }
        _ => false,
    }
}

fn prompt_bet(game: &Game) -> Option<usize> {
    let balance = game.balance();
    let chips = &game.options().chips;
    let chip_list = chips
        .iter()
        .map(|chip| format!("+{chip}"))
        .collect::<Vec<_>>()
        .join(" ");

    let mut slip = BetSlip::new();
    loop {
        let input = prompt_line(&format!(
            "Bet [{}] (amount, {chip_list}, all, deal): ",
            slip.amount()
        ))?;
        match input.as_str() {
            "q" | "quit" => return None,
            "all" => slip.all_in(balance),
            "deal" | "d" => match slip.commit(balance) {
                Ok(amount) => return Some(amount),
                Err(err) => println!("{err}"),
            },
            chip if chip.starts_with('+') => match parse_bet(chip, usize::MAX) {
                Ok(value) => slip.add_chip(value, balance),
                Err(err) => println!("{err}"),
            },
            typed => match parse_bet(typed, balance) {
                Ok(amount) => return Some(amount),
                Err(err) => println!("{err}"),
            },
        }
    }
}

fn pace_events(events: Vec<Event>) {
    for event in events {
        match event {
            Event::CardDealt {
                seat,
                card,
                face_down,
            } => {
                let who = match seat {
                    Seat::Player => "You draw",
                    Seat::Dealer => "Dealer draws",
                };
                if face_down {
                    println!("{who} a face-down card");
                } else {
                    println!("{who} {}", format_card(&card));
                }
                thread::sleep(REVEAL_DELAY);
            }
            Event::HoleRevealed { card, value } => {
                println!("Dealer reveals {} ({value})", format_card(&card));
                thread::sleep(REVEAL_DELAY);
            }
            Event::DeckReshuffled => println!("Deck reshuffled."),
            Event::RoundSettled(result) => println!("\n{result}"),
            Event::SessionReset { balance } => println!("Balance reset to ${balance}."),
            Event::BetPlaced { .. }
            | Event::PlayerTurn
            | Event::DealerStood { .. }
            | Event::RoundCleared { .. }
            | Event::SessionOver => {}
        }
    }
}

/// Returns `None` once stdin is closed.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    read_command(&mut io::stdin().lock())
}

fn read_command(reader: &mut impl BufRead) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn print_table(view: &TableView) {
    println!("\nBalance: ${}", view.balance);
    if view.bet > 0 {
        println!("Current Bet: ${}", view.bet);
    }

    if !view.dealer_cards.is_empty() {
        let dealer = view
            .dealer_cards
            .iter()
            .map(|card| card.as_ref().map_or_else(|| "??".to_string(), format_card))
            .collect::<Vec<_>>()
            .join(" ");
        let value = view
            .dealer_value
            .map_or_else(|| "?".to_string(), |value| value.to_string());
        println!("Dealer: {dealer} (Value: {value})");
    }

    if !view.player_cards.is_empty() {
        let player = view
            .player_cards
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ");
        println!("Player: {player} (Value: {})", view.player_value);
    }

    println!("{}", view.status);
}

fn format_card(card: &Card) -> String {
    let code = match card.color() {
        Color::Red => "31",
        Color::Black => "37",
    };
    colorize(&card.to_string(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
