//! CLI blackjack demo.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    Action, AvailableActions, Card, Command, Game, GameOptions, GameState, Outcome, Presentation,
    Seat, Suit, ThreadSleep,
};
use tracing_subscriber::EnvFilter;

/// Prints every engine command to the terminal.
struct Console;

impl Presentation for Console {
    fn apply(&mut self, command: Command) {
        match command {
            Command::RenderHand { seat, cards, total } => {
                let cards = cards.iter().map(format_card).collect::<Vec<_>>().join(" ");
                println!("{:>6}: {cards} (value {total})", seat_label(seat));
            }
            Command::AddCard { seat, card } => {
                println!("{:>6} draws {}", seat_label(seat), format_card(&card));
            }
            Command::UpdateTotal { seat, total } => {
                println!("{:>6} total: {total}", seat_label(seat));
            }
            Command::DisplayMessage(text) => println!("{text}"),
            Command::DisplayBankroll(amount) => println!("Bankroll: ${amount:.2}"),
            Command::DisplayBet(amount) if amount > 0.0 => println!("Bet: ${amount:.2}"),
            Command::OfferInsurance(amount) => {
                println!("Dealer shows an Ace. Insurance costs ${amount:.2}.");
            }
            Command::ShowOutcome {
                outcome,
                title,
                detail,
            } => {
                let code = match outcome {
                    Outcome::Blackjack | Outcome::Win => "32",
                    Outcome::Push => "33",
                    Outcome::Bust | Outcome::Loss => "31",
                };
                println!("\n  {}  {detail}\n", colorize(&title, code));
            }
            Command::ClearHands => println!("{}", "-".repeat(40)),
            Command::UpdateAvailableActions(_)
            | Command::UpdateGameState(_)
            | Command::DisplayBet(_)
            | Command::EnableDeal
            | Command::EnableBetting
            | Command::UpdateRepeatBet { .. } => {}
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = match Game::new(GameOptions::default(), seed, Console, ThreadSleep) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Invalid options: {err}");
            return;
        }
    };

    loop {
        match game.state() {
            GameState::WaitingForBet => {
                let repeat = if game.can_repeat_bet() {
                    format!(", 'r' to repeat ${:.2}", game.last_bet())
                } else {
                    String::new()
                };
                let input = prompt_line(&format!(
                    "Bet amount (balance ${:.2}{repeat}): ",
                    game.balance()
                ));
                match input.as_str() {
                    "q" | "quit" => break,
                    "r" | "repeat" => {
                        let _ = game.repeat_last_bet();
                    }
                    _ => match input.parse::<f64>() {
                        Ok(amount) => {
                            if game.place_bet(amount).is_ok() {
                                let _ = game.deal();
                            }
                        }
                        Err(_) => println!("Please enter a number."),
                    },
                }
            }
            GameState::OfferingInsurance => {
                let take = matches!(prompt_line("Take insurance? (y/n): ").as_str(), "y" | "yes");
                let _ = game.insurance_decision(take);
            }
            GameState::PlayerTurn => {
                println!("{}", format_actions(game.available_actions()));
                let action = match prompt_line("Action: ").as_str() {
                    "h" | "hit" => Action::Hit,
                    "s" | "stand" => Action::Stand,
                    "d" | "double" => Action::Double,
                    "p" | "split" => Action::Split,
                    "q" | "quit" => break,
                    _ => {
                        println!("Unknown action.");
                        continue;
                    }
                };
                if let Err(err) = game.player_action(action) {
                    println!("Action error: {err}");
                }
            }
            GameState::GameOver => match prompt_line("Start a new game? (y/n): ").as_str() {
                "y" | "yes" => {
                    if let Err(err) = game.new_game() {
                        println!("Cannot start a new game: {err}");
                        break;
                    }
                }
                _ => break,
            },
            state => {
                println!("Unexpected state {state:?}; starting over.");
                if game.new_game().is_err() {
                    break;
                }
            }
        }
    }

    let stats = game.ledger().statistics();
    println!(
        "Played {} hands: {} won, {} lost, {} pushed ({:.1}% won). Net ${:.2}.",
        stats.hands_played,
        stats.hands_won,
        stats.hands_lost,
        stats.hands_pushed,
        stats.win_rate,
        stats.net_profit
    );
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

const fn seat_label(seat: Seat) -> &'static str {
    match seat {
        Seat::Player => "You",
        Seat::Dealer => "Dealer",
    }
}

fn format_actions(actions: AvailableActions) -> String {
    let parts = [
        format_action("hit", "h", actions.can_hit),
        format_action("stand", "s", actions.can_stand),
        format_action("double", "d", actions.can_double),
        format_action("split", "p", actions.can_split),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    if card.face_down {
        return "??".to_string();
    }
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
