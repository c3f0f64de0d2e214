//! CLI blackjack table.
//!
//! Run with `RUST_LOG=debug` to watch the engine's log output.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{Card, GameState, HandView, MemoryStore, Session, Suit, TableOptions, TableSnapshot};

fn main() {
    env_logger::init();
    println!("Blackjack table (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default();
    let mut session = Session::open(MemoryStore::new(), "guest", options, seed);
    let mut bet = options.default_bet;

    loop {
        if session.game().is_game_over() {
            println!("Balance below the minimum bet. Game over.");
            break;
        }

        let balance = session.game().balance();
        let prompt = format!(
            "Bet ({}-{balance}, enter for {bet}, q to quit): ",
            options.min_bet
        );
        let Some(input) = prompt_bet(&prompt, bet) else {
            break;
        };
        bet = options.clamp_bet(input, balance);

        match session.start_round(bet) {
            Ok(Some(_)) => {}
            Ok(None) => {
                if !play_hands(&mut session) {
                    break;
                }
            }
            Err(err) => {
                println!("Bet declined: {err}");
                continue;
            }
        }

        print_table(&session.snapshot());
    }

    let history: Vec<String> = session.game().history().map(ToString::to_string).collect();
    if !history.is_empty() {
        println!("Recent rounds:");
        for entry in &history {
            println!("  {entry}");
        }
    }

    let stats = session.game().stats().clone();
    let (_store, saved) = session.exit();
    if let Err(err) = saved {
        println!("Could not save profile: {err}");
    }
    println!(
        "Hands {} | won {} | lost {} | pushed {} | naturals {} | charlies {}",
        stats.hands_played, stats.wins, stats.losses, stats.pushes, stats.naturals, stats.charlies
    );
}

/// Plays until the round settles. Returns `false` if the player quit.
fn play_hands(session: &mut Session<MemoryStore>) -> bool {
    while session.game().state() == GameState::PlayerTurn {
        print_table(&session.snapshot());
        println!("{}", format_actions(session));

        let result = match prompt_line("Action: ").as_str() {
            "h" | "hit" => session.hit(),
            "s" | "stand" => session.stand(),
            "d" | "double" => session.double_down(),
            "p" | "split" => session.split(),
            "q" | "quit" => return false,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        if result.is_err() {
            if let Some(message) = session.snapshot().message {
                println!("{message}");
            }
        }
    }
    true
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

fn prompt_bet(prompt: &str, default: usize) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        if input.is_empty() {
            return Some(default);
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(snapshot: &TableSnapshot) {
    let hole = if snapshot.dealer_hand_visible || snapshot.dealer_cards.is_empty() {
        ""
    } else {
        " ??"
    };
    println!(
        "\nDealer: {}{hole} (value {})",
        format_cards(&snapshot.dealer_cards),
        snapshot.dealer_value
    );

    for (index, hand) in snapshot.player_hands.iter().enumerate() {
        let marker = if snapshot.phase == GameState::PlayerTurn
            && index == snapshot.active_hand_index
        {
            "*"
        } else {
            " "
        };
        println!("{marker} Hand {}: {}", index + 1, format_hand(hand));
    }

    println!("Balance {} | bet {}", snapshot.balance, snapshot.current_bet);
    if snapshot.phase == GameState::Settled {
        if let Some(message) = &snapshot.message {
            println!("{message}");
        }
    }
    println!();
}

fn format_actions(session: &Session<MemoryStore>) -> String {
    let game = session.game();
    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("double", "d", game.can_double()),
        format_action("split", "p", game.can_split()),
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

fn format_hand(hand: &HandView) -> String {
    let doubled = if hand.doubled { " (doubled)" } else { "" };
    format!("{} | value {}{doubled}", format_cards(&hand.cards), hand.value)
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
