//! CLI blackjack example.
//!
//! Run with `RUST_LOG=tablejack=debug` to see the dealer's play-by-play.

use std::io::{self, Write};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tablejack::{Card, DealerHand, Game, GameOptions, GameState, Hand, HandStatus};

fn main() {
    env_logger::init();
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let step = options.bet_step;
    let mut game = Game::new(options, seed);

    loop {
        if !game.can_start_round() && !game.can_decrease_bet(step) {
            println!("You are out of money. Game over.");
            break;
        }

        println!(
            "\nMoney: ${} | Current bet: ${}",
            game.money(),
            game.current_bet()
        );
        match prompt_line("[enter] deal, [+] raise, [-] lower, [q] quit: ").as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "+" => {
                if let Err(err) = game.increase_bet(step) {
                    println!("Bet error: {err}");
                }
                continue;
            }
            "-" => {
                if let Err(err) = game.decrease_bet(step) {
                    println!("Bet error: {err}");
                }
                continue;
            }
            _ => {}
        }

        if let Err(err) = game.rebet() {
            println!("{} ({err})", game.message());
            continue;
        }

        while game.state() == GameState::PlayerTurn {
            print_table(&game);
            println!("{}", game.message());
            println!("{}", format_actions(&game));

            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand(),
                "d" | "double" => game.double_down().map(|_| ()),
                "p" | "split" => game.split(),
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

        if game.state() == GameState::DealerTurn {
            print_table(&game);
            let paced = game.dealer_play_with(|card| {
                println!("Dealer draws {card}");
                std::thread::sleep(Duration::from_millis(600));
            });
            if let Err(err) = paced {
                println!("Dealer error: {err}");
            }
        }

        print_table(&game);
        println!("{}", game.message());
        if let Some(result) = game.round_result() {
            println!("Payout: {} (net {})", result.total_payout, result.net);
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    let dealer = game.dealer_hand();
    println!(
        "\nDealer: {} (value {})",
        format_dealer(dealer),
        dealer.visible_value()
    );

    let playing = game.state() == GameState::PlayerTurn;
    for (index, hand) in game.hands().iter().enumerate() {
        let marker = if playing && index == game.current_hand_index() {
            "*"
        } else {
            " "
        };
        println!(
            "{} Hand {}: {} | value {} | bet {} | {}",
            marker,
            index + 1,
            format_hand(hand),
            hand.value(),
            game.bets().get(index).copied().unwrap_or(0),
            format_status(hand.status())
        );
    }
}

fn format_actions(game: &Game) -> String {
    let parts = [
        format_action("hit", "h", game.can_hit()),
        format_action("stand", "s", game.can_stand()),
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

const fn format_status(status: HandStatus) -> &'static str {
    match status {
        HandStatus::Active => "playing",
        HandStatus::Stand => "stood",
        HandStatus::Bust => "bust",
        HandStatus::Blackjack => "blackjack",
    }
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    dealer
        .cards()
        .iter()
        .map(|card| {
            if card.face_up {
                format_card(card)
            } else {
                "??".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), code)
}
