//! Round flow integration tests.

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use tablejack::{
    ActionError, BetError, Card, DECK_SIZE, DealError, DealerError, DealerStep, Deck, Game,
    GameOptions, GameState, HandOutcome, HandStatus, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Deals one round at `bet` from cards in draw order:
/// player, dealer up, player, dealer hole, then hits and dealer draws.
fn deal(game: &mut Game, bet: usize, draws: &[Card]) {
    game.new_round_with_deck(bet, Deck::from_draws(draws))
        .unwrap();
}

fn table() -> Game {
    Game::new(GameOptions::default(), 1)
}

#[test]
fn new_session_waits_for_a_bet() {
    let game = table();
    assert_eq!(game.state(), GameState::Betting);
    assert_eq!(game.money(), 1000);
    assert_eq!(game.current_bet(), 100);
    assert!(game.hands().is_empty());
    assert!(game.round_result().is_none());
    assert!(game.can_start_round());
    assert!(!game.can_hit());
    assert_eq!(game.cards_remaining(), DECK_SIZE);
}

#[test]
fn round_refused_below_table_minimum() {
    let mut game = table();

    assert_eq!(game.new_round(1), Err(BetError::BelowMinimum));
    assert_eq!(
        game.new_round_with_deck(9, Deck::new()),
        Err(DealError::Bet(BetError::BelowMinimum))
    );
    assert_eq!(game.state(), GameState::Betting);
    assert_eq!(game.money(), 1000);
    assert!(game.bets().is_empty());

    let game = Game::new(
        GameOptions::default().with_default_bet(5).with_min_bet(10),
        1,
    );
    assert!(!game.can_start_round());
}

#[test]
fn oversized_bet_steps_are_refused() {
    let mut game = table();

    assert!(!game.can_increase_bet(usize::MAX));
    assert_eq!(game.increase_bet(usize::MAX), Err(BetError::InsufficientFunds));
    assert_eq!(game.current_bet(), 100);

    assert!(!game.can_decrease_bet(usize::MAX));
    assert_eq!(game.decrease_bet(usize::MAX), Err(BetError::BelowMinimum));
    assert_eq!(game.current_bet(), 100);
}

#[test]
fn spent_deck_ends_dealer_draws() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 6),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 5),
        ],
    );

    game.stand().unwrap();
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(game.dealer_step(), Ok(DealerStep::Stand(11)));
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.money(), 1100);
    assert_eq!(game.message(), "Hand 1 wins.");

    game.new_round(100).unwrap();
    assert_ne!(game.state(), GameState::DealerTurn);
    assert_eq!(game.hands()[0].len(), 2);
}

#[test]
fn opening_deal_deducts_bet_and_hides_hole_card() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Hearts, 9),   // player
            card(Suit::Clubs, 6),    // dealer up
            card(Suit::Diamonds, 7), // player
            card(Suit::Spades, 10),  // dealer hole
        ],
    );

    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.money(), 900);
    assert_eq!(game.bets(), &[100]);
    assert_eq!(game.hands().len(), 1);
    assert_eq!(game.hands()[0].cards()[0].rank, 9);
    assert_eq!(game.hands()[0].cards()[1].rank, 7);
    assert_eq!(game.dealer_hand().cards()[0].rank, 6);
    assert!(game.dealer_hand().cards()[0].face_up);
    assert!(!game.dealer_hand().cards()[1].face_up);
    assert_eq!(game.dealer_hand().visible_value(), 6);
    assert_eq!(game.current_hand_index(), 0);
    assert_eq!(game.message(), "Your turn! Hit, stand, or use other options.");
}

#[test]
fn shuffled_round_accounts_for_every_card() {
    let mut game = table();
    game.new_round(100).unwrap();

    let on_table = game.hands()[0].len() + game.dealer_hand().len();
    assert_eq!(on_table, 4);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
}

#[test]
fn round_refused_without_funds() {
    let mut game = Game::new(GameOptions::default().with_starting_money(50), 1);

    assert_eq!(game.new_round(100), Err(BetError::InsufficientFunds));
    assert_eq!(game.message(), "Not enough money to play!");
    assert_eq!(game.state(), GameState::Betting);
    assert_eq!(game.money(), 50);
    assert!(!game.can_start_round());

    assert_eq!(game.new_round(0), Err(BetError::ZeroBet));
}

#[test]
fn prepared_deck_must_cover_opening_deal() {
    let mut game = table();
    let deck = Deck::from_draws(&[card(Suit::Hearts, 9), card(Suit::Clubs, 5)]);

    assert_eq!(
        game.new_round_with_deck(100, deck),
        Err(DealError::NotEnoughCards)
    );
    assert_eq!(game.state(), GameState::Betting);
    assert_eq!(game.money(), 1000);
}

#[test]
fn dealer_blackjack_takes_the_bet() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Spades, 1),
            card(Suit::Diamonds, 7),
            card(Suit::Clubs, 13),
        ],
    );

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.money(), 900);
    assert!(game.dealer_hand().is_hole_revealed());
    assert_eq!(game.message(), "Dealer has blackjack! You lose.");

    let result = game.round_result().unwrap();
    assert!(result.dealer_blackjack);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.net, -100);
}

#[test]
fn both_blackjacks_push() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 1),
            card(Suit::Spades, 13),
            card(Suit::Hearts, 12),
        ],
    );

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.money(), 1000);
    assert_eq!(game.message(), "Both have blackjack - Push!");
    assert_eq!(game.round_result().unwrap().hands[0].outcome, HandOutcome::Push);
}

#[test]
fn player_blackjack_pays_three_to_two() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 9),
            card(Suit::Spades, 13),
            card(Suit::Clubs, 7),
        ],
    );

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.money(), 1150);
    assert!(game.dealer_hand().is_hole_revealed());
    assert_eq!(game.hands().len(), 1);

    let result = game.round_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 250);
    assert_eq!(result.net, 150);
}

#[test]
fn player_blackjack_payout_rounds_down() {
    let mut game = table();
    deal(
        &mut game,
        15,
        &[
            card(Suit::Spades, 11),
            card(Suit::Hearts, 5),
            card(Suit::Spades, 1),
            card(Suit::Clubs, 7),
        ],
    );

    assert_eq!(game.money(), 1000 - 15 + 37);
}

#[test]
fn ten_up_without_blackjack_continues() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Spades, 13),
            card(Suit::Diamonds, 7),
            card(Suit::Clubs, 7),
        ],
    );

    assert_eq!(game.state(), GameState::PlayerTurn);
    assert!(!game.dealer_hand().is_hole_revealed());
}

#[test]
fn bust_forfeits_the_wager_once() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 6),
            card(Suit::Spades, 8),
            card(Suit::Hearts, 13), // hit
        ],
    );

    let drawn = game.hit().unwrap();
    assert_eq!(drawn.rank, 13);
    assert_eq!(game.hands()[0].status(), HandStatus::Bust);
    assert_eq!(game.message(), "Hand 1 busts with 26! Dealer's turn");
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.money(), 900);

    let drawn = game.dealer_play().unwrap();
    assert!(drawn.is_empty());
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.money(), 900);
    assert_eq!(game.message(), "Hand 1: Bust.");
    assert_eq!(game.round_result().unwrap().hands[0].outcome, HandOutcome::Bust);
}

#[test]
fn hitting_to_twenty_one_keeps_the_turn() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 6),
            card(Suit::Spades, 8),
            card(Suit::Hearts, 10),
        ],
    );

    game.hit().unwrap();
    assert_eq!(game.hands()[0].value(), 21);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert!(game.can_stand());
}

#[test]
fn stand_reveals_hole_and_dealer_busts() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 6),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 10),
            card(Suit::Clubs, 6), // dealer draw
        ],
    );

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);
    assert!(game.dealer_hand().is_hole_revealed());
    assert_eq!(game.message(), "Dealer's turn");

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Suit::Clubs, 6)]);
    assert_eq!(game.dealer_hand().value(), 22);
    assert_eq!(game.money(), 1100);
    assert_eq!(game.message(), "Hand 1 wins (dealer busts).");

    let result = game.round_result().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].payout, 200);
}

#[test]
fn dealer_steps_one_card_at_a_time() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 4),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 2),
            card(Suit::Clubs, 5),
            card(Suit::Hearts, 6),
        ],
    );

    assert_eq!(game.dealer_step(), Err(DealerError::InvalidState));
    game.stand().unwrap();

    assert_eq!(game.dealer_step(), Ok(DealerStep::Draw(card(Suit::Clubs, 5))));
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.dealer_step(), Ok(DealerStep::Draw(card(Suit::Hearts, 6))));
    assert_eq!(game.dealer_step(), Ok(DealerStep::Stand(17)));
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.dealer_step(), Err(DealerError::InvalidState));

    assert_eq!(game.money(), 1100);
    assert_eq!(game.message(), "Hand 1 wins.");
}

#[test]
fn paced_dealer_play_matches_unpaced() {
    let draws = [
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 2),
        card(Suit::Diamonds, 9),
        card(Suit::Spades, 3),
        card(Suit::Clubs, 4),
        card(Suit::Hearts, 3),
        card(Suit::Diamonds, 5),
    ];

    let mut plain = table();
    deal(&mut plain, 100, &draws);
    plain.stand().unwrap();
    let mut paced = plain.clone();

    let plain_drawn = plain.dealer_play().unwrap();

    let mut seen = Vec::new();
    let paced_drawn = paced.dealer_play_with(|card| seen.push(*card)).unwrap();

    assert_eq!(plain_drawn.len(), 3);
    assert_eq!(paced_drawn, plain_drawn);
    assert_eq!(seen, plain_drawn);
    assert_eq!(paced.snapshot(), plain.snapshot());
    assert_eq!(paced.round_result(), plain.round_result());
}

#[test]
fn dealer_stands_on_soft_seventeen_by_default() {
    let draws = [
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 1),
        card(Suit::Diamonds, 8),
        card(Suit::Spades, 6),
        card(Suit::Clubs, 2),
    ];

    let mut game = table();
    deal(&mut game, 100, &draws);
    game.stand().unwrap();
    assert!(game.dealer_play().unwrap().is_empty());
    assert_eq!(game.money(), 1100);

    let mut game = Game::new(GameOptions::default().with_stand_on_soft_17(false), 1);
    deal(&mut game, 100, &draws);
    game.stand().unwrap();
    assert_eq!(game.dealer_play().unwrap().len(), 1);
    assert_eq!(game.dealer_hand().value(), 19);
    assert_eq!(game.money(), 900);
    assert_eq!(game.message(), "Hand 1 loses.");
}

#[test]
fn equal_totals_push() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 8),
        ],
    );

    game.stand().unwrap();
    game.dealer_play().unwrap();
    assert_eq!(game.money(), 1000);
    assert_eq!(game.message(), "Hand 1: Push.");
    assert_eq!(game.round_result().unwrap().net, 0);
}

#[test]
fn double_down_draws_once_and_ends_the_hand() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 6),
            card(Suit::Spades, 8),
            card(Suit::Hearts, 10), // double draw
        ],
    );

    assert!(game.can_double());
    let drawn = game.double_down().unwrap();
    assert_eq!(drawn.rank, 10);
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.bets(), &[200]);
    assert_eq!(game.money(), 800);
    assert!(game.hands()[0].is_doubled());
    assert_eq!(game.hands()[0].status(), HandStatus::Stand);

    game.dealer_play().unwrap();
    assert_eq!(game.money(), 1200);
}

#[test]
fn double_down_bust_loses_the_doubled_wager() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 2),
            card(Suit::Spades, 8),
            card(Suit::Hearts, 13),
        ],
    );

    game.double_down().unwrap();
    assert_eq!(game.hands()[0].status(), HandStatus::Bust);
    assert_eq!(game.state(), GameState::DealerTurn);

    game.dealer_play().unwrap();
    assert_eq!(game.money(), 800);
    assert_eq!(game.round_result().unwrap().net, -200);
}

#[test]
fn double_down_needs_two_cards_and_funds() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 3),
            card(Suit::Spades, 8),
            card(Suit::Hearts, 4),
            card(Suit::Hearts, 5),
        ],
    );

    game.hit().unwrap();
    assert!(!game.can_double());
    assert_eq!(game.double_down(), Err(ActionError::CannotDouble));
    assert_eq!(game.bets(), &[100]);
    assert_eq!(game.hands()[0].len(), 3);

    let mut game = Game::new(GameOptions::default().with_starting_money(150), 1);
    deal(
        &mut game,
        100,
        &[
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 6),
            card(Suit::Spades, 8),
            card(Suit::Hearts, 10),
        ],
    );

    assert!(!game.can_double());
    assert_eq!(game.double_down(), Err(ActionError::InsufficientFunds));
    assert_eq!(game.money(), 50);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn split_creates_two_hands() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Spades, 8),   // player
            card(Suit::Clubs, 5),    // dealer up
            card(Suit::Hearts, 8),   // player
            card(Suit::Diamonds, 9), // dealer hole
            card(Suit::Spades, 2),   // split hand 1 draw
            card(Suit::Hearts, 3),   // split hand 2 draw
            card(Suit::Clubs, 10),   // dealer draw
        ],
    );

    assert!(game.can_split());
    game.split().unwrap();

    let hands = game.hands();
    assert_eq!(hands.len(), 2);
    assert_eq!(hands[0].len(), 2);
    assert_eq!(hands[1].len(), 2);
    assert_eq!(hands[0].cards()[1].rank, 2);
    assert_eq!(hands[1].cards()[0].suit, Suit::Hearts);
    assert_eq!(hands[1].cards()[1].rank, 3);
    assert_eq!(game.bets(), &[100, 100]);
    assert_eq!(game.money(), 800);
    assert_eq!(game.current_hand_index(), 0);

    game.stand().unwrap();
    assert_eq!(game.current_hand_index(), 1);
    assert_eq!(game.message(), "Playing hand 2");
    assert_eq!(game.state(), GameState::PlayerTurn);

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    game.dealer_play().unwrap();
    assert_eq!(game.money(), 1200);
    assert_eq!(
        game.message(),
        "Hand 1 wins (dealer busts). Hand 2 wins (dealer busts)."
    );
    assert_eq!(game.round_result().unwrap().hands.len(), 2);
}

#[test]
fn split_requires_a_pair_and_funds() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Spades, 8),
            card(Suit::Clubs, 5),
            card(Suit::Hearts, 9),
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 2),
            card(Suit::Hearts, 3),
        ],
    );
    assert!(!game.can_split());
    assert_eq!(game.split(), Err(ActionError::CannotSplit));
    assert_eq!(game.hands().len(), 1);

    let mut game = Game::new(GameOptions::default().with_starting_money(150), 1);
    deal(
        &mut game,
        100,
        &[
            card(Suit::Spades, 8),
            card(Suit::Clubs, 5),
            card(Suit::Hearts, 8),
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 2),
            card(Suit::Hearts, 3),
        ],
    );
    assert_eq!(game.split(), Err(ActionError::InsufficientFunds));
    assert_eq!(game.hands().len(), 1);
    assert_eq!(game.bets(), &[100]);
    assert_eq!(game.money(), 50);
}

#[test]
fn split_stops_at_four_hands() {
    let mut game = table();
    // Synthetic deck: repeated eights keep every hand a pair.
    deal(
        &mut game,
        100,
        &[
            card(Suit::Spades, 8),
            card(Suit::Clubs, 5),
            card(Suit::Hearts, 8),
            card(Suit::Diamonds, 9),
            card(Suit::Diamonds, 8),
            card(Suit::Clubs, 8),
            card(Suit::Spades, 8),
            card(Suit::Hearts, 8),
            card(Suit::Diamonds, 8),
            card(Suit::Clubs, 8),
        ],
    );

    game.split().unwrap();
    game.split().unwrap();
    game.split().unwrap();
    assert_eq!(game.hands().len(), 4);
    assert!(game.hands().iter().all(|hand| hand.len() == 2));
    assert_eq!(game.bets(), &[100, 100, 100, 100]);
    assert_eq!(game.money(), 600);

    assert!(game.hands()[0].is_pair());
    assert!(!game.can_split());
    assert_eq!(game.split(), Err(ActionError::MaxHandsReached));
    assert_eq!(game.hands().len(), 4);
}

#[test]
fn split_twenty_one_advances_without_bonus() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Spades, 1),
            card(Suit::Clubs, 9),
            card(Suit::Hearts, 1),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 13), // hand 1 makes 21
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 10), // dealer draw
        ],
    );

    game.split().unwrap();
    assert_eq!(game.hands()[0].value(), 21);
    assert_eq!(game.hands()[0].status(), HandStatus::Stand);
    assert_eq!(game.current_hand_index(), 1);
    assert_eq!(game.state(), GameState::PlayerTurn);

    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.round_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].payout, 200);
    assert_eq!(game.money(), 1200);
}

#[test]
fn split_aces_can_receive_one_card_each() {
    let options = GameOptions::default().with_split_aces_receive_one_card(true);
    let mut game = Game::new(options, 1);
    deal(
        &mut game,
        100,
        &[
            card(Suit::Spades, 1),
            card(Suit::Clubs, 9),
            card(Suit::Hearts, 1),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 5),
            card(Suit::Hearts, 6),
        ],
    );

    game.split().unwrap();
    assert!(
        game.hands()
            .iter()
            .all(|hand| hand.status() == HandStatus::Stand)
    );
    assert_eq!(game.state(), GameState::DealerTurn);
}

#[test]
fn actions_refused_outside_player_turn() {
    let mut game = table();
    assert_eq!(game.hit(), Err(ActionError::InvalidState));
    assert_eq!(game.stand(), Err(ActionError::InvalidState));
    assert_eq!(game.double_down(), Err(ActionError::InvalidState));
    assert_eq!(game.split(), Err(ActionError::InvalidState));

    deal(
        &mut game,
        100,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 8),
        ],
    );
    assert_eq!(game.new_round(100), Err(BetError::InvalidState));
    assert_eq!(game.increase_bet(10), Err(BetError::InvalidState));

    game.stand().unwrap();
    assert_eq!(game.hit(), Err(ActionError::InvalidState));

    game.dealer_play().unwrap();
    let before = game.snapshot();
    assert_eq!(game.hit(), Err(ActionError::InvalidState));
    assert_eq!(game.stand(), Err(ActionError::InvalidState));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn bet_selection_between_rounds() {
    let mut game = table();
    assert_eq!(game.increase_bet(10), Ok(110));
    assert_eq!(game.decrease_bet(10), Ok(100));

    let mut game = Game::new(GameOptions::default().with_default_bet(10), 1);
    assert!(!game.can_decrease_bet(10));
    assert_eq!(game.decrease_bet(10), Err(BetError::BelowMinimum));

    let mut game = Game::new(
        GameOptions::default()
            .with_starting_money(100)
            .with_default_bet(100),
        1,
    );
    assert!(!game.can_increase_bet(10));
    assert_eq!(game.increase_bet(10), Err(BetError::InsufficientFunds));
}

#[test]
fn rebet_uses_selected_bet_after_game_over() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Spades, 1),
            card(Suit::Diamonds, 7),
            card(Suit::Clubs, 13),
        ],
    );
    assert_eq!(game.state(), GameState::GameOver);

    game.increase_bet(50).unwrap();
    game.rebet().unwrap();
    assert_eq!(game.current_bet(), 150);
    assert_eq!(game.hands()[0].len(), 2);
    assert!(game.bets().first().is_some_and(|bet| *bet >= 150));
}

#[test]
fn snapshot_mirrors_queries() {
    let mut game = table();
    deal(
        &mut game,
        100,
        &[
            card(Suit::Spades, 8),
            card(Suit::Clubs, 5),
            card(Suit::Hearts, 8),
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 2),
            card(Suit::Hearts, 3),
        ],
    );
    game.split().unwrap();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.state, GameState::PlayerTurn);
    assert_eq!(snapshot.money, 800);
    assert_eq!(snapshot.current_bet, 100);
    assert_eq!(snapshot.bets, vec![100, 100]);
    assert_eq!(snapshot.hands.len(), 2);
    assert_eq!(snapshot.current_hand, 0);
    assert_eq!(snapshot.cards_remaining, 0);
    assert!(!snapshot.dealer.is_hole_revealed());
    assert_eq!(snapshot.message, game.message());
}

#[test]
fn seeded_rounds_keep_table_invariants() {
    let options = GameOptions::default().with_starting_money(1_000_000);
    let mut game = Game::new(options, 2024);
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    for _ in 0..300 {
        let before = game.money();
        game.new_round(10).unwrap();
        assert!(game.money() + 10 >= before);

        while game.state() == GameState::PlayerTurn {
            let index = game.current_hand_index();
            assert!(index < game.hands().len());
            assert!(game.hands().len() <= 4);
            assert_eq!(game.money() + game.ledger().outstanding(), before);

            let choices: Vec<u8> = [
                (game.can_hit(), 0),
                (game.can_stand(), 1),
                (game.can_double(), 2),
                (game.can_split(), 3),
            ]
            .into_iter()
            .filter_map(|(allowed, action)| allowed.then_some(action))
            .collect();

            let result = match choices.choose(&mut rng).copied() {
                Some(0) => game.hit().map(|_| ()),
                Some(2) => game.double_down().map(|_| ()),
                Some(3) => game.split(),
                _ => game.stand(),
            };
            assert!(result.is_ok());
        }

        if game.state() == GameState::DealerTurn {
            game.dealer_play().unwrap();

            let dealer = game.dealer_hand().cards();
            for drawn in 2..dealer.len() {
                assert!(tablejack::hand_value(&dealer[..drawn]) < 17);
            }
            assert!(dealer.len() == 2 || game.dealer_hand().value() >= 17);
        }

        assert_eq!(game.state(), GameState::GameOver);
        let on_table: usize =
            game.hands().iter().map(|h| h.len()).sum::<usize>() + game.dealer_hand().len();
        assert_eq!(on_table + game.cards_remaining(), DECK_SIZE);

        let result = game.round_result().unwrap();
        let wagered: usize = result.hands.iter().map(|hand| hand.bet).sum();
        assert_eq!(game.money(), before - wagered + result.total_payout);
    }
}
