use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, info};

use crate::deck::Deck;
use crate::error::{BetError, DealError};
use crate::hand::{Hand, HandStatus};
use crate::resolve;
use crate::result::{HandOutcome, HandResult};

use super::{Game, GameState};

/// Cards needed for the opening deal.
const OPENING_CARDS: usize = 4;

impl Game {
    fn check_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if !self.state.accepts_bets() {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount < self.options.min_bet {
            return Err(BetError::BelowMinimum);
        }
        if self.ledger.money() < amount {
            self.message = String::from("Not enough money to play!");
            return Err(BetError::InsufficientFunds);
        }
        Ok(())
    }

    /// Returns whether a round can be dealt at the selected bet.
    #[must_use]
    pub const fn can_start_round(&self) -> bool {
        let bet = self.ledger.current_bet();
        self.state.accepts_bets()
            && bet > 0
            && bet >= self.options.min_bet
            && self.ledger.money() >= bet
    }

    /// Deducts the bet and deals a new round from a freshly shuffled deck.
    ///
    /// The player and dealer each receive two cards, alternating, with the
    /// dealer's second card face down. A dealer blackjack or a player
    /// blackjack ends the round immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the bet is zero or below
    /// the table minimum, or the bankroll does not cover the bet. Nothing is
    /// dealt on error.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7);
    /// game.new_round(100).unwrap();
    /// assert_eq!(game.hands()[0].len(), 2);
    /// assert_eq!(game.dealer_hand().len(), 2);
    /// ```
    pub fn new_round(&mut self, bet: usize) -> Result<(), BetError> {
        self.check_bet(bet)?;
        let deck = Deck::shuffled(&mut self.rng);
        self.deal_from(bet, deck)
    }

    /// Deals a new round at the currently selected bet.
    ///
    /// # Errors
    ///
    /// Same as [`Game::new_round`].
    pub fn rebet(&mut self) -> Result<(), BetError> {
        self.new_round(self.ledger.current_bet())
    }

    /// Deals a new round from a prepared deck instead of a fresh shuffle.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot cover the opening deal or the bet
    /// is refused.
    pub fn new_round_with_deck(&mut self, bet: usize, deck: Deck) -> Result<(), DealError> {
        if deck.len() < OPENING_CARDS {
            return Err(DealError::NotEnoughCards);
        }
        self.check_bet(bet)?;
        self.deal_from(bet, deck)?;
        Ok(())
    }

    fn deal_from(&mut self, bet: usize, deck: Deck) -> Result<(), BetError> {
        self.ledger.place_bet(bet)?;
        debug!("bet {bet} placed, bankroll {}", self.ledger.money());

        self.deck = deck;
        self.hands.clear();
        self.hands.push(Hand::new());
        self.dealer_hand.clear();
        self.current_hand = 0;
        self.last_result = None;

        // Player, dealer up card, player, dealer hole card
        if let Some(card) = self.draw() {
            self.hands[0].add_card(card);
        }
        if let Some(card) = self.draw() {
            self.dealer_hand.add_card(card);
        }
        if let Some(card) = self.draw() {
            self.hands[0].add_card(card);
        }
        if let Some(card) = self.draw() {
            self.dealer_hand.add_hole_card(card);
        }

        if let Some(up) = self.dealer_hand.up_card() {
            debug!(
                "dealt player {} {}, dealer shows {up}",
                self.hands[0].cards()[0],
                self.hands[0].cards()[1]
            );
        }

        self.state = GameState::PlayerTurn;
        self.message = String::from("Your turn! Hit, stand, or use other options.");

        if !self.check_dealer_blackjack() {
            self.check_player_blackjack();
        }

        Ok(())
    }

    /// Peeks for a dealer blackjack behind an Ace or ten-value up card.
    fn check_dealer_blackjack(&mut self) -> bool {
        if !self.dealer_hand.shows_blackjack_risk() || !self.dealer_hand.is_blackjack() {
            return false;
        }

        self.dealer_hand.reveal_hole();
        let bet = self.ledger.bet(0).unwrap_or(0);
        let hand = &mut self.hands[0];
        let outcome = if hand.status() == HandStatus::Blackjack {
            self.message = String::from("Both have blackjack - Push!");
            HandOutcome::Push
        } else {
            hand.set_status(HandStatus::Stand);
            self.message = String::from("Dealer has blackjack! You lose.");
            HandOutcome::Lose
        };
        let player_value = hand.value();

        let payout = resolve::payout(
            outcome,
            bet,
            self.options.blackjack_pays,
            self.options.rounding_blackjack,
        );
        self.ledger.settle(payout);
        info!("dealer blackjack, hand {outcome:?}");

        let dealer_value = self.dealer_hand.value();
        self.finish_round(alloc::vec![HandResult {
            hand_index: 0,
            outcome,
            bet,
            payout,
            player_value,
            dealer_value,
        }]);
        true
    }

    /// Pays a natural on the opening hand and ends the round.
    fn check_player_blackjack(&mut self) -> bool {
        if self.hands[0].status() != HandStatus::Blackjack {
            return false;
        }

        self.dealer_hand.reveal_hole();
        let bet = self.ledger.bet(0).unwrap_or(0);
        let payout = resolve::payout(
            HandOutcome::Blackjack,
            bet,
            self.options.blackjack_pays,
            self.options.rounding_blackjack,
        );
        self.ledger.settle(payout);
        self.message = String::from("Blackjack! You win 3/2 payout!");
        info!("player blackjack pays {payout}");

        let results: Vec<HandResult> = alloc::vec![HandResult {
            hand_index: 0,
            outcome: HandOutcome::Blackjack,
            bet,
            payout,
            player_value: 21,
            dealer_value: self.dealer_hand.value(),
        }];
        self.finish_round(results);
        true
    }

    /// Returns whether the selected bet can be raised by `step`.
    #[must_use]
    pub const fn can_increase_bet(&self, step: usize) -> bool {
        self.state.accepts_bets() && self.ledger.can_increase_bet(step)
    }

    /// Returns whether the selected bet can be lowered by `step`.
    #[must_use]
    pub const fn can_decrease_bet(&self, step: usize) -> bool {
        self.state.accepts_bets() && self.ledger.can_decrease_bet(step, self.options.min_bet)
    }

    /// Raises the selected bet by `step`, returning the new bet.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the bankroll does not
    /// cover the raised bet.
    pub const fn increase_bet(&mut self, step: usize) -> Result<usize, BetError> {
        if !self.state.accepts_bets() {
            return Err(BetError::InvalidState);
        }
        self.ledger.increase_bet(step)
    }

    /// Lowers the selected bet by `step`, returning the new bet.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the bet would fall below
    /// the table minimum.
    pub const fn decrease_bet(&mut self, step: usize) -> Result<usize, BetError> {
        if !self.state.accepts_bets() {
            return Err(BetError::InvalidState);
        }
        self.ledger.decrease_bet(step, self.options.min_bet)
    }
}
