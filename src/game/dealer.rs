use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, info, warn};

use crate::card::Card;
use crate::error::DealerError;
use crate::resolve;
use crate::result::HandResult;

use super::{DealerStep, Game, GameState};

impl Game {
    /// Returns whether the dealer must take another card.
    fn dealer_must_draw(&self) -> bool {
        let value = self.dealer_hand.value();
        let stands_on = self.options.dealer_stands_on;

        value < stands_on
            || (value == stands_on && self.dealer_hand.is_soft() && !self.options.stand_on_soft_17)
    }

    /// Plays one step of the dealer's turn.
    ///
    /// The hole card is already face up once the state reaches
    /// [`GameState::DealerTurn`]. Each call either draws one card or, when the
    /// dealer stands, resolves every hand and moves to [`GameState::GameOver`].
    /// A spent deck ends the draws and the dealer stands on the current total.
    /// A renderer can call this on a timer to pace the draws.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_step(&mut self) -> Result<DealerStep, DealerError> {
        if self.state != GameState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        if self.dealer_must_draw() {
            if let Some(card) = self.draw() {
                self.dealer_hand.add_card(card);
                debug!("dealer draws {card}, total {}", self.dealer_hand.value());
                return Ok(DealerStep::Draw(card));
            }
            warn!("deck is spent, dealer stands short");
        }

        let value = self.dealer_hand.value();
        debug!("dealer stands with {value}");
        self.resolve_round();
        Ok(DealerStep::Stand(value))
    }

    /// Plays out the dealer's hand and resolves the round.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DealerError> {
        self.dealer_play_with(|_| {})
    }

    /// Plays out the dealer's hand, calling `pace` after every draw.
    ///
    /// The hook only observes; the final state is the same as
    /// [`Game::dealer_play`].
    ///
    /// # Errors
    ///
    /// Same as [`Game::dealer_play`].
    pub fn dealer_play_with<F: FnMut(&Card)>(&mut self, mut pace: F) -> Result<Vec<Card>, DealerError> {
        let mut drawn_cards = Vec::new();

        loop {
            match self.dealer_step()? {
                DealerStep::Draw(card) => {
                    drawn_cards.push(card);
                    pace(&card);
                }
                DealerStep::Stand(_) => return Ok(drawn_cards),
            }
        }
    }

    /// Compares each hand with the dealer, credits payouts, and ends the round.
    fn resolve_round(&mut self) {
        let dealer_value = self.dealer_hand.value();
        let dealer_bust = self.dealer_hand.is_bust();

        let mut results = Vec::with_capacity(self.hands.len());
        let mut messages: Vec<String> = Vec::with_capacity(self.hands.len());

        for (hand_index, hand) in self.hands.iter().enumerate() {
            let bet = self.ledger.bet(hand_index).unwrap_or(0);
            let player_value = hand.value();
            let outcome = resolve::resolve_hand(player_value, dealer_value);
            let payout = resolve::payout(
                outcome,
                bet,
                self.options.blackjack_pays,
                self.options.rounding_blackjack,
            );
            self.ledger.settle(payout);

            info!("hand {} {outcome:?}: bet {bet}, payout {payout}", hand_index + 1);
            messages.push(alloc::format!(
                "Hand {}{}",
                hand_index + 1,
                resolve::outcome_label(outcome, dealer_bust)
            ));

            results.push(HandResult {
                hand_index,
                outcome,
                bet,
                payout,
                player_value,
                dealer_value,
            });
        }

        self.message = messages.join(" ");
        self.finish_round(results);
    }
}
