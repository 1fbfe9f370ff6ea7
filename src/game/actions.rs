use log::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{Hand, HandStatus};

use super::{Game, GameState};

impl Game {
    /// Returns the index of the hand that may act.
    fn ensure_player_turn(&self) -> Result<usize, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let hand = self
            .hands
            .get(self.current_hand)
            .ok_or(ActionError::InvalidState)?;
        if hand.status() != HandStatus::Active {
            return Err(ActionError::HandNotActive);
        }

        Ok(self.current_hand)
    }

    fn ensure_can_double(&self) -> Result<usize, ActionError> {
        let index = self.ensure_player_turn()?;

        // Can only double on first two cards
        if self.hands[index].len() != 2 {
            return Err(ActionError::CannotDouble);
        }
        if !self.ledger.covers(index) {
            return Err(ActionError::InsufficientFunds);
        }
        if self.deck.is_empty() {
            return Err(ActionError::NoCards);
        }

        Ok(index)
    }

    fn ensure_can_split(&self) -> Result<usize, ActionError> {
        let index = self.ensure_player_turn()?;

        if !self.hands[index].is_pair() {
            return Err(ActionError::CannotSplit);
        }
        if self.hands.len() >= self.options.max_hands {
            return Err(ActionError::MaxHandsReached);
        }
        if !self.ledger.covers(index) {
            return Err(ActionError::InsufficientFunds);
        }
        if self.deck.len() < 2 {
            return Err(ActionError::NoCards);
        }

        Ok(index)
    }

    /// Closes a busted hand and moves play on, keeping the bust in the message.
    fn bust_and_advance(&mut self, index: usize) {
        let value = self.hands[index].value();
        debug!("hand {} busts with {value}", index + 1);

        self.advance_to_next_active_hand();
        self.message = alloc::format!("Hand {} busts with {value}! {}", index + 1, self.message);
    }

    /// Returns whether the current hand may hit.
    #[must_use]
    pub fn can_hit(&self) -> bool {
        self.ensure_player_turn().is_ok() && !self.deck.is_empty()
    }

    /// Returns whether the current hand may stand.
    #[must_use]
    pub fn can_stand(&self) -> bool {
        self.ensure_player_turn().is_ok()
    }

    /// Returns whether the current hand may double down.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.ensure_can_double().is_ok()
    }

    /// Returns whether the current hand may split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.ensure_can_split().is_ok()
    }

    /// Player action: Hit (draw a card into the current hand).
    ///
    /// A bust forfeits the hand's wager and moves play to the next hand, or
    /// to the dealer after the last one.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let index = self.ensure_player_turn()?;
        let card = self.draw().ok_or(ActionError::NoCards)?;

        let hand = &mut self.hands[index];
        hand.add_card(card);
        debug!("hand {} hits {card}, total {}", index + 1, hand.value());

        if hand.status() == HandStatus::Bust {
            self.bust_and_advance(index);
        }

        Ok(card)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let index = self.ensure_player_turn()?;

        self.hands[index].set_status(HandStatus::Stand);
        debug!("hand {} stands on {}", index + 1, self.hands[index].value());

        self.advance_to_next_active_hand();

        Ok(())
    }

    /// Player action: Double down (double the wager, take one card, end the hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand does not hold
    /// exactly two cards, the bankroll does not cover the extra wager, or the
    /// deck is empty.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        let index = self.ensure_can_double()?;

        let bet = self.ledger.double(index)?;
        let card = self.draw().ok_or(ActionError::NoCards)?;

        let hand = &mut self.hands[index];
        hand.mark_doubled();
        hand.add_card(card);
        debug!(
            "hand {} doubles to {bet}, draws {card}, total {}",
            index + 1,
            hand.value()
        );

        if hand.status() == HandStatus::Bust {
            self.bust_and_advance(index);
        } else {
            hand.set_status(HandStatus::Stand);
            self.advance_to_next_active_hand();
        }

        Ok(card)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The second card moves to a new hand right after the current one, each
    /// hand receives one new card, and the wager is duplicated. If the
    /// current hand then totals 21 it is closed and play moves on.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand is not a
    /// two-card pair, the table already holds the maximum number of hands,
    /// the bankroll does not cover the new wager, or the deck runs short.
    pub fn split(&mut self) -> Result<(), ActionError> {
        let index = self.ensure_can_split()?;

        self.ledger.split_bet(index)?;

        let (Some(first), Some(second)) = (self.draw(), self.draw()) else {
            return Err(ActionError::NoCards);
        };

        let hand = &mut self.hands[index];
        let is_ace = hand.cards().first().is_some_and(Card::is_ace);
        let Some(split_card) = hand.take_split_card() else {
            return Err(ActionError::CannotSplit);
        };
        hand.mark_split();
        hand.add_card(first);

        let mut new_hand = Hand::from_split(split_card);
        new_hand.add_card(second);

        // If split aces receive only one card, stand immediately
        if is_ace && self.options.split_aces_receive_one_card {
            for hand in [&mut self.hands[index], &mut new_hand] {
                if hand.status() == HandStatus::Active {
                    hand.set_status(HandStatus::Stand);
                }
            }
        } else if self.hands[index].value() == 21 {
            self.hands[index].set_status(HandStatus::Stand);
        }

        self.hands.insert(index + 1, new_hand);
        debug!(
            "hand {} split into {} hands, bets {:?}",
            index + 1,
            self.hands.len(),
            self.ledger.bets()
        );

        self.advance_if_current_inactive();

        Ok(())
    }
}
