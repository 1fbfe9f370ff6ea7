//! Bankroll and per-hand wager tracking.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::{ActionError, BetError};

/// The session bankroll and the wagers riding on each player hand.
///
/// Wagers are deducted when placed. `bets` is index-aligned with the
/// player hands of the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    money: usize,
    current_bet: usize,
    bets: Vec<usize>,
}

impl Ledger {
    /// Creates a ledger with the given bankroll and selected bet.
    #[must_use]
    pub const fn new(money: usize, current_bet: usize) -> Self {
        Self {
            money,
            current_bet,
            bets: Vec::new(),
        }
    }

    /// Returns the bankroll not currently wagered.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.money
    }

    /// Returns the bet selected for the next round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the wager on each hand.
    #[must_use]
    pub fn bets(&self) -> &[usize] {
        &self.bets
    }

    /// Returns the wager on the given hand.
    #[must_use]
    pub fn bet(&self, hand_index: usize) -> Option<usize> {
        self.bets.get(hand_index).copied()
    }

    /// Returns the sum of all wagers on the table.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.bets.iter().sum()
    }

    /// Deducts the opening wager and makes it the only hand's bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or the bankroll does not cover it.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if self.money < amount {
            return Err(BetError::InsufficientFunds);
        }

        self.money -= amount;
        self.current_bet = amount;
        self.bets.clear();
        self.bets.push(amount);
        Ok(())
    }

    /// Returns whether the bankroll covers matching the wager on a hand.
    #[must_use]
    pub fn covers(&self, hand_index: usize) -> bool {
        self.bet(hand_index).is_some_and(|bet| self.money >= bet)
    }

    /// Deducts the hand's wager again and doubles it.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand has no wager or the bankroll does not cover it.
    pub fn double(&mut self, hand_index: usize) -> Result<usize, ActionError> {
        let bet = self.bets.get_mut(hand_index).ok_or(ActionError::InvalidState)?;
        if self.money < *bet {
            return Err(ActionError::InsufficientFunds);
        }

        self.money -= *bet;
        *bet *= 2;
        Ok(*bet)
    }

    /// Inserts a copy of the hand's wager right after it and deducts it.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand has no wager or the bankroll does not cover it.
    pub fn split_bet(&mut self, hand_index: usize) -> Result<usize, ActionError> {
        let bet = self.bet(hand_index).ok_or(ActionError::InvalidState)?;
        if self.money < bet {
            return Err(ActionError::InsufficientFunds);
        }

        self.money -= bet;
        self.bets.insert(hand_index + 1, bet);
        Ok(bet)
    }

    /// Credits a payout to the bankroll. Losses credit nothing.
    pub const fn settle(&mut self, payout: usize) {
        self.money += payout;
    }

    /// Returns whether the selected bet can move up by `step`.
    #[must_use]
    pub const fn can_increase_bet(&self, step: usize) -> bool {
        match self.current_bet.checked_add(step) {
            Some(raised) => step > 0 && self.money >= raised,
            None => false,
        }
    }

    /// Returns whether the selected bet can move down by `step` and stay at or above `min_bet`.
    #[must_use]
    pub const fn can_decrease_bet(&self, step: usize, min_bet: usize) -> bool {
        match min_bet.checked_add(step) {
            Some(floor) => step > 0 && self.current_bet >= floor,
            None => false,
        }
    }

    /// Raises the selected bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the bankroll does not cover the raised bet.
    pub const fn increase_bet(&mut self, step: usize) -> Result<usize, BetError> {
        if step == 0 {
            return Err(BetError::ZeroBet);
        }
        if !self.can_increase_bet(step) {
            return Err(BetError::InsufficientFunds);
        }

        self.current_bet += step;
        Ok(self.current_bet)
    }

    /// Lowers the selected bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the lowered bet would fall below `min_bet`.
    pub const fn decrease_bet(&mut self, step: usize, min_bet: usize) -> Result<usize, BetError> {
        if step == 0 {
            return Err(BetError::ZeroBet);
        }
        if !self.can_decrease_bet(step, min_bet) {
            return Err(BetError::BelowMinimum);
        }

        self.current_bet -= step;
        Ok(self.current_bet)
    }
}
