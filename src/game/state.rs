//! Game state types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{DealerHand, Hand};

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round dealt yet this session.
    Betting,
    /// Waiting for player actions on the current hand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been resolved.
    GameOver,
}

impl GameState {
    /// Returns whether a new round may be dealt from this state.
    #[must_use]
    pub const fn accepts_bets(self) -> bool {
        matches!(self, Self::Betting | Self::GameOver)
    }
}

/// One step of dealer play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer drew this card and may draw again.
    Draw(Card),
    /// The dealer stood on this total and the round was resolved.
    Stand(u8),
}

/// An owned copy of everything a renderer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    /// Current game state.
    pub state: GameState,
    /// Status line for the player.
    pub message: String,
    /// Bankroll not currently wagered.
    pub money: usize,
    /// Bet selected for the next round.
    pub current_bet: usize,
    /// Wager on each player hand.
    pub bets: Vec<usize>,
    /// Dealer hand, including face-down cards.
    pub dealer: DealerHand,
    /// Player hands in play order.
    pub hands: Vec<Hand>,
    /// Index of the hand being played.
    pub current_hand: usize,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}
