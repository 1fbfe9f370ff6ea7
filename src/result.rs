//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

/// Result of a single hand after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Dealer has the higher value.
    Lose,
    /// Player busted.
    Bust,
    /// Push (tie).
    Push,
    /// Player has blackjack.
    Blackjack,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The wager on this hand.
    pub bet: usize,
    /// The amount credited back to the bankroll.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each hand.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Total credited to the bankroll.
    pub total_payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
}

impl RoundResult {
    pub(crate) fn new(hands: Vec<HandResult>, dealer_value: u8, dealer_blackjack: bool) -> Self {
        let total_payout: usize = hands.iter().map(|hand| hand.payout).sum();
        let total_bet: usize = hands.iter().map(|hand| hand.bet).sum();
        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = total_payout as isize - total_bet as isize;

        Self {
            hands,
            dealer_value,
            dealer_bust: dealer_value > 21,
            dealer_blackjack,
            total_payout,
            net,
        }
    }
}
