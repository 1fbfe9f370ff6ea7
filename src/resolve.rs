//! Outcome resolution and payout arithmetic.
//!
//! These functions are pure; [`Game`](crate::Game) applies their results to
//! the ledger.

use crate::options::RoundingMode;
use crate::result::HandOutcome;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Compares a finished hand against the dealer's final total.
///
/// ```
/// use tablejack::HandOutcome;
/// use tablejack::resolve::resolve_hand;
///
/// assert_eq!(resolve_hand(20, 22), HandOutcome::Win);
/// assert_eq!(resolve_hand(22, 22), HandOutcome::Bust);
/// assert_eq!(resolve_hand(18, 18), HandOutcome::Push);
/// ```
#[must_use]
pub const fn resolve_hand(player_value: u8, dealer_value: u8) -> HandOutcome {
    if player_value > 21 {
        HandOutcome::Bust
    } else if dealer_value > 21 || player_value > dealer_value {
        HandOutcome::Win
    } else if player_value == dealer_value {
        HandOutcome::Push
    } else {
        HandOutcome::Lose
    }
}

/// Returns the amount credited for a hand whose wager was already deducted.
///
/// Wins return the wager plus an equal profit, pushes return the wager,
/// blackjacks return the wager plus `blackjack_pays` times it.
#[must_use]
pub fn payout(outcome: HandOutcome, bet: usize, blackjack_pays: f64, rounding: RoundingMode) -> usize {
    match outcome {
        HandOutcome::Win => bet * 2,
        HandOutcome::Push => bet,
        HandOutcome::Blackjack => {
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for monetary values"
            )]
            let bonus = round_amount((bet as f64) * blackjack_pays, rounding);
            bet + bonus
        }
        HandOutcome::Lose | HandOutcome::Bust => 0,
    }
}

/// Returns the message fragment shown for one hand (hand numbers start at 1).
#[must_use]
pub const fn outcome_label(outcome: HandOutcome, dealer_bust: bool) -> &'static str {
    match outcome {
        HandOutcome::Bust => ": Bust.",
        HandOutcome::Win if dealer_bust => " wins (dealer busts).",
        HandOutcome::Win => " wins.",
        HandOutcome::Push => ": Push.",
        HandOutcome::Lose => " loses.",
        HandOutcome::Blackjack => ": Blackjack!",
    }
}
