//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{DealerHand, Hand, HandStatus};
use crate::ledger::Ledger;
use crate::options::GameOptions;
use crate::result::{HandResult, RoundResult};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{DealerStep, GameState, TableSnapshot};

/// A single-player blackjack table that manages the bankroll and round flow.
///
/// The game owns the deck, the ledger, and every hand; they change only
/// through the command methods. Use [`GameOptions`] to configure the
/// bankroll, bet sizes, split limit, and dealer rules.
#[derive(Debug, Clone)]
pub struct Game {
    /// Table options.
    pub options: GameOptions,
    /// Cards left for the current round.
    deck: Deck,
    /// Current game state.
    state: GameState,
    /// Bankroll and wagers.
    ledger: Ledger,
    /// Player hands (more than one after a split).
    hands: Vec<Hand>,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    /// Index of the hand being played.
    current_hand: usize,
    /// Status line for the player.
    message: String,
    /// Result of the last finished round.
    last_result: Option<RoundResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.money(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let ledger = Ledger::new(options.starting_money, options.default_bet);

        Self {
            options,
            deck: Deck::new(),
            state: GameState::Betting,
            ledger,
            hands: Vec::new(),
            dealer_hand: DealerHand::new(),
            current_hand: 0,
            message: String::new(),
            last_result: None,
            rng,
        }
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.draw()
    }

    fn current_hand_inactive(&self) -> bool {
        self.hands
            .get(self.current_hand)
            .is_some_and(|hand| hand.status() != HandStatus::Active)
    }

    fn advance_if_current_inactive(&mut self) {
        if self.current_hand_inactive() {
            self.advance_to_next_active_hand();
        }
    }

    /// Moves to the next active hand, or hands the table to the dealer.
    fn advance_to_next_active_hand(&mut self) {
        let next = self
            .hands
            .iter()
            .enumerate()
            .skip(self.current_hand + 1)
            .find(|(_, hand)| hand.status() == HandStatus::Active)
            .map(|(index, _)| index);

        match next {
            Some(index) => {
                self.current_hand = index;
                self.message = alloc::format!("Playing hand {}", index + 1);
                debug!("playing hand {}", index + 1);
            }
            None => self.enter_dealer_turn(),
        }
    }

    fn enter_dealer_turn(&mut self) {
        self.state = GameState::DealerTurn;
        self.message = String::from("Dealer's turn");
        if self.dealer_hand.reveal_hole() {
            if let Some(card) = self.dealer_hand.hole_card() {
                debug!("dealer reveals hole card {card}");
            }
        }
    }

    fn finish_round(&mut self, hands: Vec<HandResult>) {
        let result = RoundResult::new(
            hands,
            self.dealer_hand.value(),
            self.dealer_hand.is_blackjack(),
        );
        info!(
            "round over: dealer {}, payout {}, net {}, bankroll {}",
            result.dealer_value,
            result.total_payout,
            result.net,
            self.ledger.money()
        );
        self.last_result = Some(result);
        self.state = GameState::GameOver;
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the status line for the player.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the bankroll not currently wagered.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.ledger.money()
    }

    /// Returns the bet selected for the next round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.ledger.current_bet()
    }

    /// Returns the wager on each player hand.
    #[must_use]
    pub fn bets(&self) -> &[usize] {
        self.ledger.bets()
    }

    /// Returns the ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the player hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the index of the hand being played.
    #[must_use]
    pub const fn current_hand_index(&self) -> usize {
        self.current_hand
    }

    /// Returns the hand being played, if any.
    #[must_use]
    pub fn current_hand(&self) -> Option<&Hand> {
        self.hands.get(self.current_hand)
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the number of cards remaining in the deck.
    ///
    /// Reads 52 before the first deal; every round deals from a fresh deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the result of the last finished round.
    ///
    /// Cleared when a new round is dealt.
    #[must_use]
    pub const fn round_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns an owned copy of the table for rendering.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            state: self.state,
            message: self.message.clone(),
            money: self.ledger.money(),
            current_bet: self.ledger.current_bet(),
            bets: self.ledger.bets().to_vec(),
            dealer: self.dealer_hand.clone(),
            hands: self.hands.clone(),
            current_hand: self.current_hand,
            cards_remaining: self.deck.len(),
        }
    }
}
