//! Table configuration options.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use tablejack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_money(500)
///     .with_bet_step(5)
///     .with_split_aces_receive_one_card(true);
/// assert_eq!(options.starting_money, 500);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Bankroll at the start of the session.
    pub starting_money: usize,
    /// Bet selected when the session starts.
    pub default_bet: usize,
    /// Amount the bet moves by on increase or decrease.
    pub bet_step: usize,
    /// Smallest bet the table accepts.
    pub min_bet: usize,
    /// Maximum number of player hands, counting splits.
    pub max_hands: usize,
    /// Dealer draws below this total.
    pub dealer_stands_on: u8,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Whether split aces receive only one card each and stand.
    pub split_aces_receive_one_card: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_money: 1000,
            default_bet: 100,
            bet_step: 10,
            min_bet: 10,
            max_hands: 4,
            dealer_stands_on: 17,
            stand_on_soft_17: true,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            split_aces_receive_one_card: false,
        }
    }
}

impl GameOptions {
    /// Sets the starting bankroll.
    #[must_use]
    pub const fn with_starting_money(mut self, money: usize) -> Self {
        self.starting_money = money;
        self
    }

    /// Sets the bet selected at session start.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::GameOptions;
    ///
    /// let options = GameOptions::default().with_default_bet(25);
    /// assert_eq!(options.default_bet, 25);
    /// ```
    #[must_use]
    pub const fn with_default_bet(mut self, bet: usize) -> Self {
        self.default_bet = bet;
        self
    }

    /// Sets the bet step.
    #[must_use]
    pub const fn with_bet_step(mut self, step: usize) -> Self {
        self.bet_step = step;
        self
    }

    /// Sets the table minimum.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the maximum number of player hands.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_hands(2);
    /// assert_eq!(options.max_hands, 2);
    /// ```
    #[must_use]
    pub const fn with_max_hands(mut self, max_hands: usize) -> Self {
        self.max_hands = max_hands;
        self
    }

    /// Sets the total the dealer stands on.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the blackjack payout ratio.
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets whether split aces receive only one card.
    #[must_use]
    pub const fn with_split_aces_receive_one_card(mut self, one_card: bool) -> Self {
        self.split_aces_receive_one_card = one_card;
        self
    }
}
