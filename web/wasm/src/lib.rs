use serde::Serialize;
use tablejack::{
    Card, DealerHand, DealerStep, Game, GameOptions, GameState, Hand, HandOutcome, HandResult,
    HandStatus, RoundResult,
};
use wasm_bindgen::prelude::*;

/// Table handle for a JavaScript renderer (WebGL scene or 2D canvas).
///
/// The renderer polls `snapshot()` after every command and drives the
/// dealer with `dealer_step()` from its own timer.
#[wasm_bindgen]
pub struct WasmTable {
    game: Game,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    pub fn new_round(&mut self, bet: u32) -> Result<(), JsValue> {
        self.game.new_round(bet as usize).map_err(js_err)
    }

    pub fn rebet(&mut self) -> Result<(), JsValue> {
        self.game.rebet().map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.game.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<(), JsValue> {
        self.game.stand().map_err(js_err)
    }

    pub fn double_down(&mut self) -> Result<(), JsValue> {
        self.game.double_down().map(|_| ()).map_err(js_err)
    }

    pub fn split(&mut self) -> Result<(), JsValue> {
        self.game.split().map_err(js_err)
    }

    pub fn increase_bet(&mut self, step: u32) -> Result<u32, JsValue> {
        self.game
            .increase_bet(step as usize)
            .map(|bet| bet as u32)
            .map_err(js_err)
    }

    pub fn decrease_bet(&mut self, step: u32) -> Result<u32, JsValue> {
        self.game
            .decrease_bet(step as usize)
            .map(|bet| bet as u32)
            .map_err(js_err)
    }

    /// Plays one dealer step: `{ kind: "draw", card }` or `{ kind: "stand", value }`.
    pub fn dealer_step(&mut self) -> Result<JsValue, JsValue> {
        let step = match self.game.dealer_step().map_err(js_err)? {
            DealerStep::Draw(card) => JsDealerStep {
                kind: "draw",
                card: Some(card_to_js(card)),
                value: self.game.dealer_hand().value(),
            },
            DealerStep::Stand(value) => JsDealerStep {
                kind: "stand",
                card: None,
                value,
            },
        };
        to_js_value(&step)
    }

    pub fn dealer_play(&mut self) -> Result<(), JsValue> {
        self.game.dealer_play().map(|_| ()).map_err(js_err)
    }

    pub fn round_result(&self) -> Result<JsValue, JsValue> {
        match self.game.round_result() {
            Some(result) => to_js_value(&JsRoundResult::from(result)),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let game = &self.game;
        let bets = game.bets();

        let snapshot = Snapshot {
            state: state_to_str(game.state()),
            message: game.message(),
            money: game.money() as u32,
            current_bet: game.current_bet() as u32,
            bets: bets.iter().map(|bet| *bet as u32).collect(),
            hands: game
                .hands()
                .iter()
                .enumerate()
                .map(|(index, hand)| {
                    JsHand::from_hand(index as u32, hand, bets.get(index).copied().unwrap_or(0))
                })
                .collect(),
            dealer: JsDealer::from(game.dealer_hand()),
            current_hand: game.current_hand_index() as u32,
            cards_remaining: game.cards_remaining() as u32,
            actions: JsActions {
                hit: game.can_hit(),
                stand: game.can_stand(),
                double: game.can_double(),
                split: game.can_split(),
                new_round: game.can_start_round(),
                increase_bet: game.can_increase_bet(game.options.bet_step),
                decrease_bet: game.can_decrease_bet(game.options.bet_step),
            },
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    state: &'static str,
    message: &'a str,
    money: u32,
    current_bet: u32,
    bets: Vec<u32>,
    hands: Vec<JsHand>,
    dealer: JsDealer,
    current_hand: u32,
    cards_remaining: u32,
    actions: JsActions,
}

#[derive(Serialize)]
struct JsActions {
    hit: bool,
    stand: bool,
    double: bool,
    split: bool,
    new_round: bool,
    increase_bet: bool,
    decrease_bet: bool,
}

#[derive(Serialize)]
struct JsCard {
    id: u8,
    suit: char,
    rank: &'static str,
    red: bool,
    face_up: bool,
}

#[derive(Serialize)]
struct JsDealerStep {
    kind: &'static str,
    card: Option<JsCard>,
    value: u8,
}

#[derive(Serialize)]
struct JsHand {
    index: u32,
    cards: Vec<JsCard>,
    value: u8,
    is_soft: bool,
    status: &'static str,
    bet: u32,
    from_split: bool,
    doubled: bool,
}

impl JsHand {
    fn from_hand(index: u32, hand: &Hand, bet: usize) -> Self {
        Self {
            index,
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            value: hand.value(),
            is_soft: hand.is_soft(),
            status: hand_status_to_str(hand.status()),
            bet: bet as u32,
            from_split: hand.is_from_split(),
            doubled: hand.is_doubled(),
        }
    }
}

#[derive(Serialize)]
struct JsDealer {
    cards: Vec<JsCard>,
    visible_value: u8,
    hole_revealed: bool,
}

impl From<&DealerHand> for JsDealer {
    fn from(dealer: &DealerHand) -> Self {
        Self {
            cards: dealer.cards().iter().copied().map(card_to_js).collect(),
            visible_value: dealer.visible_value(),
            hole_revealed: dealer.is_hole_revealed(),
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    hands: Vec<JsHandResult>,
    dealer_value: u8,
    dealer_bust: bool,
    dealer_blackjack: bool,
    total_payout: u32,
    net: i32,
}

impl From<&RoundResult> for JsRoundResult {
    fn from(result: &RoundResult) -> Self {
        Self {
            hands: result.hands.iter().map(JsHandResult::from).collect(),
            dealer_value: result.dealer_value,
            dealer_bust: result.dealer_bust,
            dealer_blackjack: result.dealer_blackjack,
            total_payout: result.total_payout as u32,
            net: result.net as i32,
        }
    }
}

#[derive(Serialize)]
struct JsHandResult {
    hand_index: u32,
    outcome: &'static str,
    bet: u32,
    payout: u32,
    player_value: u8,
    dealer_value: u8,
}

impl From<&HandResult> for JsHandResult {
    fn from(result: &HandResult) -> Self {
        Self {
            hand_index: result.hand_index as u32,
            outcome: outcome_to_str(result.outcome),
            bet: result.bet as u32,
            payout: result.payout as u32,
            player_value: result.player_value,
            dealer_value: result.dealer_value,
        }
    }
}

// Face-down cards keep their id so the renderer can flip the same object later.
fn card_to_js(card: Card) -> JsCard {
    if card.face_up {
        JsCard {
            id: card.id(),
            suit: card.suit.symbol(),
            rank: card.rank_label(),
            red: card.suit.is_red(),
            face_up: true,
        }
    } else {
        JsCard {
            id: card.id(),
            suit: '?',
            rank: "?",
            red: false,
            face_up: false,
        }
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Betting => "betting",
        GameState::PlayerTurn => "playerTurn",
        GameState::DealerTurn => "dealerTurn",
        GameState::GameOver => "gameOver",
    }
}

fn hand_status_to_str(status: HandStatus) -> &'static str {
    match status {
        HandStatus::Active => "Active",
        HandStatus::Stand => "Stand",
        HandStatus::Bust => "Bust",
        HandStatus::Blackjack => "Blackjack",
    }
}

fn outcome_to_str(outcome: HandOutcome) -> &'static str {
    match outcome {
        HandOutcome::Win => "Win",
        HandOutcome::Lose => "Lose",
        HandOutcome::Bust => "Bust",
        HandOutcome::Push => "Push",
        HandOutcome::Blackjack => "Blackjack",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
