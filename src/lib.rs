//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the deck, the bankroll, and
//! every hand on the table, and walks a round through betting, player turns,
//! dealer play, and resolution. Renderers read a [`TableSnapshot`] and call
//! the command methods; no rendering or timing lives here.
//!
//! # Example
//!
//! ```
//! use tablejack::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.new_round(100).unwrap();
//!
//! while game.state() == GameState::PlayerTurn {
//!     game.stand().unwrap();
//! }
//! if game.state() == GameState::DealerTurn {
//!     game.dealer_play().unwrap();
//! }
//! assert_eq!(game.state(), GameState::GameOver);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod resolve;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError, DealerError};
pub use game::{DealerStep, Game, GameState, TableSnapshot};
pub use hand::{DealerHand, Hand, HandStatus, hand_value};
pub use ledger::Ledger;
pub use options::{GameOptions, RoundingMode};
pub use result::{HandOutcome, HandResult, RoundResult};
