//! A blackjack round simulator.
//!
//! The crate plays one fixed player strategy (hit until the hand is worth at
//! least 16) against a dealer that draws until it matches or beats the
//! player. Rounds are dealt from a single shoe until it runs out, and the
//! [`Stats`] of the run are returned.
//!
//! # Example
//!
//! ```no_run
//! use bjsim::{Game, GameOptions};
//!
//! let options = GameOptions::default().with_decks(6);
//! let mut game = Game::new(options, 42);
//! let stats = game.run();
//! assert_eq!(stats.wins() + stats.losses() + stats.ties(), stats.rounds());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod stats;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::DealError;
pub use game::Game;
pub use hand::{BLACKJACK, Hand};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult};
pub use shoe::Shoe;
pub use stats::Stats;
pub use strategy::{Dealer, PLAYER_STANDS_ON, Player, Stop};
