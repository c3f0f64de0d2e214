//! A single-deck blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time: betting,
//! player actions (hit, stand, double down, split), dealer play and payout.
//! Settled rounds are folded into the player's [`Statistics`], and a
//! [`Session`] ties a game to a [`ProfileStore`] that keeps the player's
//! balance and statistics between sessions.
//!
//! # Example
//!
//! ```
//! use bjtable::{Game, GameState, PlayerProfile, TableOptions};
//!
//! let mut game = Game::new(PlayerProfile::new(100), TableOptions::default(), 42);
//! let settled = game.start_round(10).unwrap();
//! if settled.is_none() {
//!     let result = game.stand().unwrap().unwrap();
//!     assert_eq!(game.state(), GameState::Settled);
//!     assert_eq!(game.balance(), result.balance);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod payout;
pub mod profile;
pub mod result;
pub mod session;
pub mod shoe;
pub mod stats;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Suit};
pub use error::{ActionError, BetError, ShoeError, StoreError};
pub use game::{Game, GameState, HISTORY_LIMIT, HandView, TableSnapshot};
pub use hand::{DealerHand, Hand};
pub use options::TableOptions;
pub use profile::{MemoryStore, PlayerProfile, ProfileRecord, ProfileStore};
pub use result::{HandOutcome, HandResult, RoundResult, RoundSummary};
pub use session::Session;
pub use shoe::Shoe;
pub use stats::Statistics;
