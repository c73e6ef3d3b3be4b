// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Outs Poker hands odds calculator.
//!
//! Given the hole cards and the board cards, the calculator enumerates all the
//! ways the board can be completed, finds the best five cards hand for each
//! seven cards spread, and counts how many times each hand category shows up:
//!
//! ```
//! # use outs_eval::*;
//! let hole: CardSet = "AS KS".parse().unwrap();
//! let board: CardSet = "QS JS 2D 3C".parse().unwrap();
//!
//! let config = OddsConfig { workers: 2, ..Default::default() };
//! let histogram = OddsCalculator::new(&hole, &board, config)
//!     .and_then(|calc| calc.run())
//!     .unwrap();
//!
//! assert_eq!(histogram.total(), 46);
//! assert_eq!(histogram.count(HandRank::Flush), 8);
//! ```
//!
//! The spreads are distributed round robin to worker threads, each worker
//! keeps its own [HandHistogram] that is merged once all the spreads have been
//! sent. Hands can also be classified directly:
//!
//! ```
//! # use outs_eval::*;
//! let cards: CardSet = "10H 8D 10D 8C 4D".parse().unwrap();
//! let hand = Hand::classify(&cards);
//! assert_eq!(hand.rank(), HandRank::TwoPair);
//! assert_eq!(hand.values(), [Some(Rank::Ten), Some(Rank::Eight)]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod combinations;
pub use combinations::{Combinations, num_combinations};

mod hand;
pub use hand::{Hand, HandRank};

mod histogram;
pub use histogram::HandHistogram;

mod odds;
pub use odds::{BOARD_SIZES, HOLE_SIZE, OddsCalculator, OddsConfig, OddsError};

pub mod spread;
pub use spread::SpreadWorker;

// Reexport cards types.
pub use outs_cards::{Card, CardSet, DeckPool, ParseError, Rank, Suit};
