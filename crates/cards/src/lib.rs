// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Outs Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use outs_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah.value() > kd.value());
//! ```
//!
//! a [CardSet] type that parses the cards notation used on the command line:
//!
//! ```
//! # use outs_cards::{CardSet, Rank};
//! let hole: CardSet = "KS QS".parse().unwrap();
//! assert_eq!(hole.len(), 2);
//! assert_eq!(hole[0].rank(), Rank::King);
//! assert!(hole.find_duplicate().is_none());
//! ```
//!
//! and a [DeckPool] type for indexing the cards that have not been dealt:
//!
//! ```
//! # use outs_cards::{Card, DeckPool, Rank, Suit};
//! let mut pool = DeckPool::full();
//! pool.withdraw(Card::new(Rank::Deuce, Suit::Diamonds));
//! assert_eq!(pool.len(), 51);
//! assert_eq!(pool.get(0), Card::new(Rank::Deuce, Suit::Clubs));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Rank, Suit};

mod parse;
pub use parse::ParseError;

mod pool;
pub use pool::DeckPool;

mod set;
pub use set::{CardSet, sort_by_value};
