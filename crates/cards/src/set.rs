// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! An ordered collection of cards.
use serde::Serialize;
use std::{fmt, ops, str::FromStr};

use crate::{Card, ParseError, parse::parse_cards};

/// An ordered sequence of cards.
///
/// A set doesn't check for duplicates when cards are added, use
/// [CardSet::find_duplicate] to validate cards coming from the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CardSet(Vec<Card>);

impl CardSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first card that appears more than once.
    pub fn find_duplicate(&self) -> Option<Card> {
        self.0
            .iter()
            .enumerate()
            .find(|&(i, c)| self.0[i + 1..].contains(c))
            .map(|(_, c)| *c)
    }

    /// Returns a copy of this set sorted by value first and suit second.
    pub fn sorted_by_value(&self) -> CardSet {
        let mut cards = self.0.clone();
        sort_by_value(&mut cards);
        CardSet(cards)
    }
}

/// Sorts cards by value first and suit second.
pub fn sort_by_value(cards: &mut [Card]) {
    cards.sort_by_key(|c| (c.value(), c.suit()));
}

impl ops::Deref for CardSet {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Card>> for CardSet {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Card> for CardSet {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for CardSet {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for CardSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cards(s).map(CardSet)
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}
