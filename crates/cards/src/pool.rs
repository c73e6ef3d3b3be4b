// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The pool of cards that can still be dealt.
use std::sync::{Arc, LazyLock};

use crate::{Card, Rank, Suit};

/// The 52 cards sorted by value and suit, shared by all pools.
static FULL_DECK: LazyLock<Arc<[Card]>> = LazyLock::new(|| {
    Rank::ranks()
        .flat_map(|r| Suit::suits().map(move |s| Card::new(r, s)))
        .collect()
});

/// A 52 cards deck with some cards withdrawn.
///
/// Withdrawn cards are only marked as removed, the cards array is shared
/// between clones so that cloning a pool costs as much as the number of
/// withdrawn cards. Cards in the pool are sorted by value first and suit
/// second, [DeckPool::get] returns the nth card in this order skipping
/// withdrawn cards.
#[derive(Debug, Clone)]
pub struct DeckPool {
    cards: Arc<[Card]>,
    /// Sorted indices of the withdrawn cards.
    withdrawn: Vec<u8>,
}

impl DeckPool {
    /// The number of cards in a full pool.
    pub const SIZE: usize = 52;

    /// Creates a pool with all the 52 cards.
    pub fn full() -> Self {
        Self {
            cards: FULL_DECK.clone(),
            withdrawn: Vec::new(),
        }
    }

    /// Removes a card from the pool.
    ///
    /// Panics if the card has already been withdrawn.
    pub fn withdraw(&mut self, card: Card) {
        let idx = card.index() as u8;
        match self.withdrawn.binary_search(&idx) {
            Ok(_) => panic!("tried to withdraw {card} but the pool doesn't contain it"),
            Err(pos) => self.withdrawn.insert(pos, idx),
        }
    }

    /// Checks if a card is in the pool.
    pub fn contains(&self, card: Card) -> bool {
        self.withdrawn.binary_search(&(card.index() as u8)).is_err()
    }

    /// Number of cards in the pool.
    pub fn len(&self) -> usize {
        Self::SIZE - self.withdrawn.len()
    }

    /// Checks if all cards have been withdrawn.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the nth card that has not been withdrawn.
    ///
    /// Panics if `n >= self.len()`.
    pub fn get(&self, n: usize) -> Card {
        assert!(n < self.len(), "index {n} out of range for pool of {}", self.len());

        let mut idx = n;
        for &w in &self.withdrawn {
            if w as usize <= idx {
                idx += 1;
            } else {
                break;
            }
        }

        self.cards[idx]
    }

    /// Iterates the cards in the pool.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(|c| self.contains(*c))
    }

    /// Returns the cards in the pool, use this to get constant time access
    /// once all withdrawals are done.
    pub fn remaining(&self) -> Vec<Card> {
        self.iter().collect()
    }
}

impl Default for DeckPool {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::prelude::*;

    #[test]
    fn full_pool() {
        let pool = DeckPool::full();
        assert_eq!(pool.len(), DeckPool::SIZE);

        let cards = pool.iter().collect::<HashSet<_>>();
        assert_eq!(cards.len(), DeckPool::SIZE);

        for n in 0..pool.len() {
            assert_eq!(pool.get(n).index(), n);
        }

        // Canonical order is value first.
        assert_eq!(pool.get(0), Card::new(Rank::Deuce, Suit::Diamonds));
        assert_eq!(pool.get(1), Card::new(Rank::Deuce, Suit::Clubs));
        assert_eq!(pool.get(4), Card::new(Rank::Trey, Suit::Diamonds));
        assert_eq!(pool.get(51), Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn withdraw_skips_cards() {
        let mut pool = DeckPool::full();
        let two_clubs = Card::new(Rank::Deuce, Suit::Clubs);
        let ace_spades = Card::new(Rank::Ace, Suit::Spades);

        pool.withdraw(two_clubs);
        pool.withdraw(ace_spades);
        assert_eq!(pool.len(), 50);
        assert!(!pool.contains(two_clubs));
        assert!(!pool.contains(ace_spades));

        assert_eq!(pool.get(0), Card::new(Rank::Deuce, Suit::Diamonds));
        assert_eq!(pool.get(1), Card::new(Rank::Deuce, Suit::Hearts));
        assert_eq!(pool.get(49), Card::new(Rank::Ace, Suit::Hearts));
    }

    #[test]
    fn get_matches_remaining() {
        let mut rng = rand::rng();
        let mut pool = DeckPool::full();

        let withdrawn = DeckPool::full()
            .remaining()
            .choose_multiple(&mut rng, 7)
            .copied()
            .collect::<Vec<_>>();
        for c in &withdrawn {
            pool.withdraw(*c);
        }

        let remaining = pool.remaining();
        assert_eq!(remaining.len(), 45);
        assert!(remaining.windows(2).all(|w| w[0].index() < w[1].index()));
        assert!(withdrawn.iter().all(|c| !remaining.contains(c)));

        for (n, card) in remaining.iter().enumerate() {
            assert_eq!(pool.get(n), *card);
        }
    }

    #[test]
    fn clones_are_independent() {
        let mut pool = DeckPool::full();
        pool.withdraw(Card::new(Rank::King, Suit::Hearts));

        let mut other = pool.clone();
        other.withdraw(Card::new(Rank::Queen, Suit::Hearts));

        assert_eq!(pool.len(), 51);
        assert_eq!(other.len(), 50);
        assert!(pool.contains(Card::new(Rank::Queen, Suit::Hearts)));
        assert!(Arc::ptr_eq(&pool.cards, &other.cards));
    }

    #[test]
    #[should_panic(expected = "doesn't contain")]
    fn withdraw_twice_panics() {
        let mut pool = DeckPool::full();
        pool.withdraw(Card::new(Rank::Five, Suit::Diamonds));
        pool.withdraw(Card::new(Rank::Five, Suit::Diamonds));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_out_of_range_panics() {
        let mut pool = DeckPool::full();
        pool.withdraw(Card::new(Rank::Five, Suit::Diamonds));
        pool.get(51);
    }
}
