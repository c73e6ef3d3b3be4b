// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::Serialize;
use std::fmt;

/// A Poker card.
///
/// Cards order by suit first and by rank second, use [CardSet::sorted_by_value]
/// to get cards of the same rank next to each other.
///
/// [CardSet::sorted_by_value]: crate::CardSet::sorted_by_value
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { suit, rank }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card face value, 2 for a deuce up to 14 for an ace.
    #[inline]
    pub fn value(&self) -> u8 {
        self.rank as u8
    }

    /// The position of this card in the canonical deck order, that sorts cards
    /// by value first and suit second.
    #[inline]
    pub fn index(&self) -> usize {
        (self.value() as usize - 2) * 4 + self.suit as usize
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Card rank, the discriminant is the card face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Returns the rank for a face value in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ranks().find(|r| *r as u8 == value)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Suit {
    /// Diamonds suit.
    Diamonds = 0,
    /// Clubs suit.
    Clubs,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10H");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_values() {
        assert_eq!(Card::new(Rank::Deuce, Suit::Clubs).value(), 2);
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).value(), 10);
        assert_eq!(Card::new(Rank::Jack, Suit::Clubs).value(), 11);
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).value(), 14);

        for r in Rank::ranks() {
            assert_eq!(Rank::from_value(r as u8), Some(r));
        }
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn card_order_is_suit_then_rank() {
        let two_spades = Card::new(Rank::Deuce, Suit::Spades);
        let ace_diamonds = Card::new(Rank::Ace, Suit::Diamonds);
        let king_diamonds = Card::new(Rank::King, Suit::Diamonds);

        assert!(ace_diamonds < two_spades);
        assert!(king_diamonds < ace_diamonds);
        assert_eq!(two_spades, Card::new(Rank::Deuce, Suit::Spades));
    }

    #[test]
    fn card_index_is_unique() {
        let indices = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s).index()))
            .collect::<HashSet<_>>();
        assert_eq!(indices.len(), 52);
        assert!(indices.iter().all(|&i| i < 52));

        assert_eq!(Card::new(Rank::Deuce, Suit::Diamonds).index(), 0);
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).index(), 51);
    }
}
