// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
//!
//! A [Hand] is built from exactly five cards by [Hand::classify] that finds the
//! hand category and the values used to break ties between hands of the same
//! category, hands compare like they would at showdown:
//!
//! ```
//! # use outs_eval::{Hand, HandRank};
//! # use outs_cards::CardSet;
//! let flush = Hand::classify(&"8D KD 10D QD JD".parse::<CardSet>().unwrap());
//! let straight_flush = Hand::classify(&"8D 9D 10D QD JD".parse::<CardSet>().unwrap());
//! assert_eq!(flush.rank(), HandRank::Flush);
//! assert_eq!(straight_flush.rank(), HandRank::StraightFlush);
//! assert!(straight_flush > flush);
//! ```
use serde::Serialize;
use std::{cmp::Ordering, fmt};

use outs_cards::{Card, Rank, Suit, sort_by_value};

use crate::Combinations;

/// The category of a poker hand from the worst to the best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandRank {
    /// No combination.
    HighCard = 0,
    /// Two cards with the same value.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards with the same value.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards with the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same value.
    FourOfAKind,
    /// Five cards in sequence with the same suit.
    StraightFlush,
}

impl HandRank {
    /// The number of hand categories.
    pub const COUNT: usize = 9;

    /// Returns all the hand categories from the worst to the best.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category as used in a sentence, "a flush", "two pair".
    pub fn description(&self) -> &'static str {
        match self {
            HandRank::HighCard => "nothing",
            HandRank::OnePair => "a pair",
            HandRank::TwoPair => "two pair",
            HandRank::ThreeOfAKind => "three of a kind",
            HandRank::Straight => "a straight",
            HandRank::Flush => "a flush",
            HandRank::FullHouse => "a full house",
            HandRank::FourOfAKind => "four of a kind",
            HandRank::StraightFlush => "a straight flush",
        }
    }

    /// Checks if the cards outside the tie break values can decide between two
    /// hands of this category.
    fn has_kicker(&self) -> bool {
        !matches!(
            self,
            HandRank::FullHouse | HandRank::Straight | HandRank::StraightFlush
        )
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// A classified five cards hand.
#[derive(Debug, Clone, Copy)]
pub struct Hand {
    rank: HandRank,
    /// Values of the paired cards or the straight high card, best first.
    values: [Option<Rank>; 2],
    flush_suit: Option<Suit>,
    /// The hand cards sorted by value.
    cards: [Card; 5],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Classifies a five cards hand.
    ///
    /// Panics if `cards.len() != 5` or if more than four cards have the same
    /// value.
    pub fn classify(cards: &[Card]) -> Hand {
        let Ok(mut cards) = <[Card; Self::SIZE]>::try_from(cards) else {
            panic!("a hand must have {} cards, got {}", Self::SIZE, cards.len());
        };

        // Cards with the same value must be adjacent for the straight scan.
        sort_by_value(&mut cards);

        let mut value_counts = [0u8; 15];
        let mut suit_counts = [0u8; Suit::COUNT];
        for c in &cards {
            value_counts[c.value() as usize] += 1;
            suit_counts[c.suit() as usize] += 1;
        }

        let flush_suit = Suit::suits().find(|s| suit_counts[*s as usize] as usize == Self::SIZE);
        let straight_high = straight_high(&cards);

        let hand = |rank, values| Hand {
            rank,
            values,
            flush_suit,
            cards,
        };

        if let (Some(high), Some(_)) = (straight_high, flush_suit) {
            return hand(HandRank::StraightFlush, [Some(high), None]);
        }

        // Group values by count, higher values first.
        let mut quads = None;
        let mut trips = [None; 2];
        let mut pairs = [None; 2];
        for rank in Rank::ranks().rev() {
            match value_counts[rank as usize] {
                0 | 1 => {}
                2 => push_value(&mut pairs, rank),
                3 => push_value(&mut trips, rank),
                4 => quads = Some(rank),
                n => panic!("got {n} of a kind for value {rank} in hand {cards:?}"),
            }
        }

        if quads.is_some() {
            return hand(HandRank::FourOfAKind, [quads, None]);
        }

        match (trips, pairs) {
            ([Some(t1), Some(t2)], _) => return hand(HandRank::FullHouse, [Some(t1), Some(t2)]),
            ([Some(t), None], [Some(p), _]) => {
                return hand(HandRank::FullHouse, [Some(t), Some(p)]);
            }
            _ => {}
        }

        if flush_suit.is_some() {
            return hand(HandRank::Flush, [None, None]);
        }

        if let Some(high) = straight_high {
            return hand(HandRank::Straight, [Some(high), None]);
        }

        if trips[0].is_some() {
            return hand(HandRank::ThreeOfAKind, [trips[0], None]);
        }

        match pairs {
            [Some(_), Some(_)] => hand(HandRank::TwoPair, pairs),
            [Some(_), None] => hand(HandRank::OnePair, pairs),
            _ => hand(HandRank::HighCard, [None, None]),
        }
    }

    /// Returns the best hand made with five of the given cards.
    ///
    /// Panics if there are less than five cards.
    pub fn best_of(cards: &[Card]) -> Hand {
        assert!(cards.len() >= Self::SIZE, "need at least {} cards", Self::SIZE);

        let mut best: Option<Hand> = None;
        let mut hand_cards = [cards[0]; Self::SIZE];

        Combinations::new(cards.len(), Self::SIZE).for_each(|subset| {
            for (dst, &idx) in hand_cards.iter_mut().zip(subset) {
                *dst = cards[idx];
            }

            let hand = Hand::classify(&hand_cards);
            if best.is_none_or(|b| hand > b) {
                best = Some(hand);
            }
        });

        // There is at least one subset.
        best.unwrap_or_else(|| Hand::classify(&cards[..Self::SIZE]))
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie break values, for two pair the higher pair comes first, for a
    /// full house the three of a kind comes first.
    pub fn values(&self) -> [Option<Rank>; 2] {
        self.values
    }

    /// The suit of a flush or straight flush.
    pub fn flush_suit(&self) -> Option<Suit> {
        match self.rank {
            HandRank::Flush | HandRank::StraightFlush => self.flush_suit,
            _ => None,
        }
    }

    /// The hand cards sorted by value.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Compares two hands, this may return equal for hands with different
    /// cards like two flushes with the same values.
    pub fn compare(&self, other: &Hand) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then(self.values.cmp(&other.values))
            .then_with(|| {
                if self.rank.has_kicker() {
                    // Suits are ignored, only values matter.
                    let lhs = self.cards.iter().rev().map(Card::value);
                    let rhs = other.cards.iter().rev().map(Card::value);
                    lhs.cmp(rhs)
                } else {
                    Ordering::Equal
                }
            })
    }
}

/// Returns the high card of a straight or None if the cards are not a straight.
///
/// The cards must be sorted by value.
fn straight_high(cards: &[Card; Hand::SIZE]) -> Option<Rank> {
    let (mut prev, mut run, mut end) = (0, 0, 0);

    // An ace also plays as a one below the deuce.
    if cards[Hand::SIZE - 1].rank() == Rank::Ace {
        (prev, run, end) = (1, 1, 1);
    }

    for c in cards {
        let value = c.value();
        if value == prev + 1 {
            run += 1;
            end = value;
            if run >= Hand::SIZE {
                break;
            }
        } else if value != prev {
            run = 1;
            end = value;
        }

        prev = value;
    }

    if run >= Hand::SIZE {
        Rank::from_value(end)
    } else {
        None
    }
}

fn push_value(slots: &mut [Option<Rank>; 2], rank: Rank) {
    if let Some(slot) = slots.iter_mut().find(|s| s.is_none()) {
        *slot = Some(rank);
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = |idx: usize| {
            self.values[idx]
                .map(|r| r.to_string())
                .unwrap_or_default()
        };
        let suit = self.flush_suit.map(|s| s.to_string()).unwrap_or_default();

        match self.rank {
            HandRank::HighCard => write!(f, "high card")?,
            HandRank::OnePair => write!(f, "pair of {}", value(0))?,
            HandRank::TwoPair => write!(f, "two pair of {} and {}", value(0), value(1))?,
            HandRank::ThreeOfAKind => write!(f, "three of a kind of {}", value(0))?,
            HandRank::Straight => write!(f, "straight with high of {}", value(0))?,
            HandRank::Flush => write!(f, "flush in {suit}")?,
            HandRank::FullHouse => write!(f, "full house of {} full of {}", value(0), value(1))?,
            HandRank::FourOfAKind => write!(f, "four of a kind of {}", value(0))?,
            HandRank::StraightFlush => {
                write!(f, "straight flush with high of {} in {suit}", value(0))?
            }
        }

        write!(f, ", cards: ")?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}
