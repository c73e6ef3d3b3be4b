// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards notation parser.
//!
//! Cards are written as a rank followed by a suit, ranks are `2`..`9`, `10`,
//! `J`, `Q`, `K`, and `A` or `1` for the ace, suits are `C`, `D`, `H`, `S`.
//! Cards may be separated by white space, for example `"KS QS"` or `"10D JD"`.
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Error returned when parsing cards from a string.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// An illegal character at the given offset.
    #[error("parse error at character {offset}: unexpected '{found}'")]
    UnexpectedChar {
        /// The zero based character offset.
        offset: usize,
        /// The illegal character.
        found: char,
    },
    /// The input ended in the middle of a card.
    #[error("parse error at character {offset}: incomplete card")]
    UnexpectedEnd {
        /// The input length in characters.
        offset: usize,
    },
}

impl ParseError {
    /// The offset of the character that caused the error.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedChar { offset, .. } => *offset,
            ParseError::UnexpectedEnd { offset } => *offset,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum State {
    /// Expecting a rank or white space.
    Rank,
    /// Saw a `1`, next is either `0` for a ten or a suit for an ace.
    One,
    /// Got the rank, expecting a suit.
    Suit(Rank),
}

/// Parses a sequence of cards.
pub(crate) fn parse_cards(s: &str) -> Result<Vec<Card>, ParseError> {
    let mut cards = Vec::new();
    let mut state = State::Rank;
    let mut len = 0;

    for (offset, c) in s.chars().enumerate() {
        len = offset + 1;
        let unexpected = ParseError::UnexpectedChar { offset, found: c };

        state = match state {
            State::Rank => match c {
                c if c.is_whitespace() => State::Rank,
                '1' => State::One,
                '2'..='9' => {
                    let value = c as u8 - b'0';
                    State::Suit(Rank::from_value(value).ok_or(unexpected)?)
                }
                'J' => State::Suit(Rank::Jack),
                'Q' => State::Suit(Rank::Queen),
                'K' => State::Suit(Rank::King),
                'A' => State::Suit(Rank::Ace),
                _ => return Err(unexpected),
            },
            State::One => match c {
                '0' => State::Suit(Rank::Ten),
                c => {
                    cards.push(Card::new(Rank::Ace, parse_suit(c).ok_or(unexpected)?));
                    State::Rank
                }
            },
            State::Suit(rank) => {
                cards.push(Card::new(rank, parse_suit(c).ok_or(unexpected)?));
                State::Rank
            }
        };
    }

    match state {
        State::Rank => Ok(cards),
        _ => Err(ParseError::UnexpectedEnd { offset: len }),
    }
}

fn parse_suit(c: char) -> Option<Suit> {
    match c {
        'C' => Some(Suit::Clubs),
        'D' => Some(Suit::Diamonds),
        'H' => Some(Suit::Hearts),
        'S' => Some(Suit::Spades),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_cards() {
        let cards = parse_cards("KS QS").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::King, Suit::Spades),
                Card::new(Rank::Queen, Suit::Spades)
            ]
        );

        let cards = parse_cards("  10D\tJH 2C 9S  ").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ten, Suit::Diamonds),
                Card::new(Rank::Jack, Suit::Hearts),
                Card::new(Rank::Deuce, Suit::Clubs),
                Card::new(Rank::Nine, Suit::Spades),
            ]
        );

        // Separators are optional.
        assert_eq!(parse_cards("AC10C").unwrap().len(), 2);
        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards("   ").unwrap().is_empty());
    }

    #[test]
    fn parse_aces() {
        let ace = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(parse_cards("AH").unwrap(), vec![ace]);
        assert_eq!(parse_cards("1H").unwrap(), vec![ace]);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            parse_cards("KS XS"),
            Err(ParseError::UnexpectedChar {
                offset: 3,
                found: 'X'
            })
        );

        assert_eq!(
            parse_cards("KX"),
            Err(ParseError::UnexpectedChar {
                offset: 1,
                found: 'X'
            })
        );

        // A rank must be followed by its suit.
        assert_eq!(parse_cards("K S").unwrap_err().offset(), 1);
        assert_eq!(parse_cards("11S").unwrap_err().offset(), 1);
        assert_eq!(parse_cards("ks").unwrap_err().offset(), 0);

        assert_eq!(
            parse_cards("KS Q"),
            Err(ParseError::UnexpectedEnd { offset: 4 })
        );
        assert_eq!(parse_cards("10").unwrap_err().offset(), 2);
    }
}
