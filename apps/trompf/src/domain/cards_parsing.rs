//! Card parsing from short tokens (e.g., "AR", "3G", "TA")
//!
//! First character is the rank (`2 3 4 9 T A`), second the suit
//! (`R`ed, `H`earts, `G`reen, `A`corns).

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, InputKind};

fn parse_error(s: &str) -> DomainError {
    DomainError::input(InputKind::ParseCard, format!("Parse card: {s}"))
}

pub(crate) fn rank_char(rank: Rank) -> char {
    match rank {
        Rank::Two => '2',
        Rank::Three => '3',
        Rank::Four => '4',
        Rank::Nine => '9',
        Rank::Ten => 'T',
        Rank::Ace => 'A',
    }
}

pub(crate) fn suit_char(suit: Suit) -> char {
    match suit {
        Suit::Red => 'R',
        Suit::Hearts => 'H',
        Suit::Green => 'G',
        Suit::Acorns => 'A',
    }
}

impl Card {
    /// Two-character token accepted by `FromStr`.
    pub fn token(&self) -> String {
        let mut s = String::with_capacity(2);
        s.push(rank_char(self.rank));
        s.push(suit_char(self.suit));
        s
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(parse_error(s));
        };
        let rank = match rank_ch.to_ascii_uppercase() {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'A' => Rank::Ace,
            _ => return Err(parse_error(s)),
        };
        let suit = match suit_ch.to_ascii_uppercase() {
            'R' => Suit::Red,
            'H' => Suit::Hearts,
            'G' => Suit::Green,
            'A' => Suit::Acorns,
            _ => return Err(parse_error(s)),
        };
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
