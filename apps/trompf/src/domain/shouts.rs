//! Shouts: holding both the Three and the Four of one suit.

use std::fmt;

use serde::Serialize;

use crate::domain::seats::Seat;
use crate::domain::{Card, Rank, Suit};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShoutKind {
    /// Three and Four of a non-trump suit.
    Small,
    /// Three and Four of the trump suit.
    Big,
}

impl ShoutKind {
    pub const fn points(self) -> u16 {
        match self {
            ShoutKind::Small => 20,
            ShoutKind::Big => 40,
        }
    }
}

/// A declared shout, owned by the seat that held it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Shout {
    pub kind: ShoutKind,
    pub suit: Suit,
    pub cards: [Card; 2],
    pub seat: Seat,
}

impl Shout {
    pub fn points(&self) -> u16 {
        self.kind.points()
    }
}

impl fmt::Display for Shout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind {
            ShoutKind::Big => "BIG SHOUT (40p)",
            ShoutKind::Small => "SMALL SHOUT (20p)",
        };
        write!(f, "{name}: {}, {}", self.cards[0], self.cards[1])
    }
}

/// Every suit in `hand` holding both Three and Four yields one shout.
pub fn detect_shouts(hand: &[Card], trump: Suit, seat: Seat) -> Vec<Shout> {
    Suit::ALL
        .iter()
        .filter_map(|&suit| {
            let three = Card::new(suit, Rank::Three);
            let four = Card::new(suit, Rank::Four);
            if !(hand.contains(&three) && hand.contains(&four)) {
                return None;
            }
            let kind = if suit == trump {
                ShoutKind::Big
            } else {
                ShoutKind::Small
            };
            Some(Shout {
                kind,
                suit,
                cards: [three, four],
                seat,
            })
        })
        .collect()
}
