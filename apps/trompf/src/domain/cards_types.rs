//! Core card-related types: Card, Rank, Suit

use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Red,
    Hearts,
    Green,
    Acorns,
}

impl Suit {
    /// Deck-building order; also the seat order of the shout-guaranteed deal.
    pub const ALL: [Suit; 4] = [Suit::Red, Suit::Hearts, Suit::Green, Suit::Acorns];
}

/// Ranks in "beats" order: Two < Three < Four < Nine < Ten < Ace.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Nine,
    Ten,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 6] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Nine,
        Rank::Ten,
        Rank::Ace,
    ];

    /// Small-point weight. Nine ranks between Four and Ten but is worth nothing.
    pub const fn small_points(self) -> u16 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Nine => 0,
            Rank::Ten => 10,
            Rank::Ace => 11,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn small_points(self) -> u16 {
        self.rank.small_points()
    }
}

// Note: Ord on Card is only for stable sorting: suit order R<H<G<A then rank order.
// Do not use for trick resolution; that depends on trump and lead.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Red => "Red",
            Suit::Hearts => "Hearts",
            Suit::Green => "Green",
            Suit::Acorns => "Acorns",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Ace => "Ace",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
