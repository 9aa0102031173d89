//! Seats' mutable state: hand, team, bid and declared shouts.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::seats::Seat;
use crate::domain::shouts::{detect_shouts, Shout};
use crate::domain::{hand_has_suit, Card, Suit};
use crate::errors::domain::{ConfigKind, DomainError, InvariantKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::One, Team::Two];

    pub const fn number(self) -> u8 {
        match self {
            Team::One => 1,
            Team::Two => 2,
        }
    }

    /// Index into per-team arrays.
    pub const fn index(self) -> usize {
        match self {
            Team::One => 0,
            Team::Two => 1,
        }
    }
}

impl TryFrom<u8> for Team {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Team::One),
            2 => Ok(Team::Two),
            other => Err(DomainError::config(
                ConfigKind::UnknownTeam,
                format!("Team must be 1 or 2, got {other}"),
            )),
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team {}", self.number())
    }
}

impl Serialize for Team {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.number())
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    team: Team,
    hand: Vec<Card>,
    bid: Option<u8>,
    shouts: Vec<Shout>,
}

impl Player {
    pub fn new(name: impl Into<String>, team: Team) -> Self {
        Self {
            name: name.into(),
            team,
            hand: Vec::new(),
            bid: None,
            shouts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn bid(&self) -> Option<u8> {
        self.bid
    }

    pub fn shouts(&self) -> &[Shout] {
        &self.shouts
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        hand_has_suit(&self.hand, suit)
    }

    pub fn shout_points(&self) -> u16 {
        self.shouts.iter().map(Shout::points).sum()
    }

    pub(crate) fn take_hand(&mut self, hand: Vec<Card>) {
        self.hand = hand;
    }

    pub(crate) fn reset(&mut self) {
        self.hand.clear();
        self.bid = None;
        self.shouts.clear();
    }

    pub(crate) fn set_bid(&mut self, bid: u8) {
        self.bid = Some(bid);
    }

    /// Remove `card` by value.
    pub fn remove_card(&mut self, card: Card) -> Result<Card, DomainError> {
        let pos = self.hand.iter().position(|&c| c == card).ok_or_else(|| {
            DomainError::invariant(
                InvariantKind::CardNotInHand,
                format!("Card {card} not found in {}'s hand", self.name),
            )
        })?;
        Ok(self.hand.remove(pos))
    }

    /// Detect shouts in the live hand and keep those for suits not shouted before.
    ///
    /// Returns only the newly declared shouts.
    pub(crate) fn declare_shouts(&mut self, seat: Seat, trump: Suit) -> Vec<Shout> {
        let fresh: Vec<Shout> = detect_shouts(&self.hand, trump, seat)
            .into_iter()
            .filter(|s| !self.shouts.iter().any(|held| held.suit == s.suit))
            .collect();
        self.shouts.extend(fresh.iter().cloned());
        fresh
    }
}
