//! Domain events emitted while a game runs.
//!
//! The engine never prints. Presentation code (text transcript, JSON lines,
//! test collectors) implements [`EventSink`] and receives every event in
//! order.

use serde::Serialize;

use crate::domain::dealing::DeckMode;
use crate::domain::player::Team;
use crate::domain::scoring::FinalScore;
use crate::domain::seats::Seat;
use crate::domain::shouts::Shout;
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// A seat's cards straight after the deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatHand {
    pub seat: Seat,
    pub name: String,
    pub team: Team,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    DeckPrepared {
        mode: DeckMode,
        seed: u64,
    },
    CardsDealt {
        hands: Vec<SeatHand>,
    },
    BiddingStarted {
        start: Seat,
    },
    BidRejected {
        seat: Seat,
        attempt: u8,
        reason: String,
    },
    BidPlaced {
        seat: Seat,
        bid: u8,
    },
    DeclarerChosen {
        seat: Seat,
        team: Team,
        bid: u8,
    },
    TrickStarted {
        number: u8,
        leader: Seat,
    },
    ShoutDetected {
        shout: Shout,
    },
    CardPlayed {
        trick: u8,
        seat: Seat,
        card: Card,
    },
    TrumpEstablished {
        suit: Suit,
    },
    TrickWon {
        trick: u8,
        seat: Seat,
        team: Team,
        points: u16,
    },
    FinalScore {
        score: FinalScore,
    },
}

/// Receiver of game events.
pub trait EventSink {
    fn emit(&mut self, event: &GameEvent) -> Result<(), DomainError>;
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: &GameEvent) -> Result<(), DomainError> {
        self.push(event.clone());
        Ok(())
    }
}

/// Adapts a closure into an [`EventSink`].
pub struct FnSink<F>(pub F);

impl<F> EventSink for FnSink<F>
where
    F: FnMut(&GameEvent),
{
    fn emit(&mut self, event: &GameEvent) -> Result<(), DomainError> {
        (self.0)(event);
        Ok(())
    }
}

/// Forwards each event to two sinks in turn.
pub struct Tee<'a> {
    first: &'a mut dyn EventSink,
    second: &'a mut dyn EventSink,
}

impl<'a> Tee<'a> {
    pub fn new(first: &'a mut dyn EventSink, second: &'a mut dyn EventSink) -> Self {
        Self { first, second }
    }
}

impl EventSink for Tee<'_> {
    fn emit(&mut self, event: &GameEvent) -> Result<(), DomainError> {
        self.first.emit(event)?;
        self.second.emit(event)
    }
}
