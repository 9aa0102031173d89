use serde::Serialize;

use crate::domain::cards_logic::best_card_index;
use crate::domain::rules::PLAYERS;
use crate::domain::seats::Seat;
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, InvariantKind};

/// One card put into a trick.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

/// Ordered plays of one round; at most four.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct Trick {
    plays: Vec<Play>,
}

impl Trick {
    pub fn new() -> Self {
        Self {
            plays: Vec::with_capacity(PLAYERS),
        }
    }

    /// Suit of the first card; `None` before any play.
    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|p| p.card.suit)
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn cards(&self) -> Vec<Card> {
        self.plays.iter().map(|p| p.card).collect()
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYERS
    }

    pub fn add_play(&mut self, seat: Seat, card: Card) -> Result<(), DomainError> {
        if self.is_complete() {
            return Err(DomainError::invariant(
                InvariantKind::TrickFull,
                format!("trick already holds {PLAYERS} cards"),
            ));
        }
        self.plays.push(Play { seat, card });
        Ok(())
    }

    /// Strongest play so far under the established trump.
    pub fn current_best(&self, trump: Suit) -> Option<Play> {
        let lead = self.lead_suit()?;
        let idx = best_card_index(&self.cards(), lead, trump)?;
        self.plays.get(idx).copied()
    }
}

/// Index (0..=3) of the winning play of a complete trick.
pub fn trick_winner_index(trick: &Trick, trump: Suit) -> Result<usize, DomainError> {
    if !trick.is_complete() {
        return Err(DomainError::invariant(
            InvariantKind::TrickIncomplete,
            format!("trick has {} of {PLAYERS} cards", trick.len()),
        ));
    }
    let lead = trick.lead_suit().ok_or_else(|| {
        DomainError::invariant(InvariantKind::TrickIncomplete, "trick has no lead suit")
    })?;
    let idx = best_card_index(&trick.cards(), lead, trump).ok_or_else(|| {
        DomainError::invariant(InvariantKind::TrickIncomplete, "trick has no cards")
    })?;
    if idx >= PLAYERS {
        return Err(DomainError::invariant(
            InvariantKind::TrickWinnerOutOfRange,
            format!("Invalid trick winner index: {idx}"),
        ));
    }
    Ok(idx)
}

/// Winning play of a complete trick.
pub fn resolve_trick(trick: &Trick, trump: Suit) -> Result<Play, DomainError> {
    let idx = trick_winner_index(trick, trump)?;
    trick.plays().get(idx).copied().ok_or_else(|| {
        DomainError::invariant(
            InvariantKind::TrickWinnerOutOfRange,
            format!("Invalid trick winner index: {idx}"),
        )
    })
}
