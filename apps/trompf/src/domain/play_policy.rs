//! The single deterministic card-choice heuristic every seat uses.

use crate::domain::cards_logic::{card_beats, cards_of_suit, small_points};
use crate::domain::tricks::Trick;
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, InvariantKind};

#[derive(Debug, Clone, Copy)]
struct SuitGroup {
    suit: Suit,
    count: usize,
    points: u16,
    has_ace: bool,
    has_ten: bool,
}

/// Suits held, in order of first appearance in `hand`.
fn suit_groups(hand: &[Card]) -> Vec<SuitGroup> {
    let mut suits: Vec<Suit> = Vec::new();
    for card in hand {
        if !suits.contains(&card.suit) {
            suits.push(card.suit);
        }
    }
    suits
        .into_iter()
        .map(|suit| {
            let cards = cards_of_suit(hand, suit);
            SuitGroup {
                suit,
                count: cards.len(),
                points: small_points(&cards),
                has_ace: cards.iter().any(|c| c.rank == Rank::Ace),
                has_ten: cards.iter().any(|c| c.rank == Rank::Ten),
            }
        })
        .collect()
}

fn empty_hand() -> DomainError {
    DomainError::invariant(InvariantKind::HandSize, "no cards to choose from")
}

/// Leading card: the longest suit (then most points, then Ace, then Ten),
/// played from the top.
pub fn choose_lead_card(hand: &[Card]) -> Result<Card, DomainError> {
    let mut groups = suit_groups(hand);
    // Stable: equal keys keep first-appearance order.
    groups.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then(b.points.cmp(&a.points))
            .then(b.has_ace.cmp(&a.has_ace))
            .then(b.has_ten.cmp(&a.has_ten))
    });
    let chosen = groups.first().ok_or_else(empty_hand)?;
    cards_of_suit(hand, chosen.suit)
        .last()
        .copied()
        .ok_or_else(empty_hand)
}

/// Cheapest card of `candidates` (ascending) beating `best`, else the lowest.
fn cheapest_winner_or_lowest(candidates: &[Card], best: Card, lead: Suit, trump: Suit) -> Option<Card> {
    candidates
        .iter()
        .copied()
        .find(|&c| card_beats(c, best, lead, trump))
        .or_else(|| candidates.first().copied())
}

/// Following card for a trick already under way.
pub fn choose_follow_card(hand: &[Card], trick: &Trick, trump: Suit) -> Result<Card, DomainError> {
    let (lead, best) = match (trick.lead_suit(), trick.current_best(trump)) {
        (Some(lead), Some(best)) => (lead, best.card),
        _ => {
            return Err(DomainError::invariant(
                InvariantKind::TrickIncomplete,
                "following an empty trick",
            ))
        }
    };

    let same_suit = cards_of_suit(hand, lead);
    if let Some(card) = cheapest_winner_or_lowest(&same_suit, best, lead, trump) {
        return Ok(card);
    }

    let trumps = cards_of_suit(hand, trump);
    if let Some(card) = cheapest_winner_or_lowest(&trumps, best, lead, trump) {
        return Ok(card);
    }

    // Pure discard: first lowest-ranked card in hand order.
    let mut lowest: Option<Card> = None;
    for &card in hand {
        match lowest {
            Some(l) if l.rank <= card.rank => {}
            _ => lowest = Some(card),
        }
    }
    lowest.ok_or_else(empty_hand)
}

/// Card for the next play of `trick`.
///
/// `trump` is `None` only before the first card of the game, which is
/// always a lead.
pub fn choose_card(hand: &[Card], trick: &Trick, trump: Option<Suit>) -> Result<Card, DomainError> {
    if trick.is_empty() {
        return choose_lead_card(hand);
    }
    let trump = trump.ok_or_else(|| {
        DomainError::invariant(InvariantKind::TrumpUnset, "trump unset while following")
    })?;
    choose_follow_card(hand, trick, trump)
}
