//! Card game logic: checking suits in hands, comparing card strength, counting points

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Cards of `suit` in `hand`, ascending by rank.
pub fn cards_of_suit(hand: &[Card], suit: Suit) -> Vec<Card> {
    let mut v: Vec<Card> = hand.iter().copied().filter(|c| c.suit == suit).collect();
    v.sort_by_key(|c| c.rank);
    v
}

/// Does `a` beat `b` in a trick led in `lead` with `trump` established?
///
/// Trump beats non-trump; within one suit the higher rank wins; a lead-suit
/// card beats an off-suit card; anything else does not beat.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Suit) -> bool {
    let a_trump = a.suit == trump;
    let b_trump = b.suit == trump;
    if a_trump && !b_trump {
        return true;
    }
    if b_trump && !a_trump {
        return false;
    }
    if a.suit == b.suit {
        return a.rank > b.rank;
    }
    a.suit == lead && b.suit != lead
}

/// Index of the strongest card so far, scanning left to right from the first play.
pub fn best_card_index(cards: &[Card], lead: Suit, trump: Suit) -> Option<usize> {
    let (first, rest) = cards.split_first()?;
    let mut best_idx = 0usize;
    let mut best = *first;
    for (i, &card) in rest.iter().enumerate() {
        if card_beats(card, best, lead, trump) {
            best_idx = i + 1;
            best = card;
        }
    }
    Some(best_idx)
}

/// Sum of small points; Nines count zero.
pub fn small_points(cards: &[Card]) -> u16 {
    cards.iter().map(|c| c.small_points()).sum()
}
