// Proptest generators for domain types.
// Card sets are drawn from a shuffled 24-card deck, so they never repeat a card.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::seats::Seat;
use crate::domain::{Card, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Red),
        Just(Suit::Hearts),
        Just(Suit::Green),
        Just(Suit::Acorns),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop_oneof![
        Just(Rank::Two),
        Just(Rank::Three),
        Just(Rank::Four),
        Just(Rank::Nine),
        Just(Rank::Ten),
        Just(Rank::Ace),
    ]
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// `count` distinct cards in random order.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(full_deck()).prop_shuffle().prop_map(move |mut cards| {
        cards.truncate(count);
        cards
    })
}

pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..=3u8
}

/// Complete trick: (leader, plays in seat order, trump).
pub fn complete_trick() -> impl Strategy<Value = (Seat, Vec<(Seat, Card)>, Suit)> {
    (seat(), unique_cards(4), suit()).prop_map(|(leader, cards, trump)| {
        let plays = cards
            .into_iter()
            .enumerate()
            .map(|(i, card)| ((leader + i as u8) % 4, card))
            .collect();
        (leader, plays, trump)
    })
}
