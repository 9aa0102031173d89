//! Deck construction, shuffling and dealing.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, InvariantKind};

/// How the 24 cards are ordered before dealing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeckMode {
    /// Uniform Fisher-Yates shuffle driven by the game seed.
    Random,
    /// Every seat receives the Three, Four and Ace of its own suit.
    ShoutGuaranteed,
}

/// Generate the full 24-card deck in suit-major order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Fisher-Yates shuffle.
pub fn shuffle<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = rng.random_range(0..=i);
        deck.swap(i, j);
    }
}

/// Draw pile. Cards are taken from the end of the sequence.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Fresh deck shuffled with `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        shuffle(&mut cards, rng);
        Self { cards }
    }

    /// Deterministic deck that hands seat `i` the Three, Four and Ace of `Suit::ALL[i]`.
    ///
    /// The other twelve cards go round-robin to seats that still have room.
    /// The sequence is laid out in dealing order and then reversed, so the
    /// ordinary draw-from-the-end deal reproduces the planned hands.
    pub fn shout_guaranteed() -> Result<Self, DomainError> {
        let mut remaining = full_deck();
        let mut hands: [Vec<Card>; PLAYERS] = Default::default();

        for (seat, suit) in Suit::ALL.iter().enumerate() {
            for rank in [Rank::Three, Rank::Four, Rank::Ace] {
                let card = Card::new(*suit, rank);
                let pos = remaining.iter().position(|&c| c == card).ok_or_else(|| {
                    DomainError::invariant(InvariantKind::DeckSize, format!("{card} missing"))
                })?;
                hands[seat].push(remaining.remove(pos));
            }
        }

        let mut idx = 0usize;
        for card in remaining {
            let mut guard = 0;
            while hands[idx].len() >= HAND_SIZE {
                idx = (idx + 1) % PLAYERS;
                guard += 1;
                if guard > PLAYERS {
                    return Err(DomainError::invariant(
                        InvariantKind::HandSize,
                        "no seat has room for the remaining cards",
                    ));
                }
            }
            hands[idx].push(card);
            idx = (idx + 1) % PLAYERS;
        }

        let mut deal_order = Vec::with_capacity(DECK_SIZE);
        for round in 0..HAND_SIZE {
            for hand in &hands {
                let card = hand.get(round).copied().ok_or_else(|| {
                    DomainError::invariant(InvariantKind::HandSize, "planned hand is short")
                })?;
                deal_order.push(card);
            }
        }
        deal_order.reverse();

        Ok(Self { cards: deal_order })
    }

    pub fn build(mode: DeckMode, rng: &mut impl Rng) -> Result<Self, DomainError> {
        let deck = match mode {
            DeckMode::Random => Self::shuffled(rng),
            DeckMode::ShoutGuaranteed => Self::shout_guaranteed()?,
        };
        if deck.len() != DECK_SIZE {
            return Err(DomainError::invariant(
                InvariantKind::DeckSize,
                format!("Deck should have {DECK_SIZE} cards, has {}", deck.len()),
            ));
        }
        Ok(deck)
    }

    /// Remove and return the last card.
    pub fn draw(&mut self) -> Result<Card, DomainError> {
        self.cards.pop().ok_or_else(|| {
            DomainError::invariant(InvariantKind::EmptyDeck, "cannot draw from an empty deck")
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Deal six rounds of one card to each seat in seat order, consuming the deck.
///
/// Post-condition: four hands of six cards and an empty deck.
pub fn deal_hands(deck: &mut Deck) -> Result<[Vec<Card>; PLAYERS], DomainError> {
    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for _ in 0..HAND_SIZE {
        for hand in hands.iter_mut() {
            hand.push(deck.draw()?);
        }
    }

    if let Some(short) = hands.iter().position(|h| h.len() != HAND_SIZE) {
        return Err(DomainError::invariant(
            InvariantKind::HandSize,
            format!("seat {short} holds {} cards after dealing", hands[short].len()),
        ));
    }
    if !deck.is_empty() {
        return Err(DomainError::invariant(
            InvariantKind::DeckSize,
            format!("{} cards left in the deck after dealing", deck.len()),
        ));
    }

    debug!(hands = ?hands, "dealt");
    Ok(hands)
}
