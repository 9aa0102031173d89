use trompf::domain::cards_parsing::try_parse_cards;
use trompf::domain::{Card, EventSink, GameEvent, Player, Team};
use trompf::DomainError;

/// P1 and P2 on team 1, P3 and P4 on team 2, in seat order.
pub fn standard_players() -> Vec<Player> {
    vec![
        Player::new("P1", Team::One),
        Player::new("P2", Team::One),
        Player::new("P3", Team::Two),
        Player::new("P4", Team::Two),
    ]
}

/// Parse a card token such as `"AR"`; panics on bad input.
pub fn card(token: &str) -> Card {
    token
        .parse()
        .unwrap_or_else(|e| panic!("bad card token '{token}': {e}"))
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens.iter().copied())
        .unwrap_or_else(|e| panic!("bad card tokens {tokens:?}: {e}"))
}

/// Collects events and offers typed queries over them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<GameEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    /// Cards played, in order, as `(trick, seat, card)`.
    pub fn plays(&self) -> Vec<(u8, u8, Card)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GameEvent::CardPlayed { trick, seat, card } => Some((*trick, *seat, *card)),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &GameEvent) -> Result<(), DomainError> {
        self.events.push(event.clone());
        Ok(())
    }
}
