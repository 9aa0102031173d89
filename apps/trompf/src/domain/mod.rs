//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod events;
pub mod game;
pub mod play_policy;
pub mod player;
pub mod rules;
pub mod scoring;
pub mod seats;
pub mod seed_derivation;
pub mod shouts;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_play_policy;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use bidding::{Bid, BidRequest, BidSource, ScriptedBids};
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal_hands, Deck, DeckMode};
pub use events::{EventSink, GameEvent};
pub use game::{Game, GameOptions, GameOutcome, Phase, TrickRecord};
pub use player::{Player, Team};
pub use scoring::{FinalScore, TeamScore};
pub use seats::Seat;
pub use shouts::{Shout, ShoutKind};
