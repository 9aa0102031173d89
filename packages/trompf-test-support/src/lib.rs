//! Shared helpers for trompf integration tests: logging setup and fixtures.

pub mod fixtures;
pub mod logging;

pub use fixtures::{card, cards, standard_players, RecordingSink};
