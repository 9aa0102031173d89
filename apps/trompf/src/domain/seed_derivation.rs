//! RNG seed derivation utilities for deterministic game behavior.
//!
//! A game carries one base seed. Shuffling and the bidding start seat each
//! draw from their own stream so that the deck mode does not shift who
//! bids first for a given seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator used for every random decision in a game.
pub type GameRng = ChaCha8Rng;

/// Derive the seed for shuffling the deck.
pub fn derive_shuffle_seed(game_seed: u64) -> u64 {
    game_seed.wrapping_mul(1_000_003).wrapping_add(1)
}

/// Derive the seed for choosing the first bidder.
pub fn derive_bidding_seed(game_seed: u64) -> u64 {
    game_seed.wrapping_mul(1_000_003).wrapping_add(2)
}

pub fn rng_from_seed(seed: u64) -> GameRng {
    GameRng::seed_from_u64(seed)
}

/// Use `seed` when given, otherwise draw a fresh one from OS entropy.
///
/// The returned value is what the game reports, so an unseeded run can be replayed.
pub fn resolve_game_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}
