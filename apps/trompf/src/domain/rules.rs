use std::ops::RangeInclusive;

pub const PLAYERS: usize = 4;
pub const TEAMS: usize = 2;
pub const HAND_SIZE: usize = 6;
pub const DECK_SIZE: usize = 24;
pub const TRICKS_PER_GAME: u8 = 6;
pub const MAX_BID: u8 = 4;
pub const MAX_BID_ATTEMPTS: u8 = 3;
/// One big point is worth this many small points.
pub const SMALL_POINTS_PER_BIG_POINT: u16 = 33;

pub fn valid_bid_range() -> RangeInclusive<u8> {
    0..=MAX_BID
}

/// Integer division; leftovers below 33 are lost.
pub fn big_points(small_points: u16) -> u16 {
    small_points / SMALL_POINTS_PER_BIG_POINT
}
