//! Seat / turn math helpers (4 fixed seats: 0..=3).
//!
//! Clockwise direction is positive (+1).

use crate::domain::rules::PLAYERS;

pub type Seat = u8; // 0..=3

#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: Seat, n: u8) -> Seat {
    seat_offset(start, n as i8)
}

/// All four seats in speaking/playing order starting at `start`.
pub fn seat_order(start: Seat) -> [Seat; PLAYERS] {
    [
        nth_from(start, 0),
        nth_from(start, 1),
        nth_from(start, 2),
        nth_from(start, 3),
    ]
}
