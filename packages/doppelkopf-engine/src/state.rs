//! Seat / turn math helpers (4 fixed seats: 0..=3).
//!
//! These live in the engine so every consumer (session owner, views, AI)
//! shares a single source of truth for rotation and "who bids next".

pub type Seat = u8; // 0..=3

/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(4)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(s: Seat) -> Seat {
    seat_offset(s, 1)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: Seat, n: u8) -> Seat {
    seat_offset(start, n as i8)
}
