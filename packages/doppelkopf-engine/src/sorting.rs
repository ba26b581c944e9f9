//! Hand ordering for display: trump first, then plain suits grouped
//! clubs, hearts, spades, diamonds.

use crate::cards::{hand_has_both, Card, DIAMOND_ACE};
use crate::trump::{card_value, TrumpMode};

/// Return a new, descending-ordered copy of `cards` under `mode`.
///
/// The sort is stable, so the two physical copies of a card keep their
/// relative input order; the input slice is never touched.
/// `schweinerei_active` is the owner's per-round flag, computed once
/// upstream by the session owner (or via [`schweinerei_in_hand`] where no
/// per-seat tracking exists).
pub fn sort_hand(cards: &[Card], mode: TrumpMode, schweinerei_active: bool) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| {
        card_value(*b, mode, schweinerei_active).cmp(&card_value(*a, mode, schweinerei_active))
    });
    sorted
}

/// Local Schweinerei detection: true iff the hand itself holds both diamond
/// aces.
///
/// Only for contexts without per-seat Schweinerei tracking (e.g. a flat
/// hand preview). Once the session owner tracks the flag per seat, pass
/// that flag to [`sort_hand`] instead: mid-round, a player can own the
/// Schweinerei while one ace has already left the literal hand slice.
pub fn schweinerei_in_hand(hand: &[Card]) -> bool {
    hand_has_both(hand, DIAMOND_ACE)
}
