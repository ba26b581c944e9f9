//! Doppelkopf rules engine: pure game logic types and helpers.
//!
//! This crate is a stateless rules oracle. It answers deterministic
//! questions about card values, hand ordering, reservation (bidding)
//! transitions, and announcement legality given an explicit snapshot.
//! It owns no session lifecycle: turn enforcement, trick resolution,
//! scoring, and persistence all belong to the game-session owner, which
//! must re-validate any answer before committing a mutation.

pub mod announcements;
pub mod bidding;
pub mod cards;
pub mod cards_serde;
pub mod errors;
pub mod rules;
pub mod snapshot;
pub mod sorting;
pub mod state;
pub mod trump;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests_sorting;

// Re-exports for ergonomics
pub use announcements::{
    available_announcements, can_announce, default_announcement, Announcement, Team,
    TeamAnnouncements,
};
pub use bidding::{
    apply_declaration, apply_reservation, can_declare_hochzeit, BiddingPhase, ContractType,
    DeclarationOutcome, FixedContract, Reservation,
};
pub use cards::{doppelkopf_deck, hand_has_both, Card, Rank, Suit};
pub use errors::DomainError;
pub use rules::{min_cards_for, DECK_SIZE, HAND_SIZE, PLAYERS};
pub use snapshot::RoundSnapshot;
pub use sorting::{schweinerei_in_hand, sort_hand};
pub use state::{next_seat, Seat};
pub use trump::{card_value, is_trump, TrumpMode};
