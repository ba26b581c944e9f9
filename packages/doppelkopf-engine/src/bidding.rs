//! Reservation round and contract declaration state machine.
//!
//! Transitions are pure: each takes a phase snapshot and returns the next
//! phase, leaving the input untouched. Turn order and double-bid
//! enforcement are the session owner's job (checked here only with debug
//! assertions); the declare entry point assumes its precondition holds, as
//! the UI must reject illegal requests before they get here.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{hand_has_both, Card, Suit, CLUB_QUEEN};
use crate::rules::PLAYERS;
use crate::state::{next_seat, Seat};
use crate::trump::TrumpMode;

/// A player's answer in the reservation round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Reservation {
    /// "Healthy": no special request.
    Gesund,
    /// Reservation: defers to a contract declaration.
    Vorbehalt,
}

/// Round contracts. The solo variants exist in the type system; only
/// `Normal` and `Hochzeit` are reachable through the reservation machine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    Normal,
    Hochzeit,
    JackSolo,
    QueenSolo,
    ColorSolo(Suit),
    Fleischlos,
}

impl ContractType {
    /// Contracts the declaration step currently accepts.
    pub fn is_declarable(self) -> bool {
        matches!(self, ContractType::Normal | ContractType::Hochzeit)
    }

    /// Valuation mode for a round played under this contract.
    pub fn trump_mode(self) -> TrumpMode {
        match self {
            ContractType::Normal | ContractType::Hochzeit => TrumpMode::Normal,
            ContractType::JackSolo => TrumpMode::JackSolo,
            ContractType::QueenSolo => TrumpMode::QueenSolo,
            ContractType::ColorSolo(s) => TrumpMode::ColorSolo(s),
            ContractType::Fleischlos => TrumpMode::NoTrump,
        }
    }
}

/// Snapshot of the reservation round.
///
/// Invariants: a seat appears in `bids` at most once, at most one seat is
/// ever awaiting a declaration, and `current_bidder` advances strictly
/// through the fixed seat order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BiddingPhase {
    pub current_bidder: Seat,
    pub bids: [Option<Reservation>; PLAYERS],
    pub awaiting_declaration: Option<Seat>,
}

impl BiddingPhase {
    pub fn new(forehand: Seat) -> Self {
        Self {
            current_bidder: forehand,
            bids: [None; PLAYERS],
            awaiting_declaration: None,
        }
    }

    pub fn all_bids_in(&self) -> bool {
        self.bids.iter().all(|b| b.is_some())
    }

    /// Terminal once all four seats have bid and no declaration is pending.
    /// A fixed non-normal contract also ends the round; that is signalled
    /// through [`DeclarationOutcome::contract`].
    pub fn is_terminal(&self) -> bool {
        self.all_bids_in() && self.awaiting_declaration.is_none()
    }
}

/// A special contract fixed for the round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct FixedContract {
    pub declarer: Seat,
    pub contract: ContractType,
}

/// Result of a contract declaration.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DeclarationOutcome {
    pub phase: BiddingPhase,
    /// `Some` fixes the round's contract; remaining seats need not bid.
    pub contract: Option<FixedContract>,
}

/// Hochzeit is legal only with both club queens in hand.
pub fn can_declare_hochzeit(hand: &[Card]) -> bool {
    hand_has_both(hand, CLUB_QUEEN)
}

/// Record `seat`'s reservation answer and compute the next phase.
///
/// A `Vorbehalt` without any legal special contract (no Hochzeit possible,
/// no solo declarable here) silently falls back to `Gesund` — deliberate
/// rule behavior, not an error.
pub fn apply_reservation(
    phase: &BiddingPhase,
    seat: Seat,
    reservation: Reservation,
    hand: &[Card],
) -> BiddingPhase {
    debug_assert_eq!(phase.current_bidder, seat, "caller must enforce turn order");
    debug_assert!(phase.bids[seat as usize].is_none(), "seat bids at most once");
    debug_assert!(
        phase.awaiting_declaration.is_none(),
        "no bid while a declaration is pending"
    );

    let mut next = phase.clone();
    match reservation {
        Reservation::Vorbehalt if can_declare_hochzeit(hand) => {
            next.bids[seat as usize] = Some(Reservation::Vorbehalt);
            next.awaiting_declaration = Some(seat);
        }
        Reservation::Vorbehalt => {
            debug!(seat, "vorbehalt without a declarable contract, recorded as gesund");
            next.bids[seat as usize] = Some(Reservation::Gesund);
            next.current_bidder = next_seat(seat);
        }
        Reservation::Gesund => {
            next.bids[seat as usize] = Some(Reservation::Gesund);
            next.current_bidder = next_seat(seat);
        }
    }
    next
}

/// Resolve a pending declaration.
///
/// `Hochzeit` fixes the round contract; `Normal` reverts the reservation to
/// a `Gesund`-equivalent record and bidding resumes at the next seat.
pub fn apply_declaration(
    phase: &BiddingPhase,
    seat: Seat,
    contract: ContractType,
) -> DeclarationOutcome {
    debug_assert_eq!(phase.awaiting_declaration, Some(seat), "no declaration pending for seat");
    debug_assert!(contract.is_declarable(), "contract not reachable from a reservation");

    let mut next = phase.clone();
    next.awaiting_declaration = None;
    match contract {
        ContractType::Normal => {
            next.bids[seat as usize] = Some(Reservation::Gesund);
            next.current_bidder = next_seat(seat);
            DeclarationOutcome {
                phase: next,
                contract: None,
            }
        }
        _ => {
            debug!(seat, ?contract, "contract fixed for the round");
            DeclarationOutcome {
                phase: next,
                contract: Some(FixedContract {
                    declarer: seat,
                    contract,
                }),
            }
        }
    }
}
