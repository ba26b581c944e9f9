//! Trump membership and card valuation across all game modes.
//!
//! `card_value` is the single ordering authority: within a fixed
//! `(mode, schweinerei_active)` pair it yields a strict total order over all
//! 48 suit/rank combinations (the two physical copies of a card tie). The
//! hand sorter and the external trick-winner collaborator must both compare
//! through it; cross-mode values are never comparable.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit, DIAMOND_ACE, HEART_TEN};

/// Active trump scheme for one round. Exactly one mode per round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TrumpMode {
    /// Normal game: queens, jacks, diamonds, the hearts ten, and (if active
    /// for the owner) the Schweinerei pair.
    Normal,
    /// Solo with only the jacks as trump.
    JackSolo,
    /// Solo with only the queens as trump.
    QueenSolo,
    /// Color solo: the named suit plus queens, jacks, and the hearts ten.
    ColorSolo(Suit),
    /// "Fleischloser": no trump at all.
    NoTrump,
}

// Value bands. Every trump value sits strictly above every plain value;
// the exact numbers are private and pinned only through the ordering tests.
const SUIT_TRUMP_BASE: u16 = 220;
const JACK_BASE: u16 = 230;
const QUEEN_BASE: u16 = 240;
const HEART_TEN_VALUE: u16 = 250;
const SCHWEINEREI_VALUE: u16 = 260;

const PLAIN_SUIT_SPAN: u16 = 13;

/// Cross-suit order within a trump rank: clubs > spades > hearts > diamonds.
fn trump_suit_step(suit: Suit) -> u16 {
    match suit {
        Suit::Clubs => 3,
        Suit::Spades => 2,
        Suit::Hearts => 1,
        Suit::Diamonds => 0,
    }
}

/// Display grouping for plain cards: clubs, hearts, spades, diamonds.
fn plain_suit_band(suit: Suit) -> u16 {
    match suit {
        Suit::Clubs => 3,
        Suit::Hearts => 2,
        Suit::Spades => 1,
        Suit::Diamonds => 0,
    }
}

/// Natural plain order A > 10 > K > Q > J > 9; fixture ranks fall below.
fn plain_rank_step(rank: Rank) -> u16 {
    match rank {
        Rank::Ace => 12,
        Rank::Ten => 11,
        Rank::King => 10,
        Rank::Queen => 9,
        Rank::Jack => 8,
        Rank::Nine => 7,
        Rank::Eight => 6,
        Rank::Seven => 5,
        Rank::Six => 4,
        Rank::Five => 3,
        Rank::Four => 2,
        Rank::Three => 1,
        Rank::Two => 0,
    }
}

/// Order of the plain pips of a trump suit: A > 10 > K > 9.
/// Jack and queen are handled by their own bands; other ranks cannot occur
/// in a legal deal and stay plain.
fn trump_pip_step(rank: Rank) -> Option<u16> {
    match rank {
        Rank::Ace => Some(3),
        Rank::Ten => Some(2),
        Rank::King => Some(1),
        Rank::Nine => Some(0),
        _ => None,
    }
}

fn plain_value(card: Card) -> u16 {
    plain_suit_band(card.suit) * PLAIN_SUIT_SPAN + plain_rank_step(card.rank)
}

/// Trump value in the modes that share the full hierarchy (normal game and
/// color solos): hearts ten, queens, jacks, then the pips of `trump_suit`.
fn full_hierarchy_value(card: Card, trump_suit: Suit) -> Option<u16> {
    if card == HEART_TEN {
        return Some(HEART_TEN_VALUE);
    }
    match card.rank {
        Rank::Queen => Some(QUEEN_BASE + trump_suit_step(card.suit)),
        Rank::Jack => Some(JACK_BASE + trump_suit_step(card.suit)),
        _ if card.suit == trump_suit => trump_pip_step(card.rank).map(|s| SUIT_TRUMP_BASE + s),
        _ => None,
    }
}

/// Whether the card is trump under `mode`.
///
/// Schweinerei never changes trump membership in the normal game (the
/// diamond aces are diamonds trump either way); it only changes their value.
pub fn is_trump(card: Card, mode: TrumpMode) -> bool {
    match mode {
        TrumpMode::Normal => full_hierarchy_value(card, Suit::Diamonds).is_some(),
        TrumpMode::JackSolo => card.rank == Rank::Jack,
        TrumpMode::QueenSolo => card.rank == Rank::Queen,
        TrumpMode::ColorSolo(s) => full_hierarchy_value(card, s).is_some(),
        TrumpMode::NoTrump => false,
    }
}

/// Total order value of `card` under `mode`.
///
/// `schweinerei_active` is the per-owner fact "this player holds both diamond
/// aces"; it promotes those two cards to the single highest trump value in
/// the normal game and is ignored in every other mode. When inactive, the
/// diamond aces are ordinary top diamonds trump — there is no special case.
pub fn card_value(card: Card, mode: TrumpMode, schweinerei_active: bool) -> u16 {
    match mode {
        TrumpMode::Normal => {
            if schweinerei_active && card == DIAMOND_ACE {
                return SCHWEINEREI_VALUE;
            }
            full_hierarchy_value(card, Suit::Diamonds).unwrap_or_else(|| plain_value(card))
        }
        TrumpMode::JackSolo => {
            if card.rank == Rank::Jack {
                JACK_BASE + trump_suit_step(card.suit)
            } else {
                plain_value(card)
            }
        }
        TrumpMode::QueenSolo => {
            if card.rank == Rank::Queen {
                QUEEN_BASE + trump_suit_step(card.suit)
            } else {
                plain_value(card)
            }
        }
        TrumpMode::ColorSolo(s) => {
            full_hierarchy_value(card, s).unwrap_or_else(|| plain_value(card))
        }
        TrumpMode::NoTrump => plain_value(card),
    }
}
