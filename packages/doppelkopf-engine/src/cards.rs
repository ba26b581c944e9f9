//! Core card types: Card, Rank, Suit, plus the Doppelkopf deck.

use serde::{Deserialize, Serialize};

use crate::rules::DECK_SIZE;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

/// The full 2–A rank set. Ranks Two..=Eight exist for non-Doppelkopf test
/// fixtures only; a legal 48-card deal never contains them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

// Note: Ord/Eq on Card is only for stable sorting in tests: suit order
// C<D<H<S then rank order. Do not use for trick resolution or any game
// logic comparison involving trump; that is what `trump::card_value` is for.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

pub const CLUB_QUEEN: Card = Card {
    suit: Suit::Clubs,
    rank: Rank::Queen,
};
pub const DIAMOND_ACE: Card = Card {
    suit: Suit::Diamonds,
    rank: Rank::Ace,
};
pub const HEART_TEN: Card = Card {
    suit: Suit::Hearts,
    rank: Rank::Ten,
};

pub const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
pub const DOPPELKOPF_RANKS: [Rank; 6] = [
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// The full 48-card deck in fixed enumeration order, two copies of each card.
/// Shuffling and dealing are the session owner's concern.
pub fn doppelkopf_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in SUITS {
        for rank in DOPPELKOPF_RANKS {
            deck.push(Card { suit, rank });
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Whether the hand holds both physical copies of `card`.
///
/// Doppelkopf gates two rules on this: Hochzeit (both club queens) and
/// Schweinerei (both diamond aces).
pub fn hand_has_both(hand: &[Card], card: Card) -> bool {
    hand.iter().filter(|&&c| c == card).count() >= 2
}
