//! Per-round snapshot supplied by the game-session owner.
//!
//! The owner is the sole authority over durable state; it hands the engine
//! a consistent snapshot and must treat every answer as advisory at the
//! instant of that snapshot, re-validating before commit if state moved.

use serde::{Deserialize, Serialize};

use crate::announcements::{available_announcements, Announcement, Team, TeamAnnouncements};
use crate::bidding::BiddingPhase;
use crate::cards::Card;
use crate::sorting::sort_hand;
use crate::state::Seat;
use crate::trump::TrumpMode;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub trump_mode: TrumpMode,
    /// Seat holding both diamond aces this round, if any.
    pub schweinerei_owner: Option<Seat>,
    pub bidding: BiddingPhase,
    pub re: TeamAnnouncements,
    pub kontra: TeamAnnouncements,
}

impl RoundSnapshot {
    /// Fresh round: normal game, reservation round open at `forehand`.
    pub fn new(forehand: Seat) -> Self {
        Self {
            trump_mode: TrumpMode::Normal,
            schweinerei_owner: None,
            bidding: BiddingPhase::new(forehand),
            re: TeamAnnouncements::default(),
            kontra: TeamAnnouncements::default(),
        }
    }

    /// Schweinerei is a per-owner fact: it promotes that seat's two diamond
    /// aces from that seat's perspective only.
    pub fn schweinerei_active_for(&self, seat: Seat) -> bool {
        self.schweinerei_owner == Some(seat)
    }

    /// Display ordering of `seat`'s hand under this round's mode.
    pub fn sorted_hand_for(&self, seat: Seat, hand: &[Card]) -> Vec<Card> {
        sort_hand(hand, self.trump_mode, self.schweinerei_active_for(seat))
    }

    pub fn announcements_for(&self, team: Team) -> &TeamAnnouncements {
        match team {
            Team::Re => &self.re,
            Team::Kontra => &self.kontra,
        }
    }

    /// Legal announcements for `team` given the announcing player's
    /// remaining hand size, weakest first.
    pub fn available_announcements_for(
        &self,
        team: Team,
        cards_remaining: u8,
    ) -> Vec<Announcement> {
        available_announcements(team, self.announcements_for(team), cards_remaining)
    }
}
