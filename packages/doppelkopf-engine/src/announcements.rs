//! Announcement legality: Re/Kontra identity and the point-commitment
//! ladder no90 < no60 < no30 < schwarz.

use serde::{Deserialize, Serialize};

use crate::rules::min_cards_for;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    Re,
    Kontra,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Announcement {
    Re,
    Kontra,
    No90,
    No60,
    No30,
    Schwarz,
}

/// Ladder levels in ascending strength.
pub const LADDER: [Announcement; 4] = [
    Announcement::No90,
    Announcement::No60,
    Announcement::No30,
    Announcement::Schwarz,
];

impl Announcement {
    /// The team-identity level for `team`.
    pub fn identity_for(team: Team) -> Announcement {
        match team {
            Team::Re => Announcement::Re,
            Team::Kontra => Announcement::Kontra,
        }
    }

    pub fn is_identity(self) -> bool {
        matches!(self, Announcement::Re | Announcement::Kontra)
    }
}

/// What one team has declared so far. The engine never mutates a record in
/// place; [`TeamAnnouncements::with`] yields the updated copy for the
/// session owner to commit.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamAnnouncements {
    /// Identity announcement (re or kontra) has been made.
    pub announced: bool,
    pub no90: bool,
    pub no60: bool,
    pub no30: bool,
    pub schwarz: bool,
}

impl TeamAnnouncements {
    pub fn has(&self, announcement: Announcement) -> bool {
        match announcement {
            Announcement::Re | Announcement::Kontra => self.announced,
            Announcement::No90 => self.no90,
            Announcement::No60 => self.no60,
            Announcement::No30 => self.no30,
            Announcement::Schwarz => self.schwarz,
        }
    }

    /// Copy of the record with `announcement` declared.
    pub fn with(&self, announcement: Announcement) -> Self {
        let mut next = *self;
        match announcement {
            Announcement::Re | Announcement::Kontra => next.announced = true,
            Announcement::No90 => next.no90 = true,
            Announcement::No60 => next.no60 = true,
            Announcement::No30 => next.no30 = true,
            Announcement::Schwarz => next.schwarz = true,
        }
        next
    }
}

/// Whether `team` may declare `announcement` while holding
/// `cards_remaining` cards.
///
/// Identity: own team's level, not yet made, at least 11 cards in hand.
/// Ladder level L: identity already made, L not yet declared, the hand
/// meets L's threshold, and every skipped level below L would still be
/// declarable card-count-wise at this exact moment. Skipping a level is
/// allowed only while skipping does not forfeit a level that has already
/// become too late to declare.
pub fn can_announce(
    announcement: Announcement,
    team: Team,
    record: &TeamAnnouncements,
    cards_remaining: u8,
) -> bool {
    if announcement.is_identity() {
        return announcement == Announcement::identity_for(team)
            && !record.announced
            && cards_remaining >= min_cards_for(announcement);
    }
    if !record.announced || record.has(announcement) {
        return false;
    }
    if cards_remaining < min_cards_for(announcement) {
        return false;
    }
    for &lower in LADDER.iter().take_while(|&&l| l != announcement) {
        if !record.has(lower) && cards_remaining < min_cards_for(lower) {
            return false;
        }
    }
    true
}

/// All currently legal announcements for `team`, weakest first.
///
/// Empty means the caller presents no announcement affordance at all.
pub fn available_announcements(
    team: Team,
    record: &TeamAnnouncements,
    cards_remaining: u8,
) -> Vec<Announcement> {
    let mut candidates = vec![Announcement::identity_for(team)];
    candidates.extend(LADDER);
    candidates
        .into_iter()
        .filter(|&a| can_announce(a, team, record, cards_remaining))
        .collect()
}

/// Conservative auto-selection: the weakest currently legal level. Callers
/// re-derive this whenever state changes invalidate a previous selection.
pub fn default_announcement(
    team: Team,
    record: &TeamAnnouncements,
    cards_remaining: u8,
) -> Option<Announcement> {
    available_announcements(team, record, cards_remaining)
        .into_iter()
        .next()
}
