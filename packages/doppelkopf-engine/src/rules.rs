//! Fixed rule constants and the announcement threshold table.

use crate::announcements::Announcement;

pub const PLAYERS: usize = 4;

/// 48-card Doppelkopf deck: two copies each of 9/10/J/Q/K/A in four suits.
pub const DECK_SIZE: usize = 48;
pub const HAND_SIZE: u8 = 12;

/// Minimum cards remaining in the announcing player's hand for each level.
///
/// Calibrated against the 12-card deal: an announcement becomes illegal once
/// too many tricks have passed.
pub fn min_cards_for(announcement: Announcement) -> u8 {
    match announcement {
        Announcement::Re | Announcement::Kontra => 11,
        Announcement::No90 => 10,
        Announcement::No60 => 9,
        Announcement::No30 => 8,
        Announcement::Schwarz => 7,
    }
}
