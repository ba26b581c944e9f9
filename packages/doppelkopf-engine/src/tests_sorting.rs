//! Unit suites for the hand sorter.

use crate::snapshot::RoundSnapshot;
use crate::sorting::{schweinerei_in_hand, sort_hand};
use crate::test_helpers::cards;
use crate::trump::TrumpMode;

#[test]
fn sorts_trump_before_plain_suits_in_display_order() {
    // Scrambled normal-game hand: trump mixed into three plain suits.
    let hand = cards(&["AS", "JD", "9C", "QC", "KH", "TD", "AH", "JH", "9S", "TC", "TH", "KD"]);
    let sorted = sort_hand(&hand, TrumpMode::Normal, false);
    // Trump descending, then clubs, hearts, spades, each suit descending.
    let expected = cards(&[
        "TH", "QC", "JH", "JD", "TD", "KD", "TC", "9C", "AH", "KH", "AS", "9S",
    ]);
    assert_eq!(sorted, expected);
}

#[test]
fn sort_is_idempotent() {
    let hand = cards(&["9C", "QC", "TH", "AD", "AD", "JS", "KH", "9D"]);
    let once = sort_hand(&hand, TrumpMode::Normal, true);
    let twice = sort_hand(&once, TrumpMode::Normal, true);
    assert_eq!(once, twice);
}

#[test]
fn sort_does_not_touch_its_input() {
    let hand = cards(&["9C", "QC", "TH", "AD", "JS"]);
    let before = hand.clone();
    let _ = sort_hand(&hand, TrumpMode::Normal, false);
    assert_eq!(hand, before);
}

#[test]
fn schweinerei_pair_leads_the_hand() {
    let hand = cards(&["KH", "AD", "QC", "AD", "9S"]);
    let sorted = sort_hand(&hand, TrumpMode::Normal, true);
    assert_eq!(&sorted[..2], &cards(&["AD", "AD"])[..]);
    // Without the flag the club queen leads instead.
    let plainly = sort_hand(&hand, TrumpMode::Normal, false);
    assert_eq!(plainly[0], cards(&["QC"])[0]);
}

#[test]
fn local_schweinerei_detection_needs_both_copies() {
    assert!(schweinerei_in_hand(&cards(&["AD", "KH", "AD"])));
    assert!(!schweinerei_in_hand(&cards(&["AD", "KH"])));
    assert!(!schweinerei_in_hand(&[]));
}

#[test]
fn solo_modes_regroup_the_same_hand() {
    let hand = cards(&["QC", "JD", "AD", "TH", "AH"]);
    // Queen solo: only the queen is trump; TH is a plain heart again.
    let sorted = sort_hand(&hand, TrumpMode::QueenSolo, false);
    assert_eq!(sorted, cards(&["QC", "AH", "TH", "AD", "JD"]));
    // No trump: club queen sinks into the clubs group.
    let sorted = sort_hand(&hand, TrumpMode::NoTrump, false);
    assert_eq!(sorted, cards(&["QC", "AH", "TH", "AD", "JD"]));
}

#[test]
fn snapshot_sorter_applies_the_owners_schweinerei_only() {
    let mut snap = RoundSnapshot::new(0);
    snap.schweinerei_owner = Some(1);
    let hand = cards(&["KH", "AD", "QC", "AD"]);
    // Seat 1 owns the pair; its view leads with the promoted aces.
    assert_eq!(
        snap.sorted_hand_for(1, &hand),
        cards(&["AD", "AD", "QC", "KH"])
    );
    // Any other seat sees ordinary diamonds trump.
    assert_eq!(
        snap.sorted_hand_for(0, &hand),
        cards(&["QC", "AD", "AD", "KH"])
    );
}
