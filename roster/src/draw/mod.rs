//! Seat assignment engine - THE single draw path
//!
//! Given the full member roster and two chosen speakers, computes the
//! weekly presentation order: fixed-seat members stay pinned, the two
//! speakers take the reserved speaker seats, and everyone else is placed
//! on the remaining ring seats in uniformly random order.
//!
//! The engine is pure: no I/O, no shared state, deterministic given the
//! same inputs and RNG. Callers inject the random source so tests can
//! replay draws with seeded generators.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::DrawError;
use crate::models::{Member, SeatAssignment};

/// Seat topology for one draw.
///
/// The reserved speaker seats default to the chapter's 86/87 convention
/// but are explicit configuration so the engine supports rosters of any
/// size. The ring size itself is derived from the roster length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// The two seat numbers reserved for the session's speakers.
    pub speaker_seats: [i32; 2],
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            speaker_seats: [86, 87],
        }
    }
}

/// A computed presentation order.
///
/// `assignments` is sorted ascending by seat and covers every placed
/// member exactly once. Ring seats the shuffled pool could not fill are
/// reported in `unfilled_seats` rather than silently dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingOrder {
    pub assignments: Vec<SeatAssignment>,
    pub unfilled_seats: Vec<i32>,
}

/// Compute a new presentation order for `roster`.
///
/// `speaker1` and `speaker2` are member display names and must resolve to
/// two distinct, non-fixed members. Fixed-seat members keep their declared
/// seat; remaining members are shuffled (Fisher-Yates via `rand`) onto the
/// ring seats `1..=roster.len()` excluding the reserved speaker seats and
/// any declared fixed numbers. `speaker1` always lands on the lower of the
/// two reserved seats.
pub fn assign_seats<R: Rng + ?Sized>(
    roster: &[Member],
    speaker1: &str,
    speaker2: &str,
    config: &DrawConfig,
    rng: &mut R,
) -> Result<SeatingOrder, DrawError> {
    if roster.is_empty() {
        return Err(DrawError::EmptyRoster);
    }
    if speaker1 == speaker2 {
        return Err(DrawError::InvalidSelection);
    }

    let speaker1_seat = config.speaker_seats[0].min(config.speaker_seats[1]);
    let speaker2_seat = config.speaker_seats[0].max(config.speaker_seats[1]);
    if speaker1_seat == speaker2_seat {
        return Err(DrawError::SeatConflict { seat: speaker1_seat });
    }

    // Partition into fixed (with a resolvable seat number) and sortable.
    // A member flagged fixed without a number cannot be placed anywhere;
    // it is dropped from this draw, not treated as drawable.
    let mut fixed: Vec<&Member> = Vec::new();
    let mut sortable: Vec<&Member> = Vec::new();
    for member in roster {
        if member.fixed_seat {
            if member.fixed_seat_number.is_some() {
                fixed.push(member);
            } else {
                warn!(
                    member = %member.member_name,
                    "fixed-seat member has no seat number, leaving unseated"
                );
            }
        } else {
            sortable.push(member);
        }
    }

    // Fixed numbers must be unique, and must not claim a speaker seat.
    let mut claimed: HashMap<i32, &Member> = HashMap::new();
    for &member in &fixed {
        let seat = member.fixed_seat_number.unwrap_or_default();
        if seat == speaker1_seat || seat == speaker2_seat || claimed.insert(seat, member).is_some()
        {
            return Err(DrawError::SeatConflict { seat });
        }
    }

    let speaker1 = take_speaker(&mut sortable, speaker1)?;
    let speaker2 = take_speaker(&mut sortable, speaker2)?;

    // Uniform (Fisher-Yates) shuffle of the remaining drawable members.
    sortable.shuffle(rng);

    let ring = i32::try_from(roster.len()).unwrap_or(i32::MAX);
    let mut assignments: Vec<SeatAssignment> = Vec::with_capacity(roster.len());
    let mut unfilled_seats: Vec<i32> = Vec::new();
    let mut next = sortable.into_iter();

    for seat in 1..=ring {
        if seat == speaker1_seat || seat == speaker2_seat {
            continue;
        }
        if let Some(&member) = claimed.get(&seat) {
            assignments.push(SeatAssignment::from_member(seat, member));
        } else if let Some(member) = next.next() {
            assignments.push(SeatAssignment::from_member(seat, member));
        } else {
            unfilled_seats.push(seat);
        }
    }

    // Fixed seats declared outside the ring (e.g. visitor-host benches)
    // keep their member as well.
    let mut outer: Vec<i32> = claimed.keys().copied().filter(|s| *s > ring).collect();
    outer.sort_unstable();
    for seat in outer {
        assignments.push(SeatAssignment::from_member(seat, claimed[&seat]));
    }

    assignments.push(SeatAssignment::from_member(speaker1_seat, speaker1));
    assignments.push(SeatAssignment::from_member(speaker2_seat, speaker2));
    assignments.sort_by_key(|a| a.seat);

    Ok(SeatingOrder {
        assignments,
        unfilled_seats,
    })
}

/// Resolve a speaker by display name within the drawable subset and remove
/// it from that subset. Members with empty names are never selectable.
fn take_speaker<'a>(
    sortable: &mut Vec<&'a Member>,
    name: &str,
) -> Result<&'a Member, DrawError> {
    if name.is_empty() {
        return Err(DrawError::SpeakerNotFound {
            name: name.to_string(),
        });
    }
    match sortable.iter().position(|m| m.member_name == name) {
        Some(index) => Ok(sortable.remove(index)),
        None => Err(DrawError::SpeakerNotFound {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_of(n: usize) -> Vec<Member> {
        (1..=n).map(Member::sample).collect()
    }

    #[test]
    fn test_rejects_empty_roster() {
        let err = assign_seats(
            &[],
            "A",
            "B",
            &DrawConfig::default(),
            &mut rand::thread_rng(),
        )
        .unwrap_err();
        assert!(matches!(err, DrawError::EmptyRoster));
    }

    #[test]
    fn test_rejects_equal_speakers() {
        let roster = roster_of(5);
        let err = assign_seats(
            &roster,
            "MEMBER 1",
            "MEMBER 1",
            &DrawConfig::default(),
            &mut rand::thread_rng(),
        )
        .unwrap_err();
        assert!(matches!(err, DrawError::InvalidSelection));
    }

    #[test]
    fn test_rejects_unknown_speaker() {
        let roster = roster_of(5);
        let err = assign_seats(
            &roster,
            "MEMBER 1",
            "NOBODY",
            &DrawConfig::default(),
            &mut rand::thread_rng(),
        )
        .unwrap_err();
        assert!(matches!(err, DrawError::SpeakerNotFound { name } if name == "NOBODY"));
    }

    #[test]
    fn test_rejects_fixed_member_as_speaker() {
        let mut roster = roster_of(5);
        roster[0].fixed_seat = true;
        roster[0].fixed_seat_number = Some(1);
        let err = assign_seats(
            &roster,
            "MEMBER 1",
            "MEMBER 2",
            &DrawConfig::default(),
            &mut rand::thread_rng(),
        )
        .unwrap_err();
        assert!(matches!(err, DrawError::SpeakerNotFound { .. }));
    }

    #[test]
    fn test_rejects_duplicate_fixed_seats() {
        let mut roster = roster_of(6);
        roster[0].fixed_seat = true;
        roster[0].fixed_seat_number = Some(3);
        roster[1].fixed_seat = true;
        roster[1].fixed_seat_number = Some(3);
        let err = assign_seats(
            &roster,
            "MEMBER 3",
            "MEMBER 4",
            &DrawConfig::default(),
            &mut rand::thread_rng(),
        )
        .unwrap_err();
        assert!(matches!(err, DrawError::SeatConflict { seat: 3 }));
    }

    #[test]
    fn test_rejects_fixed_seat_on_reserved_speaker_seat() {
        let mut roster = roster_of(6);
        roster[0].fixed_seat = true;
        roster[0].fixed_seat_number = Some(86);
        let err = assign_seats(
            &roster,
            "MEMBER 2",
            "MEMBER 3",
            &DrawConfig::default(),
            &mut rand::thread_rng(),
        )
        .unwrap_err();
        assert!(matches!(err, DrawError::SeatConflict { seat: 86 }));
    }

    #[test]
    fn test_fixed_member_without_number_is_left_unseated() {
        let mut roster = roster_of(6);
        roster[5].fixed_seat = true;
        roster[5].fixed_seat_number = None;
        let order = assign_seats(
            &roster,
            "MEMBER 1",
            "MEMBER 2",
            &DrawConfig::default(),
            &mut rand::thread_rng(),
        )
        .unwrap();
        assert!(order
            .assignments
            .iter()
            .all(|a| a.member_name != "MEMBER 6"));
        // 5 placed members out of a 6-seat ring minus nothing reserved in range
        assert_eq!(order.assignments.len(), 5);
    }
}
