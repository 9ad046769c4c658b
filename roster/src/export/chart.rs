//! Seating chart export
//!
//! Lays the ring seats out evenly on a circle and the speaker seats as
//! separate highlighted boxes, producing the geometry the printable
//! seating map is drawn from. Coordinates are millimeters on a landscape
//! A4 page, matching the chapter's map template.

use serde::{Deserialize, Serialize};

use crate::draw::DrawConfig;
use crate::models::SeatAssignment;

const CENTER_X: f64 = 148.5;
const CENTER_Y: f64 = 120.0;
const RADIUS: f64 = 70.0;
const SPEAKER_Y: f64 = 180.0;
const SPEAKER_X0: f64 = 70.0;
const SPEAKER_X_STEP: f64 = 80.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingChart {
    pub ring_seats: Vec<RingSeat>,
    pub speaker_seats: Vec<SpeakerBox>,
}

/// One occupied seat on the circle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingSeat {
    pub seat: i32,
    pub member_name: String,
    pub x: f64,
    pub y: f64,
}

/// One speaker highlight box below the circle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerBox {
    /// 1-based speaker position ("PALESTRANTE 1" / "PALESTRANTE 2")
    pub position: usize,
    pub seat: i32,
    pub member_name: String,
    pub x: f64,
    pub y: f64,
}

/// Build the chart geometry for a computed order.
///
/// `ring` is the primary seat range (`1..=ring`); seats in that range with
/// no matching assignment are skipped, so gaps in the order simply leave
/// empty spots on the circle.
pub fn build_chart(order: &[SeatAssignment], ring: i32, config: &DrawConfig) -> SeatingChart {
    let total = f64::from(ring.max(1));
    let ring_seats = (1..=ring)
        .filter_map(|seat| {
            let assignment = order.iter().find(|a| a.seat == seat)?;
            let index = f64::from(seat - 1);
            let angle = index * 2.0 * std::f64::consts::PI / total - std::f64::consts::FRAC_PI_2;
            Some(RingSeat {
                seat,
                member_name: assignment.member_name.clone(),
                x: CENTER_X + RADIUS * angle.cos(),
                y: CENTER_Y + RADIUS * angle.sin(),
            })
        })
        .collect();

    let mut reserved = config.speaker_seats;
    reserved.sort_unstable();
    let speaker_seats = reserved
        .iter()
        .enumerate()
        .filter_map(|(index, &seat)| {
            let assignment = order.iter().find(|a| a.seat == seat)?;
            Some(SpeakerBox {
                position: index + 1,
                seat,
                member_name: assignment.member_name.clone(),
                x: SPEAKER_X0 + index as f64 * SPEAKER_X_STEP,
                y: SPEAKER_Y,
            })
        })
        .collect();

    SeatingChart {
        ring_seats,
        speaker_seats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(n: i32, name: &str) -> SeatAssignment {
        SeatAssignment {
            seat: n,
            member_name: name.to_string(),
            company_name: String::new(),
            activity: String::new(),
        }
    }

    #[test]
    fn test_skips_unoccupied_ring_seats() {
        let order = vec![seat(1, "A"), seat(3, "B"), seat(86, "S1"), seat(87, "S2")];
        let chart = build_chart(&order, 4, &DrawConfig::default());
        let seats: Vec<i32> = chart.ring_seats.iter().map(|s| s.seat).collect();
        assert_eq!(seats, vec![1, 3]);
        assert_eq!(chart.speaker_seats.len(), 2);
        assert_eq!(chart.speaker_seats[0].position, 1);
        assert_eq!(chart.speaker_seats[0].seat, 86);
    }

    #[test]
    fn test_first_ring_seat_sits_at_top_of_circle() {
        let order = vec![seat(1, "A")];
        let chart = build_chart(&order, 20, &DrawConfig::default());
        let top = &chart.ring_seats[0];
        assert!((top.x - CENTER_X).abs() < 1e-9);
        assert!((top.y - (CENTER_Y - RADIUS)).abs() < 1e-9);
    }
}
