//! Export renderer tests over a real computed order

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use roster::draw::{assign_seats, DrawConfig};
use roster::export::{build_chart, build_deck, render_csv};
use roster::models::Member;

fn drawn_order() -> (Vec<Member>, roster::draw::SeatingOrder) {
    let mut roster: Vec<Member> = (1..=20).map(Member::sample).collect();
    roster[7].fixed_seat = true;
    roster[7].fixed_seat_number = Some(8);
    let mut rng = StdRng::seed_from_u64(99);
    let order = assign_seats(
        &roster,
        "MEMBER 3",
        "MEMBER 15",
        &DrawConfig::default(),
        &mut rng,
    )
    .unwrap();
    (roster, order)
}

#[test]
fn test_csv_covers_the_whole_order() {
    let (_, order) = drawn_order();
    let csv = render_csv(&order.assignments).unwrap();

    assert!(csv.starts_with('\u{feff}'), "BOM required for Excel");
    // header + one row per placed member
    assert_eq!(csv.lines().count(), order.assignments.len() + 1);
    assert!(csv.contains("86,\"MEMBER 3\"") || csv.contains("86,MEMBER 3"));
}

#[test]
fn test_deck_has_title_plus_one_slide_per_seat() {
    let (_, order) = drawn_order();
    let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    let deck = build_deck("Ordem de Apresentação", date, &order.assignments);

    assert_eq!(deck.member_slides.len(), order.assignments.len());
    assert_eq!(deck.title_slide.title, "Ordem de Apresentação");
    // slide fields are copied from the assignment snapshot
    let first = &deck.member_slides[0];
    assert_eq!(first.seat, order.assignments[0].seat);
    assert_eq!(first.member_name, order.assignments[0].member_name);
}

#[test]
fn test_chart_partitions_ring_and_speaker_seats() {
    let (roster, order) = drawn_order();
    let ring = roster.len() as i32;
    let chart = build_chart(&order.assignments, ring, &DrawConfig::default());

    // 18 occupied ring seats (seats 19 and 20 stayed open) + 2 speakers
    assert_eq!(chart.ring_seats.len(), 18);
    assert_eq!(chart.speaker_seats.len(), 2);
    assert!(chart.ring_seats.iter().all(|s| s.seat >= 1 && s.seat <= ring));
    assert!(!chart.ring_seats.iter().any(|s| s.seat == 19 || s.seat == 20));
    assert_eq!(chart.speaker_seats[0].member_name, "MEMBER 3");
    assert_eq!(chart.speaker_seats[1].member_name, "MEMBER 15");

    // every plotted seat stays on the circle
    for s in &chart.ring_seats {
        let dx = s.x - 148.5;
        let dy = s.y - 120.0;
        assert!(((dx * dx + dy * dy).sqrt() - 70.0).abs() < 1e-9);
    }
}
