//! Slide deck export
//!
//! Builds the render model for the weekly presentation deck: a title slide
//! followed by one content slide per seat. Styling constants mirror the
//! chapter's deck template.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::SeatAssignment;

/// Deck header/background color
pub const PRIMARY_COLOR: &str = "002E5D";
/// Body text color on content slides
pub const TEXT_COLOR: &str = "333333";
/// Activity line color on content slides
pub const ACCENT_COLOR: &str = "666666";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideDeck {
    pub title_slide: TitleSlide,
    pub member_slides: Vec<MemberSlide>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleSlide {
    pub title: String,
    pub date: NaiveDate,
    pub background_color: String,
}

/// One content slide; fields are copied verbatim from the seat assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSlide {
    pub seat: i32,
    pub member_name: String,
    pub company_name: String,
    pub activity: String,
    pub header_color: String,
}

/// Build the deck model for a computed order.
pub fn build_deck(title: &str, date: NaiveDate, order: &[SeatAssignment]) -> SlideDeck {
    SlideDeck {
        title_slide: TitleSlide {
            title: title.to_string(),
            date,
            background_color: PRIMARY_COLOR.to_string(),
        },
        member_slides: order
            .iter()
            .map(|assignment| MemberSlide {
                seat: assignment.seat,
                member_name: assignment.member_name.clone(),
                company_name: assignment.company_name.clone(),
                activity: assignment.activity.clone(),
                header_color: PRIMARY_COLOR.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_content_slide_per_seat() {
        let order = vec![
            SeatAssignment {
                seat: 1,
                member_name: "A".to_string(),
                company_name: "B".to_string(),
                activity: "C".to_string(),
            },
            SeatAssignment {
                seat: 86,
                member_name: "D".to_string(),
                company_name: "E".to_string(),
                activity: String::new(),
            },
        ];
        let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let deck = build_deck("Ordem de Apresentação", date, &order);
        assert_eq!(deck.member_slides.len(), 2);
        assert_eq!(deck.member_slides[1].seat, 86);
        assert_eq!(deck.title_slide.date, date);
    }
}
