//! Export renderers for a computed seating order
//!
//! These renderers are presentation collaborators: they consume a finished
//! `SeatAssignment` list and never touch raw member records or the random
//! source, so the draw invariants stay isolated in the engine.
//!
//! Binary document encoding (.pptx / .pdf) happens client-side; the deck
//! and chart renderers emit the serialized render models those documents
//! are built from.

pub mod chart;
pub mod deck;
pub mod spreadsheet;

pub use chart::{build_chart, RingSeat, SeatingChart, SpeakerBox};
pub use deck::{build_deck, MemberSlide, SlideDeck, TitleSlide};
pub use spreadsheet::render_csv;
