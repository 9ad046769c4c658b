//! Roster - Weekly Meeting Presentation Draw
//!
//! This crate manages a business-networking chapter's weekly roster: the
//! member records, their roles and fixed seats, and the randomized
//! presentation order drawn around two chosen speakers.
//!
//! ## Call Chain
//! All draw operations flow through the pure engine:
//! Roster snapshot -> validate speakers -> shuffle -> seat fill -> SeatingOrder
//!
//! ## Quick Start
//!
//! ```rust
//! use roster::draw::{assign_seats, DrawConfig};
//! use roster::models::Member;
//!
//! let members: Vec<Member> = (1..=20).map(|i| Member::sample(i)).collect();
//! let order = assign_seats(
//!     &members,
//!     &members[2].member_name,
//!     &members[14].member_name,
//!     &DrawConfig::default(),
//!     &mut rand::thread_rng(),
//! )
//! .unwrap();
//! assert_eq!(order.assignments.len(), 20);
//! ```

// Core error handling
pub mod error;

// Roster data models
pub mod models;

// Seat assignment engine - THE single draw path
pub mod draw;

// Export renderers (spreadsheet, slide deck, seating chart)
pub mod export;

// Database integration (when enabled)
#[cfg(feature = "database")]
pub mod database;

pub use error::RosterError;
