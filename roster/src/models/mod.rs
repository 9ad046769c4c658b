//! Models module for the chapter roster
//!
//! This module contains the data structures used to represent members,
//! roles, the chapter profile, and the computed seating order.

pub mod chapter_models;

// Re-export commonly used types for convenience
pub use chapter_models::{
    ChapterProfile, ChapterProfileUpdate, Member, MemberUpdate, NewMember, NewRole, Role,
    SeatAssignment,
};
