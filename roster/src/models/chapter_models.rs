//! Chapter roster data structures
//!
//! Long-lived records (members, roles, chapter profile) mutated by CRUD
//! operations, and the ephemeral `SeatAssignment` snapshot produced by the
//! draw engine on every invocation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One roster entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Member {
    pub id: Uuid,
    pub member_name: String,
    pub company_name: String,
    /// Descriptive activity line, display only, may be empty
    pub activity: String,
    pub fixed_seat: bool,
    /// Declared seat number, meaningful only when `fixed_seat` is true.
    /// A fixed member without a number is excluded from placement.
    pub fixed_seat_number: Option<i32>,
    pub role_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Build a plain drawable member for docs and tests.
    pub fn sample(n: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            member_name: format!("MEMBER {n}"),
            company_name: format!("COMPANY {n}"),
            activity: format!("Activity {n}"),
            fixed_seat: false,
            fixed_seat_number: None,
            role_id: None,
            created_at: Utc::now(),
        }
    }
}

/// Create member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMember {
    pub member_name: String,
    pub company_name: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub fixed_seat: bool,
    pub fixed_seat_number: Option<i32>,
    pub role_id: Option<Uuid>,
}

/// Partial update payload; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberUpdate {
    pub member_name: Option<String>,
    pub company_name: Option<String>,
    pub activity: Option<String>,
    pub fixed_seat: Option<bool>,
    pub fixed_seat_number: Option<Option<i32>>,
    pub role_id: Option<Option<Uuid>>,
}

/// Chapter role (e.g. President, Membership Committee, Member)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Role {
    pub id: Uuid,
    pub role: String,
    pub description: Option<String>,
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRole {
    pub role: String,
    pub description: Option<String>,
}

/// Chapter identity shown on exported documents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct ChapterProfile {
    pub id: Uuid,
    pub chapter_name: String,
    pub meeting_day: Option<String>,
    pub city: Option<String>,
}

/// Chapter profile upsert payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterProfileUpdate {
    pub chapter_name: String,
    pub meeting_day: Option<String>,
    pub city: Option<String>,
}

/// One seat in a computed presentation order.
///
/// Field values are copied from the source member at computation time; the
/// order is a snapshot, never a live view of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub seat: i32,
    pub member_name: String,
    pub company_name: String,
    pub activity: String,
}

impl SeatAssignment {
    pub fn from_member(seat: i32, member: &Member) -> Self {
        Self {
            seat,
            member_name: member.member_name.clone(),
            company_name: member.company_name.clone(),
            activity: member.activity.clone(),
        }
    }
}
