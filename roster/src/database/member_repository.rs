//! Member repository — roster CRUD
//!
//! The draw engine never talks to the database; callers fetch a roster
//! snapshot here and hand it to the engine.

use sqlx::PgPool;
use uuid::Uuid;

use super::DatabaseError;
use crate::models::{Member, MemberUpdate, NewMember};

/// Repository for member records
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Full roster snapshot, ordered by member name
    pub async fn list(&self) -> Result<Vec<Member>, DatabaseError> {
        let rows = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, member_name, company_name, activity, fixed_seat,
                   fixed_seat_number, role_id, created_at
            FROM members
            ORDER BY member_name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Member>, DatabaseError> {
        let row = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, member_name, company_name, activity, fixed_seat,
                   fixed_seat_number, role_id, created_at
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn create(&self, new: NewMember) -> Result<Member, DatabaseError> {
        let row = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members
                (member_name, company_name, activity, fixed_seat, fixed_seat_number, role_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, member_name, company_name, activity, fixed_seat,
                      fixed_seat_number, role_id, created_at
            "#,
        )
        .bind(&new.member_name)
        .bind(&new.company_name)
        .bind(&new.activity)
        .bind(new.fixed_seat)
        .bind(new.fixed_seat_number)
        .bind(new.role_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Partial update: unset fields keep their stored value.
    pub async fn update(&self, id: Uuid, update: MemberUpdate) -> Result<Member, DatabaseError> {
        let mut member = self.get(id).await?.ok_or(DatabaseError::NotFound {
            entity: "member",
            id,
        })?;

        if let Some(name) = update.member_name {
            member.member_name = name;
        }
        if let Some(company) = update.company_name {
            member.company_name = company;
        }
        if let Some(activity) = update.activity {
            member.activity = activity;
        }
        if let Some(fixed_seat) = update.fixed_seat {
            member.fixed_seat = fixed_seat;
        }
        if let Some(number) = update.fixed_seat_number {
            member.fixed_seat_number = number;
        }
        if let Some(role_id) = update.role_id {
            member.role_id = role_id;
        }

        sqlx::query(
            r#"
            UPDATE members
            SET member_name = $2, company_name = $3, activity = $4,
                fixed_seat = $5, fixed_seat_number = $6, role_id = $7
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&member.member_name)
        .bind(&member.company_name)
        .bind(&member.activity)
        .bind(member.fixed_seat)
        .bind(member.fixed_seat_number)
        .bind(member.role_id)
        .execute(&self.pool)
        .await?;

        Ok(member)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound {
                entity: "member",
                id,
            });
        }

        Ok(())
    }
}
