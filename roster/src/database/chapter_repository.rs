//! Chapter profile repository
//!
//! The profile is a single row carrying the chapter identity printed on
//! exported documents.

use sqlx::PgPool;

use super::DatabaseError;
use crate::models::{ChapterProfile, ChapterProfileUpdate};

/// Repository for the chapter profile singleton
pub struct ChapterRepository {
    pool: PgPool,
}

impl ChapterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self) -> Result<Option<ChapterProfile>, DatabaseError> {
        let row = sqlx::query_as::<_, ChapterProfile>(
            "SELECT id, chapter_name, meeting_day, city FROM chapter_profile LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Insert the profile on first write, update it afterwards.
    pub async fn upsert(
        &self,
        update: ChapterProfileUpdate,
    ) -> Result<ChapterProfile, DatabaseError> {
        let row = match self.get().await? {
            Some(existing) => {
                sqlx::query_as::<_, ChapterProfile>(
                    r#"
                    UPDATE chapter_profile
                    SET chapter_name = $2, meeting_day = $3, city = $4
                    WHERE id = $1
                    RETURNING id, chapter_name, meeting_day, city
                    "#,
                )
                .bind(existing.id)
                .bind(&update.chapter_name)
                .bind(&update.meeting_day)
                .bind(&update.city)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ChapterProfile>(
                    r#"
                    INSERT INTO chapter_profile (chapter_name, meeting_day, city)
                    VALUES ($1, $2, $3)
                    RETURNING id, chapter_name, meeting_day, city
                    "#,
                )
                .bind(&update.chapter_name)
                .bind(&update.meeting_day)
                .bind(&update.city)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(row)
    }
}
