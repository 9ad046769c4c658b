//! Role repository — chapter role CRUD

use sqlx::PgPool;
use uuid::Uuid;

use super::DatabaseError;
use crate::models::{NewRole, Role};

/// Repository for chapter roles
pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Role>, DatabaseError> {
        let rows = sqlx::query_as::<_, Role>(
            "SELECT id, role, description FROM roles ORDER BY role",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn create(&self, new: NewRole) -> Result<Role, DatabaseError> {
        let row = sqlx::query_as::<_, Role>(
            r#"
            INSERT INTO roles (role, description)
            VALUES ($1, $2)
            RETURNING id, role, description
            "#,
        )
        .bind(&new.role)
        .bind(&new.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound { entity: "role", id });
        }

        Ok(())
    }
}
