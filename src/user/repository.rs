//! Handle database requests.

use axum::extract::FromRef;
use sqlx::{Pool, Postgres};

use crate::AppState;
use crate::error::Result;
use crate::user::User;

/// One statement per operation against the `users` table.
#[derive(Clone)]
pub struct UserRepository {
    pool: Pool<Postgres>,
}

impl UserRepository {
    /// Create a new [`UserRepository`].
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Fetch every [`User`]. An empty table gives an empty vector.
    pub async fn list(&self) -> Result<Vec<User>> {
        let users =
            sqlx::query_as::<_, User>(r#"SELECT id, name, email FROM users"#)
                .fetch_all(&self.pool)
                .await?;

        Ok(users)
    }

    /// Find a [`User`] using `id` field.
    ///
    /// Fails with [`sqlx::Error::RowNotFound`] when nothing matches.
    pub async fn find_by_id(&self, user_id: i32) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email FROM users WHERE id = $1"#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Insert [`User`] into database. `id` is assigned by PostgreSQL.
    pub async fn insert(&self, user: &User) -> Result<()> {
        sqlx::query(r#"INSERT INTO users (name, email) VALUES ($1, $2)"#)
            .bind(&user.name)
            .bind(&user.email)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Update name and email of the row matching `id`.
    /// Zero matched rows is not an error.
    pub async fn update(&self, user: &User) -> Result<()> {
        sqlx::query(r#"UPDATE users SET name = $1, email = $2 WHERE id = $3"#)
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Delete the row matching `id`, if any.
    pub async fn delete(&self, user_id: i32) -> Result<()> {
        sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

impl FromRef<AppState> for UserRepository {
    fn from_ref(state: &AppState) -> UserRepository {
        UserRepository::new(state.db.postgres.clone())
    }
}
