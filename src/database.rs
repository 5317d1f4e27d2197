//! PostgreSQL connection pool shared by every request.
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Connection resource handed to handlers through [`crate::AppState`].
#[derive(Clone)]
pub struct Database {
    pub postgres: PgPool,
}

impl Database {
    /// Init database connections.
    pub async fn new(url: &str, pool: u32) -> Result<Self, sqlx::Error> {
        if pool == 0 {
            return Err(sqlx::Error::Configuration(
                "`postgres.pool_size` must be at least 1".into(),
            ));
        }

        let postgres = PgPoolOptions::new()
            .max_connections(pool)
            .connect(url)
            .await?;

        tracing::info!(pool_size = pool, "postgres connected");

        Ok(Self { postgres })
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.postgres.close().await;
        tracing::info!("postgres connections closed");
    }
}
