use crate::db::sql_common::{POSTGRES_DEFAULT_PORT, POSTGRES_QUERY_VERSION, POSTGRES_UPDATE_VERSION};
use crate::db::{check_version_updated, parse_version_row, Credentials, EngineError, SqlExecutor, VersionStore};

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};


pub struct PostgresEngine {
    pool: PgPool,
}

impl PostgresEngine {
    pub fn new(credentials: &Credentials) -> Self {
        let options = PgConnectOptions::new()
            .host(&credentials.host)
            .port(credentials.port.unwrap_or(POSTGRES_DEFAULT_PORT))
            .username(&credentials.username)
            .password(&credentials.password)
            .database(&credentials.database);

        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_lazy_with(options);

        PostgresEngine { pool }
    }
}


impl SqlExecutor for PostgresEngine {
    async fn execute_script(&mut self, sql: &str) -> Result<(), EngineError> {
        let mut tx = self.pool.begin().await?;

        if let Err(e) = sqlx::raw_sql(sql).execute(&mut *tx).await {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!("Rollback failed: {rollback}");
            }
            return Err(e.into());
        }

        tx.commit().await?;
        Ok(())
    }
}

impl VersionStore for PostgresEngine {
    async fn read_version(&mut self) -> Result<i64, EngineError> {
        let row: Option<Option<String>> = sqlx::query_scalar(POSTGRES_QUERY_VERSION)
            .fetch_optional(&self.pool)
            .await?;

        parse_version_row(row)
    }

    async fn write_version(&mut self, version: i64) -> Result<(), EngineError> {
        let result = sqlx::query(POSTGRES_UPDATE_VERSION)
            .bind(version)
            .execute(&self.pool)
            .await?;

        check_version_updated(result.rows_affected())
    }
}
