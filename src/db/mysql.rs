use crate::db::sql_common::{MYSQL_DEFAULT_PORT, MYSQL_QUERY_VERSION, MYSQL_UPDATE_VERSION};
use crate::db::{check_version_updated, parse_version_row, Credentials, EngineError, SqlExecutor, VersionStore};

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};


/// MySQL backend. Note that MySQL commits DDL implicitly, so a script mixing DDL
/// with a failing statement is only rolled back up to the last DDL.
pub struct MySqlEngine {
    pool: MySqlPool,
}

impl MySqlEngine {
    /// No connection is opened until the first query.
    pub fn new(credentials: &Credentials) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&credentials.host)
            .port(credentials.port.unwrap_or(MYSQL_DEFAULT_PORT))
            .username(&credentials.username)
            .password(&credentials.password)
            .database(&credentials.database);

        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect_lazy_with(options);

        MySqlEngine { pool }
    }
}


impl SqlExecutor for MySqlEngine {
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

impl VersionStore for MySqlEngine {
    async fn read_version(&mut self) -> Result<i64, EngineError> {
        let row: Option<Option<String>> = sqlx::query_scalar(MYSQL_QUERY_VERSION)
            .fetch_optional(&self.pool)
            .await?;

        parse_version_row(row)
    }

    async fn write_version(&mut self, version: i64) -> Result<(), EngineError> {
        let result = sqlx::query(MYSQL_UPDATE_VERSION)
            .bind(version)
            .execute(&self.pool)
            .await?;

        // sqlx sets CLIENT_FOUND_ROWS, so this counts matched rows, not changed ones.
        check_version_updated(result.rows_affected())
    }
}
