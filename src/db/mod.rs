mod error;
mod mysql;
mod postgres;
pub mod sql_common;

pub use error::{EngineError, EngineErrorKind};
pub use mysql::MySqlEngine;
pub use postgres::PostgresEngine;

use std::fmt;


/// Where to connect and as whom.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub host: String,
    pub port: Option<u16>,
    pub database: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("password", &"********")
            .finish()
    }
}


/// Runs a block of SQL text as a single unit.
#[allow(async_fn_in_trait)]
pub trait SqlExecutor {
    /// Commit on success. On failure the transaction is rolled back before the error is returned.
    async fn execute_script(&mut self, sql: &str) -> Result<(), EngineError>;
}

/// Reads and writes the single persisted version value.
#[allow(async_fn_in_trait)]
pub trait VersionStore {
    async fn read_version(&mut self) -> Result<i64, EngineError>;
    async fn write_version(&mut self, version: i64) -> Result<(), EngineError>;
}


pub enum EngineBackend {
    MySql(MySqlEngine),
    Postgres(PostgresEngine),
}

impl EngineBackend {
    pub fn name(&self) -> &'static str {
        match self {
            EngineBackend::MySql(_) => "MySQL",
            EngineBackend::Postgres(_) => "Postgres",
        }
    }
}

impl SqlExecutor for EngineBackend {
    async fn execute_script(&mut self, sql: &str) -> Result<(), EngineError> {
        match self {
            EngineBackend::MySql(engine) => engine.execute_script(sql).await,
            EngineBackend::Postgres(engine) => engine.execute_script(sql).await,
        }
    }
}

impl VersionStore for EngineBackend {
    async fn read_version(&mut self) -> Result<i64, EngineError> {
        match self {
            EngineBackend::MySql(engine) => engine.read_version().await,
            EngineBackend::Postgres(engine) => engine.read_version().await,
        }
    }

    async fn write_version(&mut self, version: i64) -> Result<(), EngineError> {
        match self {
            EngineBackend::MySql(engine) => engine.write_version(version).await,
            EngineBackend::Postgres(engine) => engine.write_version(version).await,
        }
    }
}


/// The version row must exist and hold a non-negative number.
pub(crate) fn check_version(version: Option<i64>) -> Result<i64, EngineError> {
    match version {
        None => Err(EngineError { kind: EngineErrorKind::VersionRowMissing(sql_common::VERSION_TABLE) }),
        Some(v) if v < 0 => Err(EngineError { kind: EngineErrorKind::NegativeVersion(v) }),
        Some(v) => Ok(v),
    }
}

/// Parse the version column read back as text: an optional '-' then decimal digits only.
/// `row` is `None` when the table is empty and `Some(None)` when the column is NULL.
pub(crate) fn parse_version_row(row: Option<Option<String>>) -> Result<i64, EngineError> {
    let text = match row {
        None => return check_version(None),
        Some(None) => return Err(EngineError { kind: EngineErrorKind::MalformedVersion("NULL".to_string()) }),
        Some(Some(text)) => text,
    };

    let digits = text.strip_prefix('-').unwrap_or(&text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError { kind: EngineErrorKind::MalformedVersion(text) });
    }

    let version = text
        .parse::<i64>()
        .map_err(|_| EngineError { kind: EngineErrorKind::MalformedVersion(text.clone()) })?;

    check_version(Some(version))
}

/// The version update must have matched the singleton row.
pub(crate) fn check_version_updated(rows_affected: u64) -> Result<(), EngineError> {
    if rows_affected == 0 {
        return Err(EngineError { kind: EngineErrorKind::VersionRowMissing(sql_common::VERSION_TABLE) });
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_debug_hides_password() {
        let credentials = Credentials {
            username: "myUser".into(),
            host: "myDbServer".into(),
            port: None,
            database: "techTestDB".into(),
            password: "SuperSecretPassword1!".into(),
        };

        let text = format!("{credentials:?}");
        assert!(text.contains("myDbServer"));
        assert!(!text.contains("SuperSecretPassword1!"));
    }

    #[test]
    fn check_version_accepts_only_present_non_negative_values() {
        assert_eq!(check_version(Some(0)).unwrap(), 0);
        assert_eq!(check_version(Some(45)).unwrap(), 45);
        assert!(matches!(check_version(None).unwrap_err().kind, EngineErrorKind::VersionRowMissing("versionTable")));
        assert!(matches!(check_version(Some(-1)).unwrap_err().kind, EngineErrorKind::NegativeVersion(-1)));
    }

    #[test]
    fn parse_version_row_is_strict() {
        let text = |s: &str| Some(Some(s.to_string()));

        assert_eq!(parse_version_row(text("0")).unwrap(), 0);
        assert_eq!(parse_version_row(text("45")).unwrap(), 45);
        assert_eq!(parse_version_row(text("007")).unwrap(), 7);

        for bad in ["abc", "12abc", "3.7", "", " 5", "+5", "-", "99999999999999999999"] {
            let err = parse_version_row(text(bad)).unwrap_err();
            assert!(
                matches!(err.kind, EngineErrorKind::MalformedVersion(ref v) if v == bad),
                "Expected {bad:?} to be rejected as malformed, got {err}"
            );
        }

        assert!(matches!(parse_version_row(text("-2")).unwrap_err().kind, EngineErrorKind::NegativeVersion(-2)));
        assert!(matches!(parse_version_row(Some(None)).unwrap_err().kind, EngineErrorKind::MalformedVersion(_)));
        assert!(matches!(parse_version_row(None).unwrap_err().kind, EngineErrorKind::VersionRowMissing(_)));
    }

    #[test]
    fn version_update_must_match_a_row() {
        assert!(check_version_updated(1).is_ok());
        assert!(matches!(check_version_updated(0).unwrap_err().kind, EngineErrorKind::VersionRowMissing("versionTable")));
    }
}
