pub const VERSION_TABLE: &str = "versionTable";

pub const MYSQL_DEFAULT_PORT: u16 = 3306;
pub const POSTGRES_DEFAULT_PORT: u16 = 5432;

pub const MYSQL_QUERY_VERSION: &str = r#"
    SELECT CAST(version AS CHAR)
    FROM versionTable
"#;
pub const MYSQL_UPDATE_VERSION: &str = r#"
    UPDATE versionTable
    SET version = ?
"#;

pub const POSTGRES_QUERY_VERSION: &str = r#"
    SELECT CAST(version AS TEXT)
    FROM versionTable
"#;
pub const POSTGRES_UPDATE_VERSION: &str = r#"
    UPDATE versionTable
    SET version = $1
"#;
