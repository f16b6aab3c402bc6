mod collection;

pub use collection::MigrationBatch;

use crate::parser::{ParseError, ParseErrorKind, VersionKey};

use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::PathBuf;


/// A numbered script found in the migration directory.
#[derive(Clone, Debug)]
pub struct ScriptFile {
    pub name: String,
    pub path: PathBuf,
    pub key: VersionKey,
    pub version: i64,
}

impl ScriptFile {
    pub fn new(name: String, path: PathBuf, version: i64) -> Self {
        let key = VersionKey::parse(&name);
        ScriptFile { name, path, key, version }
    }

    /// Read the script text from disk.
    pub fn load(&self) -> Result<Script, ParseError> {
        let sql = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ParseError { kind: ParseErrorKind::FileNotFound(self.path.clone()) },
            _ => ParseError::io(&self.path, e),
        })?;

        Ok(Script::new(sql))
    }
}


/// Script text as it will be sent to the database.
#[derive(Debug)]
pub struct Script {
    pub sql: String,
    pub checksum: String,
}

impl Script {
    pub fn new(sql: String) -> Self {
        let checksum = format!("{:x}", Sha256::digest(sql.as_bytes()));
        Script { sql, checksum }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_script_text_with_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("7.sql");
        fs::write(&path, "SELECT 1;").unwrap();

        let script = ScriptFile::new("7.sql".into(), path, 7).load().unwrap();
        assert_eq!(script.sql, "SELECT 1;");
        assert_eq!(script.checksum.len(), 64);
        assert_eq!(script.checksum, Script::new("SELECT 1;".into()).checksum);
        assert_ne!(script.checksum, Script::new("SELECT 2;".into()).checksum);
    }

    #[test]
    fn missing_script_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("8.sql");

        let err = ScriptFile::new("8.sql".into(), path.clone(), 8).load().unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::FileNotFound(p) if p == path));
    }

    #[test]
    fn non_utf8_script_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("9.sql");
        fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        let err = ScriptFile::new("9.sql".into(), path, 9).load().unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::Io { .. }));
    }
}
