use crate::migration::ScriptFile;
use crate::parser::error::ParseErrorKind;
use crate::parser::{ParseError, VersionKey};

use std::fs;
use std::path::Path;


/// Only files ending with this (case-sensitive) suffix are migration scripts.
pub const SCRIPT_EXTENSION: &str = ".sql";


/// Extract the script version from a file name: "045.createtable.sql" -> 45
pub fn parse_version_from_file_name(file_name: &str) -> Result<i64, ParseError> {
    let key = VersionKey::parse(file_name);
    let digits = key.first_number().ok_or_else(|| ParseError {
        kind: ParseErrorKind::InvalidVersionNumber(file_name.to_string()),
    })?;

    digits.parse::<i64>().map_err(|_| ParseError {
        kind: ParseErrorKind::InvalidVersionNumber(file_name.to_string()),
    })
}

/// A script name starts with a decimal digit and ends with the script extension.
pub fn is_script_file_name(file_name: &str) -> bool {
    file_name.starts_with(|c: char| c.is_ascii_digit()) && file_name.ends_with(SCRIPT_EXTENSION)
}


/// List every script in `directory`, in natural order of file name.
/// Subdirectories and non-script files are skipped. An empty result is not an error.
pub fn collect_scripts_from_directory(directory: &Path) -> Result<Vec<ScriptFile>, ParseError> {
    if !directory.is_dir() {
        return Err(ParseError { kind: ParseErrorKind::InvalidDirectory(directory.to_path_buf()) })
    }

    let mut scripts = fs::read_dir(directory)
        .map_err(|e| ParseError::io(directory, e))?
        .filter_map(|entry| {
            let entry = match entry {
                Ok(entry) => entry,
                // Fatal: reading the directory failed.
                Err(e) => return Some(Err(ParseError::io(directory, e))),
            };

            let path = entry.path();
            if !path.is_file() {
                tracing::debug!("Skipping non-file: {:?}", path);
                return None;
            }

            let file_name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(name) => {
                    tracing::debug!("Skipping non UTF-8 file name: {:?}", name);
                    return None;
                }
            };

            if !is_script_file_name(&file_name) {
                tracing::debug!("Skipping {:?}: not a numbered '{}' script", file_name, SCRIPT_EXTENSION);
                return None;
            }

            Some(parse_version_from_file_name(&file_name).map(|version| {
                ScriptFile::new(file_name, path, version)
            }))
        })
        .collect::<Result<Vec<ScriptFile>, ParseError>>()?;

    scripts.sort_by(|a, b| a.key.cmp(&b.key));

    for pair in scripts.windows(2) {
        if pair[0].version == pair[1].version {
            tracing::warn!(
                "Scripts '{}' and '{}' share version {}; both will run",
                pair[0].name, pair[1].name, pair[0].version
            );
        }
    }

    Ok(scripts)
}
