use crate::migration::ScriptFile;
use crate::parser::{collect_scripts_from_directory, ParseError};

use std::path::Path;


/// Scripts newer than the version observed at the start of a run, in execution order.
/// Computed once; never re-filtered while the run is in progress.
pub struct MigrationBatch {
    current_version: i64,
    inner: Vec<ScriptFile>,
}

impl MigrationBatch {
    /// Keep only scripts whose version is strictly greater than `current_version`,
    /// preserving their order.
    pub fn new(scripts: Vec<ScriptFile>, current_version: i64) -> Self {
        let inner = scripts
            .into_iter()
            .filter(|script| {
                let keep = script.version > current_version;
                if !keep {
                    tracing::debug!(
                        "Skipping '{}' (version {} <= current version {})",
                        script.name, script.version, current_version
                    );
                }
                keep
            })
            .collect();

        MigrationBatch { current_version, inner }
    }

    pub fn from_directory(directory: &Path, current_version: i64) -> Result<Self, ParseError> {
        let scripts = collect_scripts_from_directory(directory)?;
        Ok(MigrationBatch::new(scripts, current_version))
    }

    pub fn current_version(&self) -> i64 {
        self.current_version
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScriptFile> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.inner.iter().map(|script| script.name.clone()).collect()
    }
}
