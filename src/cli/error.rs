use crate::{db::EngineError, output::MigrationReport, parser::ParseError};

use std::error::Error;
use std::fmt;
use tracing::subscriber::SetGlobalDefaultError;


#[derive(Debug)]
pub struct UpgradeError {
    pub kind: UpgradeErrorKind,
    /// Progress made before the failure; `None` if the current version was never read.
    pub report: Option<MigrationReport>,
}

impl UpgradeError {
    pub fn new(kind: UpgradeErrorKind) -> Self {
        UpgradeError { kind, report: None }
    }

    pub fn with_report(self, report: MigrationReport) -> Self {
        UpgradeError { report: Some(report), ..self }
    }

    /// Name of the step that failed.
    pub fn phase(&self) -> &'static str {
        match self.kind {
            UpgradeErrorKind::Discovery(_) => "discovery",
            UpgradeErrorKind::ScriptExecution { .. } => "script execution",
            UpgradeErrorKind::ScriptRead { .. } => "script read",
            UpgradeErrorKind::SetGlobalDefault(_) => "logging setup",
            UpgradeErrorKind::VersionRead(_) => "version read",
            UpgradeErrorKind::VersionWrite { .. } => "version write",
        }
    }

    /// File name of the script in progress, if the failure happened while applying one.
    pub fn script(&self) -> Option<&str> {
        match &self.kind {
            UpgradeErrorKind::ScriptExecution { script, .. }
            | UpgradeErrorKind::ScriptRead { script, .. }
            | UpgradeErrorKind::VersionWrite { script, .. } => Some(script.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for UpgradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UpgradeError: {}", self.kind)
    }
}

impl Error for UpgradeError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
	}
}

#[derive(Debug)]
pub enum UpgradeErrorKind {
    Discovery(ParseError),
    ScriptExecution { script: String, source: EngineError },
    ScriptRead { script: String, source: ParseError },
    SetGlobalDefault(SetGlobalDefaultError),
    VersionRead(EngineError),
    VersionWrite { script: String, version: i64, source: EngineError },
}

impl fmt::Display for UpgradeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discovery(error) => write!(f, "Failed to discover scripts: {}", error.kind),
            Self::ScriptExecution { script, source } => {
                write!(f, "Script '{script}' failed and was rolled back: {}", source.kind)
            },
            Self::ScriptRead { script, source } => write!(f, "Failed to load script '{script}': {}", source.kind),
            Self::SetGlobalDefault(error) => write!(f, "Failed to set global default subscriber: {}", error),
            Self::VersionRead(error) => write!(f, "Failed to read current version: {}", error.kind),
            Self::VersionWrite { script, version, source } => write!(
                f,
                "Script '{script}' was applied but recording version {version} failed, stored version is stale: {}",
                source.kind
            ),
        }
    }
}

impl Error for UpgradeErrorKind {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::Discovery(source) => Some(source),
			Self::ScriptExecution { source, .. } => Some(source),
			Self::ScriptRead { source, .. } => Some(source),
			Self::SetGlobalDefault(source) => Some(source),
			Self::VersionRead(source) => Some(source),
			Self::VersionWrite { source, .. } => Some(source),
		}
	}
}

impl From<ParseError> for UpgradeError {
    fn from(error: ParseError) -> Self {
        UpgradeError::new(UpgradeErrorKind::Discovery(error))
    }
}

impl From<SetGlobalDefaultError> for UpgradeError {
    fn from(error: SetGlobalDefaultError) -> Self {
        UpgradeError::new(UpgradeErrorKind::SetGlobalDefault(error))
    }
}
