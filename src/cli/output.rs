// {
//   "command": "upgrade",
//   "status": "success",
//   "data": {
//     "starting_version": 3,
//     "final_version": 12,
//     "planned": ["5.sql", "8.sql", "12.sql"],
//     "applied": [{"name": "5.sql", "version": 5, "checksum": "9f86d0..."}, ...]
//   },
//   "error": null,
//   "timestamp": "2026-10-18T15:52:12Z"
// }
use crate::error::{UpgradeError, UpgradeErrorKind};
use crate::migration::ScriptFile;
use serde::Serialize;


#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UpgradeErrorJson {
    Discovery { message: String },
    ScriptExecution { script: String, message: String },
    ScriptRead { script: String, message: String },
    SetGlobalDefault { message: String },
    VersionRead { message: String },
    VersionWrite { script: String, version: i64, message: String },
}

impl From<&UpgradeError> for UpgradeErrorJson {
    fn from(e: &UpgradeError) -> Self {
        let message = e.kind.to_string();

        match &e.kind {
            UpgradeErrorKind::Discovery(_) => Self::Discovery { message },
            UpgradeErrorKind::ScriptExecution { script, .. } => {
                Self::ScriptExecution { script: script.clone(), message }
            }
            UpgradeErrorKind::ScriptRead { script, .. } => {
                Self::ScriptRead { script: script.clone(), message }
            }
            UpgradeErrorKind::SetGlobalDefault(_) => Self::SetGlobalDefault { message },
            UpgradeErrorKind::VersionRead(_) => Self::VersionRead { message },
            UpgradeErrorKind::VersionWrite { script, version, .. } => {
                Self::VersionWrite { script: script.clone(), version: *version, message }
            }
        }
    }
}


#[derive(Serialize, Debug, PartialEq)]
pub struct AppliedScript {
    pub name: String,
    pub version: i64,
    pub checksum: String,
}

/// What a run did: where it started, what it planned, what it applied.
#[derive(Serialize, Debug, PartialEq)]
pub struct MigrationReport {
    pub starting_version: i64,
    pub final_version: i64,
    pub planned: Vec<String>,
    pub applied: Vec<AppliedScript>,
}

impl MigrationReport {
    pub fn new(starting_version: i64, planned: Vec<String>) -> Self {
        MigrationReport {
            starting_version,
            final_version: starting_version,
            planned,
            applied: Vec::new(),
        }
    }

    pub fn record(&mut self, script: &ScriptFile, checksum: String) {
        self.final_version = script.version;
        self.applied.push(AppliedScript {
            name: script.name.clone(),
            version: script.version,
            checksum,
        });
    }
}


#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeStatus {
    Success,
    Error,
}

#[derive(Serialize)]
pub struct UpgradeOutput<T: Serialize> {
    pub command: String,
    pub status: UpgradeStatus,
    pub data: Option<T>,
    pub error: Option<UpgradeErrorJson>,
    pub timestamp: String,
    #[serde(skip)]
    pub failure: Option<UpgradeError>,
}

impl<T: Serialize + From<MigrationReport>> UpgradeOutput<T> {
    /// On failure, `data` holds whatever progress the error carried.
    pub fn from_result(command: &str, result: Result<T, UpgradeError>) -> Self {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

        match result {
            Ok(data) => UpgradeOutput {
                command: command.to_string(),
                status: UpgradeStatus::Success,
                data: Some(data),
                error: None,
                timestamp,
                failure: None,
            },
            Err(mut e) => UpgradeOutput {
                command: command.to_string(),
                status: UpgradeStatus::Error,
                data: e.report.take().map(T::from),
                error: Some(UpgradeErrorJson::from(&e)),
                timestamp,
                failure: Some(e),
            },
        }
    }
}
