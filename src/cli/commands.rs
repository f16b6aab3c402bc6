use crate::cli::error::{UpgradeError, UpgradeErrorKind};
use crate::db::{SqlExecutor, VersionStore};
use crate::migration::{MigrationBatch, ScriptFile};
use crate::output::MigrationReport;
use crate::ux;

use std::path::Path;


/// Applies every script in `directory` newer than the stored version, one at a time.
///
/// The batch is computed once from the version read at the start. For each script the
/// text is loaded, executed as one transaction, and only then is the stored version
/// advanced to the script's number. Any failure stops the run: earlier scripts stay
/// applied and recorded, later ones are not attempted. Once the starting version is
/// known, the error carries the report of what was planned and applied before the stop.
///
/// The version write is a separate statement from the script's transaction. A crash
/// between the two leaves the script applied but unrecorded, and it will run again on
/// the next invocation.
pub async fn migrate<B>(backend: &mut B, directory: &Path) -> Result<MigrationReport, UpgradeError>
where
    B: SqlExecutor + VersionStore,
{
    tracing::info!("Reading current version...");
    let current_version = backend
        .read_version()
        .await
        .map_err(|source| UpgradeError::new(UpgradeErrorKind::VersionRead(source)))?;
    tracing::info!("Current version: {current_version}");

    tracing::info!("Loading scripts from '{}'", directory.display());
    let batch = match MigrationBatch::from_directory(directory, current_version) {
        Ok(batch) => batch,
        Err(e) => return Err(UpgradeError::from(e).with_report(MigrationReport::new(current_version, Vec::new()))),
    };
    ux::show_migration_plan(&batch);

    let mut report = MigrationReport::new(current_version, batch.names());

    for script in batch.iter() {
        if let Err(kind) = apply_script(backend, script, &mut report).await {
            return Err(UpgradeError::new(kind).with_report(report));
        }
    }

    Ok(report)
}

async fn apply_script<B>(backend: &mut B, script: &ScriptFile, report: &mut MigrationReport) -> Result<(), UpgradeErrorKind>
where
    B: SqlExecutor + VersionStore,
{
    tracing::info!("Applying '{}'...", script.name);

    let loaded = script
        .load()
        .map_err(|source| UpgradeErrorKind::ScriptRead { script: script.name.clone(), source })?;
    tracing::debug!("'{}' sha256: {}", script.name, loaded.checksum);

    backend
        .execute_script(&loaded.sql)
        .await
        .map_err(|source| UpgradeErrorKind::ScriptExecution { script: script.name.clone(), source })?;

    backend.write_version(script.version).await.map_err(|source| UpgradeErrorKind::VersionWrite {
        script: script.name.clone(),
        version: script.version,
        source,
    })?;
    tracing::info!("Applied '{}' - version is now {}", script.name, script.version);

    report.record(script, loaded.checksum);
    Ok(())
}
