use crate::migration::MigrationBatch;
use crate::output::{MigrationReport, UpgradeOutput};

use tracing::subscriber::SetGlobalDefaultError;


pub fn setup_logging(verbose: u8, quiet: bool, json: bool) -> Result<(), SetGlobalDefaultError> {
    if json {
        // Keep stdout clean for the JSON document.
        return tracing::subscriber::set_global_default(tracing::subscriber::NoSubscriber::default());
    }

    let level = if quiet {
        tracing::Level::ERROR
    } else { match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }};

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}


pub fn show_migration_plan(batch: &MigrationBatch) {
    if batch.is_empty() {
        tracing::info!("No scripts newer than version {} - nothing to apply", batch.current_version());
        return;
    }

    tracing::info!("{}", format_migration_plan(batch));
}

fn format_migration_plan(batch: &MigrationBatch) -> String {
    let steps: String = batch
        .iter()
        .map(|script| format!("\n-> {} (version {})", script.name, script.version))
        .collect();

    format!(
        "--- Migration plan: {} script(s) after version {} ---{}\n--- End of migration plan ---",
        batch.len(),
        batch.current_version(),
        steps,
    )
}


pub fn render_human_output(output: &UpgradeOutput<MigrationReport>) {
    if let Some(error) = &output.failure {
        if let Some(report) = &output.data {
            let names: Vec<&str> = report.applied.iter().map(|a| a.name.as_str()).collect();
            tracing::warn!(
                "Applied {} of {} planned script(s) before the failure [{}]; version is now {}",
                report.applied.len(),
                report.planned.len(),
                names.join(", "),
                report.final_version,
            );
        }
        match error.script() {
            Some(script) => tracing::error!("Upgrade failed during {} of '{}': {}", error.phase(), script, error.kind),
            None => tracing::error!("Upgrade failed during {}: {}", error.phase(), error.kind),
        }
        return;
    }

    if let Some(report) = &output.data {
        if report.applied.is_empty() {
            tracing::info!("Database already at version {} - nothing applied", report.final_version);
        } else {
            tracing::info!(
                "Database upgraded from version {} to {} ({} script(s) applied)",
                report.starting_version,
                report.final_version,
                report.applied.len(),
            );
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::ScriptFile;
    use std::path::PathBuf;

    #[test]
    fn migration_plan_lists_scripts_in_order() {
        let batch = MigrationBatch::new(
            vec![
                ScriptFile::new("2.sql".into(), PathBuf::from("2.sql"), 2),
                ScriptFile::new("5.sql".into(), PathBuf::from("5.sql"), 5),
                ScriptFile::new("12.sql".into(), PathBuf::from("12.sql"), 12),
            ],
            3,
        );

        let plan = format_migration_plan(&batch);
        assert_eq!(
            plan,
            "--- Migration plan: 2 script(s) after version 3 ---\n\
             -> 5.sql (version 5)\n\
             -> 12.sql (version 12)\n\
             --- End of migration plan ---"
        );
    }
}
