use db_upgrade::cli::{self, Parser};
use db_upgrade::output::{MigrationReport, UpgradeOutput, UpgradeStatus};
use db_upgrade::{commands, ux, UpgradeError};


async fn run_command(config: &cli::UpgradeConfig) -> Result<MigrationReport, UpgradeError> {
    let mut backend = config.engine.into_backend(&config.credentials);

    tracing::info!(
        "Upgrading {} database '{}' on '{}' as '{}'",
        backend.name(),
        config.credentials.database,
        config.credentials.host,
        config.credentials.username,
    );

    commands::migrate(&mut backend, &config.directory).await
}


/// Entry point for the db-upgrade CLI tool.
///
/// Takes exactly five positional arguments, in order: the script directory, the
/// database user, host, database name and password. Every script in the directory
/// numbered above the database's stored version is applied in numeric order.
#[tokio::main]
async fn main() {
    let args: cli::Cli = cli::Cli::parse();

    if let Err(e) = ux::setup_logging(args.verbose, args.quiet, args.json) {
        eprintln!("{}", UpgradeError::from(e));
        std::process::exit(1);
    }

    let config = args.to_config();
    let output = UpgradeOutput::from_result("upgrade", run_command(&config).await);

    if args.json {
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize output: {e}");
                std::process::exit(1);
            }
        }
    } else {
        ux::render_human_output(&output);
    }

    if let UpgradeStatus::Error = output.status {
        std::process::exit(1);
    }
}
