pub mod commands;
pub mod error;
pub mod output;
pub mod ux;

use crate::db;
pub use clap::{Parser, ValueEnum};

use std::path::PathBuf;


/// User-facing enum to select engine
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    #[value(name = "mysql")]
    MySql,
    Postgres,
}

impl Engine {
    pub fn into_backend(self, credentials: &db::Credentials) -> db::EngineBackend {
        match self {
            Engine::MySql => db::EngineBackend::MySql(db::MySqlEngine::new(credentials)),
            Engine::Postgres => db::EngineBackend::Postgres(db::PostgresEngine::new(credentials)),
        }
    }
}


#[derive(Parser)]
#[command(name = "db-upgrade", version, about = "Apply numbered SQL scripts to a database in numeric order, tracking the applied version.")]
pub struct Cli {
    #[arg(help = "Directory containing the numbered SQL scripts, e.g. '045.createtable.sql'")]
    pub directory: PathBuf,

    #[arg(help = "Database user")]
    pub username: String,

    #[arg(help = "Database host")]
    pub host: String,

    #[arg(help = "Database name")]
    pub database: String,

    #[arg(help = "Database password")]
    pub password: String,

    #[arg(
        long = "engine",
        value_enum,
        help = "Database engine.",
        default_value_t = Engine::MySql,
        env = "ENGINE",
    )]
    pub engine: Engine,

    #[arg(
        long,
        help = "Database port. Defaults to the engine's standard port (MySQL 3306, Postgres 5432).",
        env = "DB_PORT",
    )]
    pub port: Option<u16>,

    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Set level of verbosity. [default: INFO]\n\t-v: DEBUG\n\t-vv: TRACE\n--quiet takes precedence over --verbose."
    )]
    pub verbose: u8,

    #[arg(
        short,
        long,
        action = clap::ArgAction::SetTrue,
        help = "Disable all information logs (only ERROR level logs are shown).\n--quiet takes precedence over --verbose."
    )]
    pub quiet: bool,

    #[arg(
        long,
        action = clap::ArgAction::SetTrue,
        help = "Enable JSON output format. Human readable output is disabled when this flag is set."
    )]
    pub json: bool,
}

impl Cli {
    pub fn to_config(&self) -> UpgradeConfig {
        UpgradeConfig {
            directory: self.directory.clone(),
            credentials: db::Credentials {
                username: self.username.clone(),
                host: self.host.clone(),
                port: self.port,
                database: self.database.clone(),
                password: self.password.clone(),
            },
            engine: self.engine,
        }
    }
}


/// Everything a run needs, built once from the command line.
#[derive(Clone, Debug)]
pub struct UpgradeConfig {
    pub directory: PathBuf,
    pub credentials: db::Credentials,
    pub engine: Engine,
}
