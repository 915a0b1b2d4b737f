use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/spesario.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path of the SQLite file holding the expenses, or ":memory:" for a
    /// throwaway store.
    pub database: String,
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: "expenses.db".to_string(),
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "spesario_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the expense database path.
    #[arg(long)]
    database: Option<String>,
    /// Override the log level (e.g. debug).
    #[arg(long)]
    level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("SPESARIO_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(database) = args.database {
        settings.database = database;
    }
    if let Some(level) = args.level {
        settings.level = level;
    }

    Ok(settings)
}
