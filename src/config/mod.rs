pub mod cli;

pub use cli::CliConfig;

use crate::utils::error::{LeadError, Result};
use std::env;

/// Connection parameters for the log database. Held opaquely: this tool
/// only reports whether a database is configured, the persistence adapter
/// lives outside the core.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub database: String,
    pub user: String,
    pub password: String,
    pub port: String,
}

impl DatabaseSettings {
    pub fn from_env() -> Option<Self> {
        Some(Self {
            host: env::var("PGHOST").ok()?,
            database: env::var("PGDATABASE").ok()?,
            user: env::var("PGUSER").ok()?,
            password: env::var("PGPASSWORD").ok()?,
            port: env::var("PGPORT").ok()?,
        })
    }
}

/// Environment-sourced runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub webhook_url: String,
    pub database: Option<DatabaseSettings>,
}

impl Settings {
    /// Loads settings, letting a CLI-supplied webhook URL take precedence
    /// over the `WEBHOOK_URL` environment variable.
    pub fn load(webhook_url_override: Option<&str>) -> Result<Self> {
        let webhook_url = match webhook_url_override {
            Some(url) => url.to_string(),
            None => env::var("WEBHOOK_URL").map_err(|_| LeadError::ConfigError {
                message: "WEBHOOK_URL is not set and no --webhook-url was given".to_string(),
            })?,
        };

        Ok(Self {
            webhook_url,
            database: DatabaseSettings::from_env(),
        })
    }
}
