use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "lead-relay")]
#[command(about = "Normalizes vendor lead exports and relays them to a webhook")]
pub struct CliConfig {
    /// Path to the vendor CSV export
    #[arg(long)]
    pub input: String,

    /// Vendor format: experian, transunion or leadsource
    #[arg(long)]
    pub source_type: String,

    /// Webhook endpoint; overrides the WEBHOOK_URL environment variable
    #[arg(long)]
    pub webhook_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_non_empty_string("source_type", &self.source_type)?;
        if let Some(url) = &self.webhook_url {
            validate_url("webhook_url", url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            input: "leads.csv".to_string(),
            source_type: "leadsource".to_string(),
            webhook_url: Some("https://hooks.example.com/leads".to_string()),
            verbose: false,
            log_json: false,
        }
    }

    #[test]
    fn test_parse_log_json_flag() {
        let c = CliConfig::try_parse_from([
            "lead-relay",
            "--input",
            "leads.csv",
            "--source-type",
            "leadsource",
            "--log-json",
        ])
        .unwrap();
        assert!(c.log_json);
        assert!(!c.verbose);
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_empty_input_rejected() {
        let mut c = config();
        c.input = String::new();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_bad_webhook_url_rejected() {
        let mut c = config();
        c.webhook_url = Some("not a url".to_string());
        assert!(c.validate().is_err());
    }
}
