use clap::Parser;
use lead_relay::adapters::csv_reader;
use lead_relay::adapters::http::ReqwestTransport;
use lead_relay::adapters::log_sink::{TracingProcessingLog, TracingWebhookLog};
use lead_relay::utils::{logger, validation::Validate};
use lead_relay::{CliConfig, Dispatcher, LeadEngine, Settings, SourceType};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting lead-relay");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let settings = match Settings::load(config.webhook_url.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load settings: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if settings.database.is_none() {
        tracing::warn!("No database configured; logging outcomes to stdout only");
    }

    let source = match SourceType::parse(&config.source_type) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let rows = match csv_reader::read_rows_from_path(&config.input) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to read {}: {}", config.input, e);
            eprintln!("❌ Failed to read {}: {}", config.input, e);
            std::process::exit(1);
        }
    };

    let file_name = Path::new(&config.input)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(config.input.as_str());

    let dispatcher = Dispatcher::new(
        ReqwestTransport::new(),
        TracingWebhookLog::new(),
        settings.webhook_url.clone(),
    );
    let engine = LeadEngine::new(dispatcher, TracingProcessingLog::new());

    match engine.process_file(source, file_name, rows).await {
        Ok(summary) => {
            println!("✅ Processing complete");
            println!(
                "📊 {} records processed, {} delivered, {} failed (log id {})",
                summary.records_processed,
                summary.success_count,
                summary.failure_count,
                summary.log_id
            );
            if summary.failure_count > 0 {
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("Processing failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
