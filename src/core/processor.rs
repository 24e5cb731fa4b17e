use crate::core::dispatch::Dispatcher;
use crate::core::{normalize, parsers};
use crate::domain::model::{ProcessingSummary, RawRow, SourceType};
use crate::domain::ports::{HttpTransport, ProcessingLog, WebhookLog};
use crate::utils::error::{LeadError, Result};
use chrono::Utc;

/// Runs one vendor file through the full pipeline:
/// parse -> normalize -> per record: build payload, deliver, log outcome.
pub struct LeadEngine<T: HttpTransport, L: WebhookLog, P: ProcessingLog> {
    dispatcher: Dispatcher<T, L>,
    processing_log: P,
}

impl<T: HttpTransport, L: WebhookLog, P: ProcessingLog> LeadEngine<T, L, P> {
    pub fn new(dispatcher: Dispatcher<T, L>, processing_log: P) -> Self {
        Self {
            dispatcher,
            processing_log,
        }
    }

    pub async fn process_file(
        &self,
        source: SourceType,
        file_name: &str,
        rows: Vec<RawRow>,
    ) -> Result<ProcessingSummary> {
        tracing::info!("Processing {} file: {}", source, file_name);

        tracing::info!("Parsing {} raw rows", rows.len());
        let intermediate = parsers::parse_rows(source, &rows);

        tracing::info!("Normalizing {} records", intermediate.len());
        let normalized = normalize::normalize(&intermediate);

        let mut success_count = 0;
        let mut failure_count = 0;

        for (index, record) in normalized.iter().enumerate() {
            match self.dispatcher.send(record).await {
                Ok(result) => {
                    tracing::debug!(
                        "Record {} delivered (lead {}, status {})",
                        index + 1,
                        result.lead_id,
                        result.status_code
                    );
                    success_count += 1;
                }
                // Per-record failures are logged and counted; the batch
                // keeps going.
                Err(e @ LeadError::ValidationError { .. })
                | Err(e @ LeadError::WebhookError { .. }) => {
                    tracing::warn!("Record {} failed: {}", index + 1, e);
                    failure_count += 1;
                }
                Err(e) => return Err(e),
            }
        }

        let log_id = self
            .processing_log
            .record(
                source,
                file_name,
                normalized.len(),
                success_count,
                failure_count,
            )
            .await?;

        let summary = ProcessingSummary {
            source_type: source,
            file_name: file_name.to_string(),
            records_processed: normalized.len(),
            success_count,
            failure_count,
            log_id,
            processed_at: Utc::now(),
        };

        tracing::info!(
            "Finished {}: {} processed, {} delivered, {} failed",
            file_name,
            summary.records_processed,
            summary.success_count,
            summary.failure_count
        );

        Ok(summary)
    }
}
