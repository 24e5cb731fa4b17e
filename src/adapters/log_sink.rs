use crate::domain::model::SourceType;
use crate::domain::ports::{ProcessingLog, WebhookLog};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Processing-log sink that emits structured tracing events. Stands in for
/// the persistent `processing_logs` store; ids increment per process.
#[derive(Default)]
pub struct TracingProcessingLog {
    next_id: AtomicI64,
}

impl TracingProcessingLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProcessingLog for TracingProcessingLog {
    async fn record(
        &self,
        source_type: SourceType,
        file_name: &str,
        records_processed: usize,
        success_count: usize,
        failure_count: usize,
    ) -> Result<i64> {
        let log_id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(
            log_id,
            source_type = %source_type,
            file_name,
            records_processed,
            success_count,
            failure_count,
            processed_at = %Utc::now(),
            "processing log"
        );
        Ok(log_id)
    }
}

/// Webhook-response sink that emits structured tracing events. Stands in for
/// the persistent `webhook_responses` store.
#[derive(Default)]
pub struct TracingWebhookLog;

impl TracingWebhookLog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WebhookLog for TracingWebhookLog {
    async fn record(
        &self,
        lead_id: &str,
        payload: &str,
        status_code: u16,
        response_body: &str,
    ) -> Result<()> {
        tracing::info!(
            lead_id,
            payload,
            status_code,
            response_body,
            sent_at = %Utc::now(),
            "webhook response"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_processing_log_ids_increment() {
        let log = TracingProcessingLog::new();
        let first = log
            .record(SourceType::Experian, "a.csv", 3, 2, 1)
            .await
            .unwrap();
        let second = log
            .record(SourceType::LeadSource, "b.csv", 1, 1, 0)
            .await
            .unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn test_webhook_log_accepts_entries() {
        let log = TracingWebhookLog::new();
        assert!(log.record("L-1", "{}", 200, "ok").await.is_ok());
    }
}
