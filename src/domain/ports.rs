use crate::domain::model::SourceType;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Raw response from the webhook endpoint, before classification.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: u16,
    pub body: String,
}

/// Transport-level failures the dispatcher must tell apart.
#[derive(Debug, Clone)]
pub enum TransportError {
    TimedOut,
    ConnectionFailed,
    Other(String),
}

/// Outbound HTTP collaborator. The concrete adapter owns the timeout and
/// the `Content-Type: application/json` header.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        body: &Value,
    ) -> std::result::Result<WireResponse, TransportError>;
}

/// Sink for batch-level processing summaries. Returns the log id.
#[async_trait]
pub trait ProcessingLog: Send + Sync {
    async fn record(
        &self,
        source_type: SourceType,
        file_name: &str,
        records_processed: usize,
        success_count: usize,
        failure_count: usize,
    ) -> Result<i64>;
}

/// Sink for per-delivery webhook outcomes. Exactly one entry is recorded per
/// classified delivery attempt, success or failure.
#[async_trait]
pub trait WebhookLog: Send + Sync {
    async fn record(
        &self,
        lead_id: &str,
        payload: &str,
        status_code: u16,
        response_body: &str,
    ) -> Result<()>;
}
