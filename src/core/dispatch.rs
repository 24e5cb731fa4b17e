use crate::core::payload;
use crate::domain::model::{DeliveryResult, NormalizedRecord};
use crate::domain::ports::{HttpTransport, TransportError, WebhookLog};
use crate::utils::error::{LeadError, Result};
use chrono::Utc;

const TIMEOUT_MESSAGE: &str = "Request timed out after 10 seconds";
const CONNECTION_MESSAGE: &str = "Failed to connect to webhook server";

/// Delivers one normalized record to the webhook endpoint and records the
/// outcome. Every classified attempt, success or failure, writes exactly one
/// webhook log entry before this returns.
pub struct Dispatcher<T: HttpTransport, L: WebhookLog> {
    transport: T,
    webhook_log: L,
    webhook_url: String,
}

fn reason_for_status(status: u16, body: &str) -> String {
    match status {
        400 => "Invalid payload format".to_string(),
        401 => "Authentication failed".to_string(),
        403 => "Access forbidden".to_string(),
        404 => "Webhook endpoint not found".to_string(),
        429 => "Rate limit exceeded".to_string(),
        s if s >= 500 => "Webhook server error".to_string(),
        _ => body.to_string(),
    }
}

impl<T: HttpTransport, L: WebhookLog> Dispatcher<T, L> {
    pub fn new(transport: T, webhook_log: L, webhook_url: String) -> Self {
        Self {
            transport,
            webhook_log,
            webhook_url,
        }
    }

    pub async fn send(&self, record: &NormalizedRecord) -> Result<DeliveryResult> {
        let payload = payload::build(record)?;
        let body = serde_json::to_value(&payload).map_err(|e| LeadError::WebhookError {
            message: format!("Error preparing payload: {}", e),
        })?;
        let serialized = body.to_string();
        let lead_id = record.lead_id.as_str();

        match self.transport.post_json(&self.webhook_url, &body).await {
            Ok(response) => {
                if response.status == 200 {
                    self.webhook_log
                        .record(lead_id, &serialized, 200, &response.body)
                        .await?;
                    Ok(DeliveryResult {
                        lead_id: lead_id.to_string(),
                        status_code: 200,
                        response_body: response.body,
                        sent_at: Utc::now(),
                    })
                } else {
                    let reason = reason_for_status(response.status, &response.body);
                    self.webhook_log
                        .record(lead_id, &serialized, response.status, &reason)
                        .await?;
                    Err(LeadError::WebhookError {
                        message: format!("HTTP {}: {}", response.status, reason),
                    })
                }
            }
            Err(TransportError::TimedOut) => {
                self.webhook_log
                    .record(lead_id, &serialized, 408, TIMEOUT_MESSAGE)
                    .await?;
                Err(LeadError::WebhookError {
                    message: TIMEOUT_MESSAGE.to_string(),
                })
            }
            Err(TransportError::ConnectionFailed) => {
                self.webhook_log
                    .record(lead_id, &serialized, 503, CONNECTION_MESSAGE)
                    .await?;
                Err(LeadError::WebhookError {
                    message: CONNECTION_MESSAGE.to_string(),
                })
            }
            Err(TransportError::Other(detail)) => {
                let message = format!("Unexpected error: {}", detail);
                self.webhook_log
                    .record(lead_id, &serialized, 500, &message)
                    .await?;
                Err(LeadError::WebhookError { message })
            }
        }
    }
}
