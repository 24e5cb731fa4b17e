use crate::utils::error::{LeadError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// The three vendor export formats this tool understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    Experian,
    TransUnion,
    LeadSource,
}

impl SourceType {
    pub fn parse(selector: &str) -> Result<Self> {
        match selector {
            "experian" => Ok(SourceType::Experian),
            "transunion" => Ok(SourceType::TransUnion),
            "leadsource" => Ok(SourceType::LeadSource),
            other => Err(LeadError::InvalidInput {
                message: format!("Unknown source type: {}", other),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Experian => "experian",
            SourceType::TransUnion => "transunion",
            SourceType::LeadSource => "leadsource",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SourceType {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One source record as read from a vendor CSV: column name -> cell value.
/// Column names are kept exactly as they appear in the header row; parsers
/// trim them before lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRow {
    pub data: HashMap<String, Value>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.data.get(column)
    }

    pub fn set(&mut self, column: impl Into<String>, value: Value) {
        self.data.insert(column.into(), value);
    }

    /// Returns a copy with leading/trailing whitespace stripped from every
    /// column name. Vendor exports routinely pad their headers.
    pub fn with_trimmed_columns(&self) -> RawRow {
        let data = self
            .data
            .iter()
            .map(|(column, value)| (column.trim().to_string(), value.clone()))
            .collect();
        RawRow { data }
    }
}

/// Vendor-agnostic but not-yet-normalized record. Keys come from the fixed
/// intermediate field set (`First_Name`, `Phone_Number`, `credit_score`, ...);
/// fields the vendor does not supply are simply missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntermediateRecord {
    pub data: HashMap<String, Value>,
}

impl IntermediateRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.data.insert(field.into(), value);
    }
}

/// Renders a raw cell as text. Nulls become the empty string, numbers and
/// booleans their natural display form.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// The fully normalized canonical record. Every field is always present:
/// strings default to empty, numbers to 0, booleans to false, so a vendor
/// never having supplied a field is indistinguishable from an empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub phone2: String,
    pub phone3: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub credit_score: f64,
    pub mortgage_balance: f64,
    pub mortgage_payment: f64,
    pub mortgage_rate: f64,
    pub property_value: f64,
    pub additional_cash: f64,
    pub cash_out: bool,
    pub loan_type: String,
    pub loan_purpose: String,
    pub property_description: String,
    pub second_mortgage: String,
    pub second_balance: f64,
    pub second_rate: f64,
    pub found_home: bool,
    pub down_payment: f64,
    pub property_purpose: String,
    pub ltv: f64,
    pub bid_loan_value: f64,
    pub va_eligible: bool,
    pub lead_id: String,
    pub lead_source: String,
}

/// The nested structure the downstream webhook expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub contact: ContactSection,
    pub property: PropertySection,
    pub loan: LoanSection,
    pub lead: LeadSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSection {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub primary_phone: String,
    pub alt_phone_1: Option<String>,
    pub alt_phone_2: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySection {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub value: f64,
    pub description: String,
    pub purpose: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSection {
    pub credit_score: f64,
    pub current_balance: f64,
    pub current_rate: f64,
    pub second_mortgage: String,
    pub second_balance: f64,
    pub second_rate: f64,
    pub additional_cash: f64,
    pub cash_out: bool,
    pub loan_purpose: String,
    pub found_home: bool,
    pub down_payment: f64,
    pub ltv: f64,
    pub bid_loan_value: f64,
    pub va_eligible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadSection {
    pub source: String,
    pub original_id: String,
}

/// Outcome of delivering one payload to the webhook.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryResult {
    pub lead_id: String,
    pub status_code: u16,
    pub response_body: String,
    pub sent_at: DateTime<Utc>,
}

/// Batch-level outcome of processing one vendor file.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingSummary {
    pub source_type: SourceType,
    pub file_name: String,
    pub records_processed: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub log_id: i64,
    pub processed_at: DateTime<Utc>,
}
