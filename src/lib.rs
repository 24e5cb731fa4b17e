pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::{Dispatcher, LeadEngine};
pub use config::{CliConfig, Settings};
pub use domain::model::{
    DeliveryResult, IntermediateRecord, NormalizedRecord, ProcessingSummary, RawRow, SourceType,
    WebhookPayload,
};
pub use utils::error::{LeadError, Result};
