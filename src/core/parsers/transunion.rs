use super::{rename_columns, VendorParser};
use crate::domain::model::{IntermediateRecord, RawRow};

/// TransUnion trigger exports: direct field mappings with exact column names.
const FIELD_MAPPING: &[(&str, &str)] = &[
    ("First_Name", "First_Name"),
    ("Last_Name", "Last_Name"),
    ("Address", "Address"),
    ("City", "City"),
    ("State", "State"),
    ("Zipcode", "Zipcode"),
    ("Phone_Number", "Phone_Number"),
    ("FICO04 Score", "credit_score"),
    ("Current Balance of Most Recent Mortgage", "current_balance"),
    ("Monthly Payment Amount of Most Recent Mortgage", "mortgage_payment"),
    ("Open Date of Most Recent Mortgage", "mortgage_open_date"),
    ("Perm_ID", "lead_id"),
    ("Trigger_Date", "lead_source"),
];

pub struct TransUnionParser;

impl VendorParser for TransUnionParser {
    fn parse(&self, rows: &[RawRow]) -> Vec<IntermediateRecord> {
        rename_columns(rows, FIELD_MAPPING)
    }
}
