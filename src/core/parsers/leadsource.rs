use super::{rename_columns, VendorParser};
use crate::domain::model::{IntermediateRecord, RawRow};

/// LeadSource exports: a straight column rename, no value transformation.
const FIELD_MAPPING: &[(&str, &str)] = &[
    ("First Name", "First_Name"),
    ("Last Name", "Last_Name"),
    ("Address", "Address"),
    ("City", "City"),
    ("State", "State"),
    ("ZIP", "Zipcode"),
    ("Pri. Phone", "Phone_Number"),
    ("Sec. Phone", "Phone_Number_2"),
    ("Lead ID", "lead_id"),
    ("Lead Type", "lead_source"),
    ("Email", "Email"),
    ("Est. Home Value", "property_value"),
    ("Credit Grade", "credit_score"),
    ("ADD_CASH", "additional_cash"),
    ("Cash Out", "cash_out"),
    ("Loan Type", "loan_type"),
    ("Loan Purpose", "loan_purpose"),
    ("Prop. Desc", "property_description"),
    ("BAL_ONE", "current_balance"),
    ("MTG_ONE_INT", "current_rate"),
    ("MTG_TWO", "second_mortgage"),
    ("BAL_TWO", "second_balance"),
    ("MTG_TWO_INT", "second_rate"),
    ("Found Home", "found_home"),
    ("DOWN_PMT", "down_payment"),
    ("Property Purpose", "property_purpose"),
    ("LTV", "ltv"),
    ("bid_loan_val", "bid_loan_value"),
    ("VA Eligible", "va_eligible"),
];

pub struct LeadSourceParser;

impl VendorParser for LeadSourceParser {
    fn parse(&self, rows: &[RawRow]) -> Vec<IntermediateRecord> {
        rename_columns(rows, FIELD_MAPPING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_maps_contact_fields() {
        let mut row = RawRow::new();
        row.set("First Name", json!(" john "));
        row.set("Last Name", json!("smith"));
        row.set("Email", json!("JOHN@X.COM "));
        row.set("Pri. Phone", json!("5551234567"));
        row.set("Sec. Phone", json!("5559876543"));
        row.set("Lead ID", json!("L-100"));

        let parsed = LeadSourceParser.parse(&[row]);
        let record = &parsed[0];
        // Values are copied verbatim; normalization happens downstream.
        assert_eq!(record.get("First_Name").unwrap(), &json!(" john "));
        assert_eq!(record.get("Email").unwrap(), &json!("JOHN@X.COM "));
        assert_eq!(record.get("Phone_Number").unwrap(), &json!("5551234567"));
        assert_eq!(record.get("Phone_Number_2").unwrap(), &json!("5559876543"));
        assert_eq!(record.get("lead_id").unwrap(), &json!("L-100"));
    }

    #[test]
    fn test_parse_maps_loan_fields_and_trims_headers() {
        let mut row = RawRow::new();
        row.set(" Est. Home Value ", json!("350000"));
        row.set("BAL_ONE", json!("210000"));
        row.set("VA Eligible", json!("yes"));

        let parsed = LeadSourceParser.parse(&[row]);
        let record = &parsed[0];
        assert_eq!(record.get("property_value").unwrap(), &json!("350000"));
        assert_eq!(record.get("current_balance").unwrap(), &json!("210000"));
        assert_eq!(record.get("va_eligible").unwrap(), &json!("yes"));
    }

    #[test]
    fn test_parse_omits_absent_columns() {
        let mut row = RawRow::new();
        row.set("First Name", json!("a"));

        let parsed = LeadSourceParser.parse(&[row]);
        assert!(parsed[0].get("Phone_Number").is_none());
        assert!(parsed[0].get("credit_score").is_none());
    }
}
