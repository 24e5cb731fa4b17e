use crate::domain::model::{cell_text, IntermediateRecord, NormalizedRecord};
use serde_json::Value;

/// How one canonical field's raw value gets cleaned up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Numeric,
    Boolean,
    LoanType,
    Phone,
    Email,
    Address,
    State,
    Zip,
    Passthrough,
}

/// Static mapping: intermediate field -> (canonical field, transform kind).
/// Resolved once; fields absent from a record fall back to the canonical
/// defaults ('' / 0 / false) that `NormalizedRecord::default` provides.
const FIELD_MAP: &[(&str, &str, FieldKind)] = &[
    ("First_Name", "first_name", FieldKind::Name),
    ("Last_Name", "last_name", FieldKind::Name),
    ("Email", "email", FieldKind::Email),
    ("Address", "address", FieldKind::Address),
    ("City", "city", FieldKind::Address),
    ("State", "state", FieldKind::State),
    ("Zipcode", "zip", FieldKind::Zip),
    ("Phone_Number", "phone", FieldKind::Phone),
    ("Phone_Number_2", "phone2", FieldKind::Phone),
    ("Phone_Number_3", "phone3", FieldKind::Phone),
    ("credit_score", "credit_score", FieldKind::Numeric),
    ("current_balance", "mortgage_balance", FieldKind::Numeric),
    ("mortgage_payment", "mortgage_payment", FieldKind::Numeric),
    ("current_rate", "mortgage_rate", FieldKind::Numeric),
    ("property_value", "property_value", FieldKind::Numeric),
    ("additional_cash", "additional_cash", FieldKind::Numeric),
    ("cash_out", "cash_out", FieldKind::Boolean),
    ("loan_type", "loan_type", FieldKind::LoanType),
    ("loan_purpose", "loan_purpose", FieldKind::Passthrough),
    ("property_description", "property_description", FieldKind::Address),
    ("second_mortgage", "second_mortgage", FieldKind::Passthrough),
    ("second_balance", "second_balance", FieldKind::Numeric),
    ("second_rate", "second_rate", FieldKind::Numeric),
    ("found_home", "found_home", FieldKind::Boolean),
    ("down_payment", "down_payment", FieldKind::Numeric),
    ("property_purpose", "property_purpose", FieldKind::Address),
    ("ltv", "ltv", FieldKind::Numeric),
    ("bid_loan_value", "bid_loan_value", FieldKind::Numeric),
    ("va_eligible", "va_eligible", FieldKind::Boolean),
    ("lead_id", "lead_id", FieldKind::Passthrough),
    ("lead_source", "lead_source", FieldKind::Passthrough),
];

/// Title-cases a string: each letter that follows a non-letter is uppercased,
/// every other letter lowercased. Idempotent.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_was_letter = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_was_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_was_letter = true;
        } else {
            out.push(c);
            prev_was_letter = false;
        }
    }
    out
}

/// Coerces any cell to a number; unparseable and non-finite values become 0.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        // "NaN" and "inf" parse as f64 but must not leak into the
        // canonical record, where they would serialize as JSON null.
        Value::String(s) => s
            .trim()
            .parse()
            .ok()
            .filter(|f: &f64| f.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Coerces any cell to a boolean: booleans pass through, numbers by
/// truthiness, strings by membership in the accepted yes-set, anything
/// else is false.
pub fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => matches!(
            s.trim().to_lowercase().as_str(),
            "yes" | "true" | "1" | "y" | "t"
        ),
        _ => false,
    }
}

/// Canonical phone cleaning: strip non-digits, keep the last 10 if longer,
/// accept only exactly 10 digits that are not all zeros.
pub fn format_phone(value: &Value) -> String {
    let mut digits: String = cell_text(value)
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    if digits.len() > 10 {
        digits = digits[digits.len() - 10..].to_string();
    }
    if digits.len() == 10 && digits.chars().any(|c| c != '0') {
        digits
    } else {
        String::new()
    }
}

fn apply_field(record: &mut NormalizedRecord, field: &str, kind: FieldKind, value: &Value) {
    match kind {
        FieldKind::Numeric => {
            let number = coerce_number(value);
            match field {
                "credit_score" => record.credit_score = number,
                "mortgage_balance" => record.mortgage_balance = number,
                "mortgage_payment" => record.mortgage_payment = number,
                "mortgage_rate" => record.mortgage_rate = number,
                "property_value" => record.property_value = number,
                "additional_cash" => record.additional_cash = number,
                "second_balance" => record.second_balance = number,
                "second_rate" => record.second_rate = number,
                "down_payment" => record.down_payment = number,
                "ltv" => record.ltv = number,
                "bid_loan_value" => record.bid_loan_value = number,
                _ => {}
            }
        }
        FieldKind::Boolean => {
            let flag = coerce_flag(value);
            match field {
                "cash_out" => record.cash_out = flag,
                "found_home" => record.found_home = flag,
                "va_eligible" => record.va_eligible = flag,
                _ => {}
            }
        }
        _ => {
            let raw = cell_text(value);
            let text = match kind {
                FieldKind::Name => title_case(raw.trim()),
                FieldKind::LoanType => raw.trim().to_uppercase(),
                FieldKind::Phone => format_phone(value),
                FieldKind::Email => raw.trim().to_lowercase(),
                FieldKind::Address => title_case(raw.trim()),
                FieldKind::State => raw.trim().to_uppercase(),
                FieldKind::Zip => raw.trim().chars().take(5).collect(),
                FieldKind::Passthrough => raw,
                FieldKind::Numeric | FieldKind::Boolean => unreachable!(),
            };
            match field {
                "first_name" => record.first_name = text,
                "last_name" => record.last_name = text,
                "email" => record.email = text,
                "phone" => record.phone = text,
                "phone2" => record.phone2 = text,
                "phone3" => record.phone3 = text,
                "address" => record.address = text,
                "city" => record.city = text,
                "state" => record.state = text,
                "zip" => record.zip = text,
                "loan_type" => record.loan_type = text,
                "loan_purpose" => record.loan_purpose = text,
                "property_description" => record.property_description = text,
                "second_mortgage" => record.second_mortgage = text,
                "property_purpose" => record.property_purpose = text,
                "lead_id" => record.lead_id = text,
                "lead_source" => record.lead_source = text,
                _ => {}
            }
        }
    }
}

/// Normalizes one intermediate record into the canonical schema. Bad data
/// never fails here; it degrades to the field-class default.
pub fn normalize_record(record: &IntermediateRecord) -> NormalizedRecord {
    let mut out = NormalizedRecord::default();
    for (source, field, kind) in FIELD_MAP {
        if let Some(value) = record.get(source) {
            apply_field(&mut out, field, *kind, value);
        }
    }
    out
}

/// Normalizes a whole parsed batch.
pub fn normalize(records: &[IntermediateRecord]) -> Vec<NormalizedRecord> {
    records.iter().map(normalize_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_with(pairs: &[(&str, Value)]) -> IntermediateRecord {
        let mut record = IntermediateRecord::new();
        for (field, value) in pairs {
            record.set(*field, value.clone());
        }
        record
    }

    #[test]
    fn test_absent_fields_get_type_correct_defaults() {
        let normalized = normalize_record(&IntermediateRecord::new());
        assert_eq!(normalized.first_name, "");
        assert_eq!(normalized.email, "");
        assert_eq!(normalized.phone, "");
        assert_eq!(normalized.credit_score, 0.0);
        assert_eq!(normalized.mortgage_balance, 0.0);
        assert_eq!(normalized.ltv, 0.0);
        assert!(!normalized.cash_out);
        assert!(!normalized.found_home);
        assert!(!normalized.va_eligible);
    }

    #[test]
    fn test_name_fields_trimmed_and_title_cased() {
        let normalized = normalize_record(&record_with(&[
            ("First_Name", json!(" john ")),
            ("Last_Name", json!("o'BRIEN")),
        ]));
        assert_eq!(normalized.first_name, "John");
        assert_eq!(normalized.last_name, "O'Brien");
    }

    #[test]
    fn test_title_case_is_idempotent() {
        let once = title_case("123 main st apt 4b");
        assert_eq!(once, "123 Main St Apt 4B");
        assert_eq!(title_case(&once), once);
    }

    #[test]
    fn test_phone_formatting() {
        assert_eq!(format_phone(&json!("(555) 123-4567")), "5551234567");
        assert_eq!(format_phone(&json!("000-000-0000")), "");
        assert_eq!(format_phone(&json!("123")), "");
        // 13 digits: last 10 kept, then re-validated.
        assert_eq!(format_phone(&json!("0015551234567")), "5551234567");
        assert_eq!(format_phone(&json!("1230000000000")), "");
        assert_eq!(format_phone(&Value::Null), "");
    }

    #[test]
    fn test_boolean_coercion() {
        for yes in ["Yes", "TRUE", "1", "y", "t"] {
            assert!(coerce_flag(&json!(yes)), "{} should be true", yes);
        }
        for no in ["no", "", "2", "maybe"] {
            assert!(!coerce_flag(&json!(no)), "{} should be false", no);
        }
        assert!(!coerce_flag(&json!(0)));
        assert!(coerce_flag(&json!(3.5)));
        assert!(coerce_flag(&json!(true)));
        assert!(!coerce_flag(&Value::Null));
    }

    #[test]
    fn test_numeric_coercion_defaults_to_zero() {
        let normalized = normalize_record(&record_with(&[
            ("credit_score", json!("712")),
            ("current_balance", json!("not a number")),
            ("current_rate", json!(4.25)),
            ("ltv", json!("")),
        ]));
        assert_eq!(normalized.credit_score, 712.0);
        assert_eq!(normalized.mortgage_balance, 0.0);
        assert_eq!(normalized.mortgage_rate, 4.25);
        assert_eq!(normalized.ltv, 0.0);
    }

    #[test]
    fn test_numeric_coercion_rejects_non_finite() {
        assert_eq!(coerce_number(&json!("NaN")), 0.0);
        assert_eq!(coerce_number(&json!("nan")), 0.0);
        assert_eq!(coerce_number(&json!("inf")), 0.0);
        assert_eq!(coerce_number(&json!("-inf")), 0.0);
        assert_eq!(coerce_number(&json!("infinity")), 0.0);

        let normalized = normalize_record(&record_with(&[("credit_score", json!("NaN"))]));
        assert_eq!(normalized.credit_score, 0.0);
    }

    #[test]
    fn test_zip_truncation() {
        let normalized = normalize_record(&record_with(&[("Zipcode", json!(" 123456789 "))]));
        assert_eq!(normalized.zip, "12345");

        let short = normalize_record(&record_with(&[("Zipcode", json!("1234"))]));
        assert_eq!(short.zip, "1234");
    }

    #[test]
    fn test_email_state_loan_type_casing() {
        let normalized = normalize_record(&record_with(&[
            ("Email", json!("JOHN@X.COM ")),
            ("State", json!(" wa")),
            ("loan_type", json!(" fha ")),
        ]));
        assert_eq!(normalized.email, "john@x.com");
        assert_eq!(normalized.state, "WA");
        assert_eq!(normalized.loan_type, "FHA");
    }

    #[test]
    fn test_address_fields_title_cased() {
        let normalized = normalize_record(&record_with(&[
            ("Address", json!("123 MAIN st")),
            ("City", json!("seattle ")),
            ("property_description", json!("single FAMILY")),
        ]));
        assert_eq!(normalized.address, "123 Main St");
        assert_eq!(normalized.city, "Seattle");
        assert_eq!(normalized.property_description, "Single Family");
    }

    #[test]
    fn test_passthrough_fields_keep_raw_value() {
        let normalized = normalize_record(&record_with(&[
            ("lead_id", json!("L-42")),
            ("lead_source", json!("Refi Trigger")),
            ("loan_purpose", json!(" refinance ")),
            ("second_mortgage", Value::Null),
        ]));
        assert_eq!(normalized.lead_id, "L-42");
        assert_eq!(normalized.lead_source, "Refi Trigger");
        assert_eq!(normalized.loan_purpose, " refinance ");
        assert_eq!(normalized.second_mortgage, "");
    }

    #[test]
    fn test_unrecognized_fields_ignored() {
        let normalized = normalize_record(&record_with(&[
            ("mortgage_open_date", json!("2021-03-01")),
            ("First_Name", json!("kim")),
        ]));
        assert_eq!(normalized.first_name, "Kim");
    }
}
