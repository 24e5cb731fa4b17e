use super::{column_set, VendorParser};
use crate::domain::model::{cell_text, IntermediateRecord, RawRow};
use serde_json::Value;

const FIELD_MAPPING: &[(&str, &str)] = &[
    ("First Name", "First_Name"),
    ("Surname", "Last_Name"),
    ("City", "City"),
    ("State", "State"),
    ("Zip Code", "Zipcode"),
    ("FICO_V30A_PSCRN_SCORE_VALUE", "credit_score"),
    (
        "Total balance on open first mortgage trades reported in the last 3 months",
        "current_balance",
    ),
    (
        "Estimated interest rate on open with balance first mortgage loans with the largest current balance reported in the last 6 months",
        "current_rate",
    ),
];

const HOUSE_NUMBER_COLUMN: &str = "Primary Street ID (House number)";
const STREET_NAME_COLUMN: &str = "Street Name/Apartment";

/// Candidate columns per phone slot, duplicate column checked before the
/// original. Experian exports repeat the telephone headers, so the reader
/// surfaces the second occurrence with a `.1` suffix.
const PHONE_CANDIDATES: &[(&str, &str)] = &[
    ("Telephone # 1.1", "Phone_Number"),
    ("Telephone # 1", "Phone_Number"),
    ("Telephone # 2.1", "Phone_Number_2"),
    ("Telephone # 2", "Phone_Number_2"),
    ("Telephone # 3.1", "Phone_Number_3"),
    ("Telephone # 3", "Phone_Number_3"),
];

pub struct ExperianParser;

impl ExperianParser {
    /// Experian phone cleaning: strip non-digits, require at least 10 digits,
    /// keep the last 10. Deliberately looser than the normalizer's rule,
    /// which also rejects all-zero numbers.
    pub fn clean_phone(value: &Value) -> String {
        let digits: String = cell_text(value)
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        if digits.len() >= 10 {
            digits[digits.len() - 10..].to_string()
        } else {
            String::new()
        }
    }

    fn has_usable_phone(row: &RawRow, column: &str) -> bool {
        row.get(column)
            .map(|value| !Self::clean_phone(value).is_empty())
            .unwrap_or(false)
    }
}

impl VendorParser for ExperianParser {
    fn parse(&self, rows: &[RawRow]) -> Vec<IntermediateRecord> {
        let rows: Vec<RawRow> = rows.iter().map(RawRow::with_trimmed_columns).collect();
        let columns = column_set(&rows);

        // Pick the source column for each phone slot once for the whole
        // batch: the first candidate that yields a usable number anywhere.
        let mut chosen: Vec<(&str, &str)> = Vec::new();
        for (source, target) in PHONE_CANDIDATES {
            if chosen.iter().any(|(_, taken)| taken == target) {
                continue;
            }
            if !columns.contains(*source) {
                continue;
            }
            if rows.iter().any(|row| Self::has_usable_phone(row, source)) {
                tracing::debug!("Using phone column {:?} for {}", source, target);
                chosen.push((*source, *target));
            }
        }

        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                let mut record = IntermediateRecord::new();

                let house_number = row
                    .get(HOUSE_NUMBER_COLUMN)
                    .map(cell_text)
                    .unwrap_or_default();
                let street_name = row
                    .get(STREET_NAME_COLUMN)
                    .map(cell_text)
                    .unwrap_or_default();
                record.set(
                    "Address",
                    Value::String(format!("{} {}", house_number, street_name)),
                );

                for (source, target) in FIELD_MAPPING {
                    if let Some(value) = row.get(source) {
                        record.set(*target, value.clone());
                    }
                }

                for (source, target) in &chosen {
                    let phone = row.get(source).map(Self::clean_phone).unwrap_or_default();
                    if !phone.is_empty() {
                        record.set(*target, Value::String(phone));
                    }
                }

                if !PHONE_CANDIDATES
                    .iter()
                    .any(|(source, _)| Self::has_usable_phone(row, source))
                {
                    tracing::warn!("No valid phone numbers found for record {}", index + 1);
                }

                record
            })
            .collect()
    }
}
