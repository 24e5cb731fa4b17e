use crate::domain::model::{IntermediateRecord, RawRow, SourceType};
use std::collections::HashSet;

pub mod experian;
pub mod leadsource;
pub mod transunion;

pub use experian::ExperianParser;
pub use leadsource::LeadSourceParser;
pub use transunion::TransUnionParser;

/// One vendor export format. Consumes the raw rows of one file and produces
/// records in the intermediate schema; columns a vendor does not supply are
/// simply absent from the output.
pub trait VendorParser {
    fn parse(&self, rows: &[RawRow]) -> Vec<IntermediateRecord>;
}

/// Selects the parser for a declared source type and runs it. The selector
/// itself is validated when the `SourceType` is parsed from user input.
pub fn parse_rows(source: SourceType, rows: &[RawRow]) -> Vec<IntermediateRecord> {
    match source {
        SourceType::Experian => ExperianParser.parse(rows),
        SourceType::TransUnion => TransUnionParser.parse(rows),
        SourceType::LeadSource => LeadSourceParser.parse(rows),
    }
}

/// Union of the column names present across the batch.
pub(crate) fn column_set(rows: &[RawRow]) -> HashSet<String> {
    rows.iter()
        .flat_map(|row| row.data.keys().cloned())
        .collect()
}

/// Pure 1:1 column rename: any mapped source column present is copied
/// verbatim, unmapped columns are ignored. Column names are trimmed first.
pub(crate) fn rename_columns(
    rows: &[RawRow],
    mapping: &[(&str, &str)],
) -> Vec<IntermediateRecord> {
    rows.iter()
        .map(|row| {
            let row = row.with_trimmed_columns();
            let mut record = IntermediateRecord::new();
            for (source, target) in mapping {
                if let Some(value) = row.get(source) {
                    record.set(*target, value.clone());
                }
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_rows_dispatches_by_source_type() {
        let mut row = RawRow::new();
        row.set("First Name", json!("jane"));
        row.set("Last Name", json!("doe"));
        let rows = vec![row];

        let parsed = parse_rows(SourceType::LeadSource, &rows);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].get("First_Name").unwrap(), &json!("jane"));
    }

    #[test]
    fn test_rename_columns_ignores_unmapped() {
        let mut row = RawRow::new();
        row.set(" A ", json!("1"));
        row.set("Junk", json!("x"));
        let mapping = [("A", "Mapped_A")];

        let parsed = rename_columns(&[row], &mapping);
        assert_eq!(parsed[0].get("Mapped_A").unwrap(), &json!("1"));
        assert!(parsed[0].get("Junk").is_none());
        assert_eq!(parsed[0].data.len(), 1);
    }
}
