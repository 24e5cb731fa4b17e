use crate::domain::model::RawRow;
use crate::utils::error::Result;
use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads a vendor CSV into raw rows. Header names are kept exactly as they
/// appear; repeated header names get a numeric suffix (`Telephone # 1`,
/// `Telephone # 1.1`, ...) so duplicated vendor columns stay addressable.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = disambiguate_headers(csv_reader.headers()?);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut row = RawRow::new();
        for (index, cell) in record.iter().enumerate() {
            if let Some(header) = headers.get(index) {
                row.set(header.clone(), Value::String(cell.to_string()));
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

pub fn read_rows_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawRow>> {
    let file = File::open(path)?;
    read_rows(file)
}

fn disambiguate_headers(headers: &csv::StringRecord) -> Vec<String> {
    let mut seen: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    headers
        .iter()
        .map(|name| {
            let count = seen.entry(name.to_string()).or_insert(0);
            let header = if *count == 0 {
                name.to_string()
            } else {
                format!("{}.{}", name, count)
            };
            *count += 1;
            header
        })
        .collect()
}
