//! Raw CSV source access shared by the catalog and review loaders

use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;
use std::io::Read;

/// Open a CSV reader over a header-bearing source
///
/// Rows shorter or longer than the header are accepted; missing trailing
/// fields read as empty.
pub(crate) fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input)
}

/// Column-name to position lookup over a trimmed header row
#[derive(Debug, Clone)]
pub(crate) struct HeaderIndex {
    source_name: &'static str,
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    pub(crate) fn new(source_name: &'static str, headers: &StringRecord) -> Self {
        let mut positions = HashMap::new();
        for (idx, name) in headers.iter().enumerate() {
            // First occurrence wins for duplicated header names
            positions.entry(normalize_header(name)).or_insert(idx);
        }
        Self {
            source_name,
            positions,
        }
    }

    /// Position of a column that must exist
    pub(crate) fn required(&self, column: &str) -> Result<usize> {
        self.optional(column).ok_or_else(|| Error::MissingColumn {
            source_name: self.source_name,
            column: column.to_string(),
        })
    }

    pub(crate) fn optional(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }
}

fn normalize_header(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_string()
}

/// Field at `idx`, or "" when the row is short
pub(crate) fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

/// Trimmed non-empty text from an optional column
pub(crate) fn optional_text(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    let value = field(record, idx?).trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Finite numeric coercion; anything else is treated as missing
pub(crate) fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Integer coercion accepting integral floats such as `2019.0`
pub(crate) fn parse_integral(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    parse_finite(trimmed)
        .filter(|v| v.fract() == 0.0 && v.abs() < 9.0e15)
        .map(|v| v as i64)
}

pub(crate) fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
