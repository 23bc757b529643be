use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::models::{ParseError, RawRecord};
use crate::types::Delimiter;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// The header row of an upload together with every data line keyed by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    headers: Arc<[String]>,
    records: Vec<RawRecord>
}

impl ParsedTable {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Splits `raw_text` into a header row and header-keyed records.
///
/// Fields are split on `delimiter` with no quoting or escaping, and trimmed. Blank lines
/// are skipped. Ragged rows are accepted: missing trailing fields become empty strings
/// and fields beyond the header are dropped.
///
/// # Errors
/// Returns `ParseError::EmptyInput` when no header line exists.
pub fn parse(raw_text: &str, delimiter: Delimiter) -> Result<ParsedTable, ParseError> {
    let text = raw_text.trim_start_matches(BYTE_ORDER_MARK);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut lines = reader.records()
        .filter(|result| !matches!(result, Ok(record) if is_blank(record)));

    let headers: Arc<[String]> = match lines.next() {
        Some(result) => result?.iter().map(str::to_string).collect(),
        None => return Err(ParseError::EmptyInput)
    };

    let mut records = Vec::new();

    for result in lines {
        let values = result?.iter().map(str::to_string).collect();
        records.push(RawRecord::new(headers.clone(), values));
    }

    debug!("Parsed {} columns and {} records", headers.len(), records.len());

    Ok(ParsedTable { headers, records })
}

fn is_blank(record: &StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(str::is_empty)
}
