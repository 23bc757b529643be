
use crate::types::Delimiter;

/// Columns an upload must expose before any row is read.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Date", "Transaction_Type", "Amount", "Category"];

/// Settings for a single ingestion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    pub delimiter: Delimiter,
    pub required_columns: Vec<String>,
    /// Also drop rows whose date is not a `YYYY-MM-DD` calendar date.
    pub strict_dates: bool
}

impl IngestConfig {
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_required_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_strict_dates(mut self, strict_dates: bool) -> Self {
        self.strict_dates = strict_dates;
        self
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            required_columns: REQUIRED_COLUMNS.iter().map(|column| column.to_string()).collect(),
            strict_dates: false
        }
    }
}
