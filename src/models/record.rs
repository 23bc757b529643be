use std::sync::Arc;

/// One data line of an uploaded file, keyed by the header row.
///
/// Every record has exactly one value per header: short rows are padded with empty
/// strings and surplus fields are dropped when the record is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    headers: Arc<[String]>,
    values: Vec<String>
}

impl RawRecord {
    pub fn new(headers: Arc<[String]>, mut values: Vec<String>) -> Self {
        values.resize(headers.len(), String::new());

        Self {
            headers,
            values
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Looks up a value by its exact header. When a header repeats, the rightmost column wins.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.iter()
            .rev()
            .find(|(name, _)| *name == header)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &str)> {
        self.headers.iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}
