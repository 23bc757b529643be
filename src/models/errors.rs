use std::collections::BTreeSet;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("The uploaded file is empty, a header row is required")]
    EmptyInput,
    #[error("Unable to read delimited text: {0}")]
    Csv(#[from] csv::Error)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("CSV format invalid, missing required columns: {}. Please use the provided template.", join(.0))]
    MissingColumns(BTreeSet<String>)
}

/// Every way a single upload attempt can fail. All of them are terminal for that attempt.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError)
}

fn join(columns: &BTreeSet<String>) -> String {
    columns.iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
