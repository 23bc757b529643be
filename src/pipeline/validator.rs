use std::collections::BTreeSet;

use tracing::debug;

use crate::models::ValidationError;

/// Checks that every required column is satisfied by at least one header.
///
/// A header satisfies a required column when its case-folded text contains the
/// column's case-folded text, so `Transaction_Type_2` satisfies `Transaction_Type`.
///
/// # Errors
/// Returns `ValidationError::MissingColumns` naming every unsatisfied column.
pub fn validate<H, R>(headers: &[H], required: &[R]) -> Result<(), ValidationError>
where
    H: AsRef<str>,
    R: AsRef<str>,
{
    let folded: Vec<String> = headers.iter()
        .map(|header| header.as_ref().trim().to_lowercase())
        .collect();

    let mut missing = BTreeSet::new();

    for column in required {
        let column: &str = column.as_ref();
        let needle = column.to_lowercase();

        if !folded.iter().any(|header| header.contains(&needle)) {
            missing.insert(column.to_string());
        }
    }

    if !missing.is_empty() {
        return Err(ValidationError::MissingColumns(missing));
    }

    debug!("Header row satisfies {} required columns", required.len());

    Ok(())
}
