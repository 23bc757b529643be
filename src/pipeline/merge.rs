use chrono::Utc;

use crate::models::{Summary, SummaryPatch};

/// Shallow-merges `patch` over `previous`, or over an empty summary when there is none.
///
/// Unlike ingestion, which replaces the transaction list wholesale, a merge keeps the
/// previous transactions unless the patch carries its own list. `last_updated` is always
/// set to the merge time.
pub fn merge_summary(previous: Option<Summary>, patch: SummaryPatch) -> Summary {
    let now = Utc::now();

    previous
        .unwrap_or_else(|| Summary::empty(now))
        .merged(patch, now)
}
