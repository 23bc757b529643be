mod summary_storage;
#[cfg(test)]
mod tests;

use crate::models::{Summary, SummaryPatch};
use crate::pipeline::merge_summary;

pub use summary_storage::SummaryStorage;

/// Holder of the last successfully loaded summary.
pub trait Storage {
    /// Takes the stored summary out, leaving the storage empty.
    fn load(&mut self) -> Option<Summary>;
    fn save(&mut self, summary: Summary);
    fn current(&self) -> Option<&Summary>;

    /// Shallow-merges `patch` into the stored summary and stores the result.
    fn merge(&mut self, patch: SummaryPatch) {
        let merged = merge_summary(self.load(), patch);
        self.save(merged);
    }
}
