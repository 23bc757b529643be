use crate::models::Summary;
use crate::storage::Storage;

#[derive(Debug, Default)]
pub struct SummaryStorage {
    summary: Option<Summary>
}

impl SummaryStorage {
    pub fn new() -> Self {
        Self {
            summary: None
        }
    }
}

impl Storage for SummaryStorage {
    fn load(&mut self) -> Option<Summary> {
        self.summary.take()
    }

    fn save(&mut self, summary: Summary) {
        self.summary = Some(summary);
    }

    fn current(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }
}
