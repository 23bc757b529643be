use crate::models::{IngestError, Summary};

/// Where the current upload stands, as shown to the user.
#[derive(Debug, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Success(Summary),
    Error(IngestError)
}

impl UploadStatus {
    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadStatus::Uploading)
    }

    /// Human readable description of the status.
    pub fn message(&self) -> String {
        match self {
            UploadStatus::Idle => String::new(),
            UploadStatus::Uploading => "Processing your financial data...".to_string(),
            UploadStatus::Success(summary) => {
                format!("Successfully processed {} transactions", summary.transactions().len())
            }
            UploadStatus::Error(error) => error.to_string()
        }
    }
}
