use std::path::Path;

use tracing::{error, info};

use crate::engine::{UploadEngine, UploadStatus};
use crate::models::{Summary, SummaryPatch};
use crate::storage::Storage;

/// The caller-side state of the upload flow: the status shown to the user and the
/// last summary that loaded successfully.
///
/// Uploads take `&mut self`, so a second upload cannot start while one is in flight.
pub struct UploadSession<S: Storage> {
    engine: UploadEngine,
    storage: S,
    status: UploadStatus
}

impl<S: Storage> UploadSession<S> {
    pub fn new(engine: UploadEngine, storage: S) -> Self {
        Self {
            engine,
            storage,
            status: UploadStatus::Idle
        }
    }

    /// Uploads one file. A failed upload leaves the stored summary untouched.
    pub async fn upload(&mut self, path: impl AsRef<Path>) -> &UploadStatus {
        let path = path.as_ref();
        self.status = UploadStatus::Uploading;
        info!("{} ({})", self.status.message(), path.display());

        self.status = match self.engine.run(path).await {
            Ok(summary) => {
                self.storage.save(summary.clone());
                UploadStatus::Success(summary)
            }
            Err(upload_error) => {
                error!("Upload of {} failed: {upload_error}", path.display());
                UploadStatus::Error(upload_error)
            }
        };

        &self.status
    }

    /// Merges externally computed figures into the stored summary.
    pub fn update(&mut self, patch: SummaryPatch) {
        self.storage.merge(patch);
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.storage.current()
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
