use std::path::Path;

use tokio::fs;
use tracing::{debug, error, info};

use crate::config::IngestConfig;
use crate::models::{IngestError, Summary};
use crate::pipeline::{aggregate, parse, validate, ColumnMap, Normalizer};

/// Runs uploaded files through parse, validate, normalize and aggregate.
pub struct UploadEngine {
    config: IngestConfig
}

impl UploadEngine {
    pub fn new(config: IngestConfig) -> Self {
        Self {
            config
        }
    }

    /// Reads the whole file and ingests it.
    ///
    /// The read is the only await point. Everything after it is synchronous.
    ///
    /// # Errors
    /// Returns `IngestError::Io` when the file cannot be read as UTF-8 text, otherwise
    /// the parse or validation error of `ingest`.
    pub async fn run(&self, path: impl AsRef<Path>) -> Result<Summary, IngestError> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).await.map_err(|error| {
            error!("Error reading upload at path: {} | {error}", path.display());
            error
        })?;

        debug!("Read {} bytes from {}", text.len(), path.display());

        self.ingest(&text)
    }

    /// Ingests text that is already in memory.
    pub fn ingest(&self, text: &str) -> Result<Summary, IngestError> {
        let table = parse(text, self.config.delimiter)?;
        validate(table.headers(), self.config.required_columns.as_slice())?;

        let normalizer = Normalizer::new(ColumnMap::resolve(table.headers()))
            .with_strict_dates(self.config.strict_dates);

        let summary = aggregate(normalizer.normalize(table.records()));

        info!(
            "Ingested {} transactions: revenue {}, expenses {}",
            summary.transactions().len(),
            summary.total_revenue(),
            summary.total_expenses()
        );

        Ok(summary)
    }
}

impl Default for UploadEngine {
    fn default() -> Self {
        Self::new(IngestConfig::default())
    }
}
