pub mod config;
pub mod engine;
pub mod models;
pub mod pipeline;
pub mod storage;
pub mod types;

pub use config::IngestConfig;
pub use engine::{UploadEngine, UploadSession, UploadStatus};
pub use models::{IngestError, ParseError, RawRecord, Summary, SummaryPatch, Transaction, TransactionType, ValidationError};
pub use storage::{Storage, SummaryStorage};
