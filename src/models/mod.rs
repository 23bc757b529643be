mod errors;
mod record;
mod summary;
#[cfg(test)]
mod tests;
mod transaction;

pub use errors::{IngestError, ParseError, ValidationError};
pub use record::RawRecord;
pub use summary::{Summary, SummaryPatch};
pub use transaction::{Transaction, TransactionType};
