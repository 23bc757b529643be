mod aggregator;
mod columns;
mod merge;
mod normalizer;
mod parser;
mod template;
mod validator;

pub use aggregator::{aggregate, aggregate_at};
pub use columns::{ColumnMap, Field};
pub use merge::merge_summary;
pub use normalizer::{normalize, Normalizer};
pub use parser::{parse, ParsedTable};
pub use template::{write_template, TEMPLATE_CSV, TEMPLATE_FILE_NAME};
pub use validator::validate;
