mod amount;
mod delimiter;
mod errors;

pub use amount::Amount;
pub use delimiter::Delimiter;
pub use errors::{AmountError, DelimiterError};
