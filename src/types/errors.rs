use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: {0}")]
    Decimal(#[from] rust_decimal::Error)
}

#[derive(Debug, Error)]
pub enum DelimiterError {
    #[error("Delimiter must be a single ASCII character, got '{0}'")]
    NotSingleByte(String),
    #[error("Delimiter cannot be a line terminator")]
    LineTerminator
}
