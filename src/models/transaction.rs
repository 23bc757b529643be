use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::types::Amount;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Classification of a transaction row.
///
/// Only `Revenue` and `Expense` feed the totals. Any other label is preserved verbatim
/// in `Other` so it survives into the transaction list without being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Revenue,
    Expense,
    Other(String)
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Revenue => "Revenue",
            TransactionType::Expense => "Expense",
            TransactionType::Other(label) => label
        }
    }
}

impl From<&str> for TransactionType {
    /// Matching is exact and case-sensitive: `"revenue"` is `Other`, not `Revenue`.
    fn from(value: &str) -> Self {
        match value {
            "Revenue" => TransactionType::Revenue,
            "Expense" => TransactionType::Expense,
            other => TransactionType::Other(other.to_string())
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl Serialize for TransactionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// The typed form of one uploaded row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// The date exactly as written in the file. Never empty.
    pub date: String,
    pub transaction_type: TransactionType,
    /// Zero when the file carried an empty or unparsable amount.
    pub amount: Amount,
    pub gst_rate: Decimal,
    pub gst_amount: Amount,
    pub category: String,
    pub vendor_or_client: String,
    pub description: String,
    pub invoice_number: String,
    pub payment_status: String,
    /// Columns with no dedicated field, keyed by their header.
    pub extra: BTreeMap<String, String>
}

impl Transaction {
    /// Interprets `date` as a `YYYY-MM-DD` calendar date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }
}
