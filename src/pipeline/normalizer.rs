use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::models::{RawRecord, Transaction, TransactionType};
use crate::pipeline::{ColumnMap, Field};
use crate::types::Amount;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Turns raw records into typed transactions.
///
/// Normalization never fails. Rows without a date are dropped and every other anomaly
/// degrades to an empty or zero value, so one corrupt row cannot block the rest of the file.
#[derive(Debug, Clone)]
pub struct Normalizer {
    columns: ColumnMap,
    strict_dates: bool
}

impl Normalizer {
    pub fn new(columns: ColumnMap) -> Self {
        Self {
            columns,
            strict_dates: false
        }
    }

    pub fn with_strict_dates(mut self, strict_dates: bool) -> Self {
        self.strict_dates = strict_dates;
        self
    }

    pub fn normalize(&self, records: &[RawRecord]) -> Vec<Transaction> {
        let transactions: Vec<Transaction> = records.iter()
            .enumerate()
            .filter_map(|(index, record)| self.normalize_record(index, record))
            .collect();

        debug!("Normalized {} of {} records", transactions.len(), records.len());

        transactions
    }

    fn normalize_record(&self, index: usize, record: &RawRecord) -> Option<Transaction> {
        let date = self.field(record, Field::Date).trim();

        if date.is_empty() {
            debug!("Skipping record [{index}] without a date");
            return None;
        }

        if self.strict_dates && NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
            warn!("Skipping record [{index}] with invalid date '{date}'");
            return None;
        }

        let extra = self.columns.extra_columns().iter()
            .filter_map(|&column| {
                let header = record.headers().get(column)?;
                let value = record.value_at(column)?;
                Some((header.clone(), value.to_string()))
            })
            .collect();

        Some(Transaction {
            date: date.to_string(),
            transaction_type: TransactionType::from(self.field(record, Field::TransactionType)),
            amount: Amount::or_zero(self.field(record, Field::Amount)),
            gst_rate: Amount::or_zero(self.field(record, Field::GstRate)).value(),
            gst_amount: Amount::or_zero(self.field(record, Field::GstAmount)),
            category: self.text(record, Field::Category),
            vendor_or_client: self.text(record, Field::VendorOrClient),
            description: self.text(record, Field::Description),
            invoice_number: self.text(record, Field::InvoiceNumber),
            payment_status: self.text(record, Field::PaymentStatus),
            extra
        })
    }

    fn field<'a>(&self, record: &'a RawRecord, field: Field) -> &'a str {
        self.columns.index_of(field)
            .and_then(|index| record.value_at(index))
            .unwrap_or("")
    }

    fn text(&self, record: &RawRecord, field: Field) -> String {
        self.field(record, field).to_string()
    }
}

/// Normalizes records using the columns of their own header row with default settings.
pub fn normalize(records: &[RawRecord]) -> Vec<Transaction> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    Normalizer::new(ColumnMap::resolve(first.headers())).normalize(records)
}
