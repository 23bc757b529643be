use super::{RawRecord, Summary, SummaryPatch, Transaction, TransactionType, ValidationError};

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::types::Amount;

fn headers(names: &[&str]) -> Arc<[String]> {
    names.iter().map(|name| name.to_string()).collect()
}

fn create_transaction(date: &str, transaction_type: &str, amount: &str) -> Transaction {
    Transaction {
        date: date.to_string(),
        transaction_type: TransactionType::from(transaction_type),
        amount: Amount::or_zero(amount),
        gst_rate: Decimal::ZERO,
        gst_amount: Amount::ZERO,
        category: String::new(),
        vendor_or_client: String::new(),
        description: String::new(),
        invoice_number: String::new(),
        payment_status: String::new(),
        extra: BTreeMap::new()
    }
}

#[test]
fn test_raw_record_pads_short_rows_with_empty_strings() {
    let record = RawRecord::new(headers(&["Date", "Amount", "Category"]), vec!["2024-01-15".to_string()]);

    assert_eq!(record.values().len(), 3);
    assert_eq!(record.get("Amount"), Some(""));
    assert_eq!(record.get("Category"), Some(""));
}

#[test]
fn test_raw_record_drops_fields_beyond_the_header() {
    let values = vec!["2024-01-15".to_string(), "100".to_string(), "surplus".to_string()];
    let record = RawRecord::new(headers(&["Date", "Amount"]), values);

    assert_eq!(record.values(), &["2024-01-15".to_string(), "100".to_string()]);
    assert_eq!(record.value_at(2), None);
}

#[test]
fn test_raw_record_lookup_prefers_rightmost_duplicate_header() {
    let values = vec!["first".to_string(), "second".to_string()];
    let record = RawRecord::new(headers(&["Note", "Note"]), values);

    assert_eq!(record.get("Note"), Some("second"));
    assert_eq!(record.get("Missing"), None);
}

#[test]
fn test_transaction_type_matching_is_case_sensitive() {
    assert_eq!(TransactionType::from("Revenue"), TransactionType::Revenue);
    assert_eq!(TransactionType::from("Expense"), TransactionType::Expense);
    assert_eq!(TransactionType::from("revenue"), TransactionType::Other("revenue".to_string()));
    assert_eq!(TransactionType::from("Refund").to_string(), "Refund");
}

#[test]
fn test_transaction_parses_iso_calendar_dates() -> Result<()> {
    let transaction = create_transaction("2024-01-15", "Revenue", "1");

    assert_eq!(transaction.parsed_date(), NaiveDate::from_ymd_opt(2024, 1, 15));
    assert_eq!(create_transaction("15/01/2024", "Revenue", "1").parsed_date(), None);

    Ok(())
}

#[test]
fn test_summary_net_profit_is_derived_until_overridden() -> Result<()> {
    let now = Utc::now();
    let summary = Summary::from_totals(
        Amount::from_str("175000")?,
        Amount::from_str("48000")?,
        Amount::ZERO,
        Amount::ZERO,
        Vec::new(),
        now
    );

    assert_eq!(summary.net_profit(), Amount::from_str("127000")?);

    let patch = SummaryPatch { net_profit: Some(Amount::from_str("2800000")?), ..Default::default() };
    let merged = summary.merged(patch, now);

    assert_eq!(merged.net_profit(), Amount::from_str("2800000")?);

    Ok(())
}

#[test]
fn test_summary_merge_keeps_transactions_unless_patched() -> Result<()> {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().ok_or_else(|| anyhow::anyhow!("invalid timestamp"))?;
    let merged_at = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).single().ok_or_else(|| anyhow::anyhow!("invalid timestamp"))?;
    let transactions = vec![create_transaction("2024-01-15", "Revenue", "100")];
    let summary = Summary::from_totals(Amount::from_str("100")?, Amount::ZERO, Amount::ZERO, Amount::ZERO, transactions.clone(), created);

    let merged = summary.merged(SummaryPatch { debtor_days: Some(42), ..Default::default() }, merged_at);

    assert_eq!(merged.transactions(), transactions.as_slice());
    assert_eq!(merged.debtor_days(), Some(42));
    assert_eq!(merged.total_revenue(), Amount::from_str("100")?);
    assert_eq!(merged.last_updated(), merged_at);

    let replaced = merged.merged(SummaryPatch { transactions: Some(Vec::new()), ..Default::default() }, merged_at);

    assert!(replaced.transactions().is_empty());
    assert_eq!(replaced.debtor_days(), Some(42));

    Ok(())
}

#[test]
fn test_missing_columns_message_lists_every_column_in_order() {
    let missing: BTreeSet<String> = ["Category", "Amount"].iter().map(|name| name.to_string()).collect();
    let error = ValidationError::MissingColumns(missing);

    assert_eq!(
        error.to_string(),
        "CSV format invalid, missing required columns: Amount, Category. Please use the provided template."
    );
}

#[test]
fn test_summary_serializes_derived_net_profit() -> Result<()> {
    let summary = Summary::from_totals(
        Amount::from_str("175000")?,
        Amount::from_str("48000")?,
        Amount::ZERO,
        Amount::ZERO,
        Vec::new(),
        Utc::now()
    );

    let json = serde_json::to_value(&summary)?;

    assert_eq!(json["net_profit"], "127000");
    assert_eq!(json["total_revenue"], "175000");

    let patch = SummaryPatch { net_profit: Some(Amount::from_str("2800000")?), ..Default::default() };
    let merged = serde_json::to_value(summary.merged(patch, Utc::now()))?;

    assert_eq!(merged["net_profit"], "2800000");

    Ok(())
}
