use super::{Storage, SummaryStorage};
use crate::models::{Summary, SummaryPatch};
use crate::pipeline::{aggregate, normalize, parse, TEMPLATE_CSV};
use crate::types::{Amount, Delimiter};

use anyhow::{anyhow, Result};
use chrono::Utc;
use std::str::FromStr;

fn template_summary() -> Result<Summary> {
    Ok(aggregate(normalize(parse(TEMPLATE_CSV, Delimiter::COMMA)?.records())))
}

#[test]
fn test_storage_basic_load_and_save_operations() -> Result<()> {
    let mut storage = SummaryStorage::new();

    assert!(storage.load().is_none());

    storage.save(template_summary()?);

    let current = storage.current().ok_or_else(|| anyhow!("Summary not found in storage"))?;

    assert_eq!(current.transactions().len(), 5);

    let loaded = storage.load().ok_or_else(|| anyhow!("Summary not found in storage"))?;

    assert_eq!(loaded.total_revenue(), Amount::from_str("175000")?);
    assert!(storage.current().is_none());

    Ok(())
}

#[test]
fn test_storage_save_replaces_previous_summary() -> Result<()> {
    let mut storage = SummaryStorage::new();
    storage.save(template_summary()?);
    storage.save(Summary::empty(Utc::now()));

    let current = storage.current().ok_or_else(|| anyhow!("Summary missing"))?;

    assert!(current.transactions().is_empty());
    assert!(current.total_revenue().is_zero());

    Ok(())
}

#[test]
fn test_storage_merge_keeps_transactions_and_applies_scalars() -> Result<()> {
    let mut storage = SummaryStorage::new();
    storage.save(template_summary()?);

    storage.merge(SummaryPatch { ebitda: Some(Amount::from_str("3200000")?), ..Default::default() });
    storage.merge(SummaryPatch { creditor_days: Some(28), ..Default::default() });

    let current = storage.current().ok_or_else(|| anyhow!("Summary missing after merge"))?;

    assert_eq!(current.transactions().len(), 5);
    assert_eq!(current.ebitda(), Some(Amount::from_str("3200000")?));
    assert_eq!(current.creditor_days(), Some(28));
    assert_eq!(current.total_expenses(), Amount::from_str("48000")?);

    Ok(())
}

#[test]
fn test_storage_merge_into_empty_storage_creates_summary() -> Result<()> {
    let mut storage = SummaryStorage::new();
    storage.merge(SummaryPatch { debtor_days: Some(42), ..Default::default() });

    let current = storage.current().ok_or_else(|| anyhow!("Summary missing after merge"))?;

    assert_eq!(current.debtor_days(), Some(42));
    assert!(current.transactions().is_empty());

    Ok(())
}
