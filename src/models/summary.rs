use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::models::Transaction;
use crate::types::Amount;

/// Aggregated figures of one upload plus the transactions they were derived from.
///
/// A `Summary` is a snapshot: nothing mutates it in place. Ingestion builds a new one
/// from scratch and `merged` returns a new value with the patch applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    total_revenue: Amount,
    total_expenses: Amount,
    gst_collected: Amount,
    gst_paid: Amount,
    net_profit: Option<Amount>,
    cash_balance: Option<Amount>,
    current_ratio: Option<Decimal>,
    gross_margin: Option<Decimal>,
    ebitda: Option<Amount>,
    debtor_days: Option<u32>,
    creditor_days: Option<u32>,
    transactions: Vec<Transaction>,
    last_updated: DateTime<Utc>
}

/// Scalar overrides applied by `Summary::merged`.
///
/// A `None` field leaves the previous value alone. `transactions` replaces the list only
/// when it is `Some`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryPatch {
    pub total_revenue: Option<Amount>,
    pub total_expenses: Option<Amount>,
    pub gst_collected: Option<Amount>,
    pub gst_paid: Option<Amount>,
    pub net_profit: Option<Amount>,
    pub cash_balance: Option<Amount>,
    pub current_ratio: Option<Decimal>,
    pub gross_margin: Option<Decimal>,
    pub ebitda: Option<Amount>,
    pub debtor_days: Option<u32>,
    pub creditor_days: Option<u32>,
    pub transactions: Option<Vec<Transaction>>
}

impl Summary {
    /// A summary with zero totals, no metrics and no transactions.
    pub fn empty(last_updated: DateTime<Utc>) -> Self {
        Self {
            total_revenue: Amount::ZERO,
            total_expenses: Amount::ZERO,
            gst_collected: Amount::ZERO,
            gst_paid: Amount::ZERO,
            net_profit: None,
            cash_balance: None,
            current_ratio: None,
            gross_margin: None,
            ebitda: None,
            debtor_days: None,
            creditor_days: None,
            transactions: Vec::new(),
            last_updated
        }
    }

    pub(crate) fn from_totals(
        total_revenue: Amount,
        total_expenses: Amount,
        gst_collected: Amount,
        gst_paid: Amount,
        transactions: Vec<Transaction>,
        last_updated: DateTime<Utc>
    ) -> Self {
        Self {
            total_revenue,
            total_expenses,
            gst_collected,
            gst_paid,
            transactions,
            ..Self::empty(last_updated)
        }
    }

    /// Applies `patch` field by field and stamps the result with `now`.
    pub fn merged(self, patch: SummaryPatch, now: DateTime<Utc>) -> Self {
        Self {
            total_revenue: patch.total_revenue.unwrap_or(self.total_revenue),
            total_expenses: patch.total_expenses.unwrap_or(self.total_expenses),
            gst_collected: patch.gst_collected.unwrap_or(self.gst_collected),
            gst_paid: patch.gst_paid.unwrap_or(self.gst_paid),
            net_profit: patch.net_profit.or(self.net_profit),
            cash_balance: patch.cash_balance.or(self.cash_balance),
            current_ratio: patch.current_ratio.or(self.current_ratio),
            gross_margin: patch.gross_margin.or(self.gross_margin),
            ebitda: patch.ebitda.or(self.ebitda),
            debtor_days: patch.debtor_days.or(self.debtor_days),
            creditor_days: patch.creditor_days.or(self.creditor_days),
            transactions: patch.transactions.unwrap_or(self.transactions),
            last_updated: now
        }
    }

    pub fn total_revenue(&self) -> Amount {
        self.total_revenue
    }

    pub fn total_expenses(&self) -> Amount {
        self.total_expenses
    }

    pub fn gst_collected(&self) -> Amount {
        self.gst_collected
    }

    pub fn gst_paid(&self) -> Amount {
        self.gst_paid
    }

    /// The merged-in net profit if one was supplied, otherwise revenue minus expenses.
    pub fn net_profit(&self) -> Amount {
        self.net_profit.unwrap_or_else(|| {
            let mut net = self.total_revenue;
            net -= self.total_expenses;
            net
        })
    }

    pub fn cash_balance(&self) -> Option<Amount> {
        self.cash_balance
    }

    pub fn current_ratio(&self) -> Option<Decimal> {
        self.current_ratio
    }

    pub fn gross_margin(&self) -> Option<Decimal> {
        self.gross_margin
    }

    pub fn ebitda(&self) -> Option<Amount> {
        self.ebitda
    }

    pub fn debtor_days(&self) -> Option<u32> {
        self.debtor_days
    }

    pub fn creditor_days(&self) -> Option<u32> {
        self.creditor_days
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}

impl Serialize for Summary {
    /// Writes `net_profit` as the value `net_profit()` reports, derived or merged.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Summary", 13)?;
        state.serialize_field("total_revenue", &self.total_revenue)?;
        state.serialize_field("total_expenses", &self.total_expenses)?;
        state.serialize_field("gst_collected", &self.gst_collected)?;
        state.serialize_field("gst_paid", &self.gst_paid)?;
        state.serialize_field("net_profit", &self.net_profit())?;
        state.serialize_field("cash_balance", &self.cash_balance)?;
        state.serialize_field("current_ratio", &self.current_ratio)?;
        state.serialize_field("gross_margin", &self.gross_margin)?;
        state.serialize_field("ebitda", &self.ebitda)?;
        state.serialize_field("debtor_days", &self.debtor_days)?;
        state.serialize_field("creditor_days", &self.creditor_days)?;
        state.serialize_field("transactions", &self.transactions)?;
        state.serialize_field("last_updated", &self.last_updated)?;
        state.end()
    }
}
