use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{Summary, Transaction, TransactionType};
use crate::types::Amount;

/// Reduces `transactions` into a fresh `Summary` stamped with the current time.
pub fn aggregate(transactions: Vec<Transaction>) -> Summary {
    aggregate_at(transactions, Utc::now())
}

/// Same as `aggregate` with an explicit timestamp.
///
/// Only the exact labels `Revenue` and `Expense` count towards the totals. Any other
/// label is kept in the transaction list and excluded from both.
pub fn aggregate_at(transactions: Vec<Transaction>, now: DateTime<Utc>) -> Summary {
    let mut total_revenue = Amount::ZERO;
    let mut total_expenses = Amount::ZERO;
    let mut gst_collected = Amount::ZERO;
    let mut gst_paid = Amount::ZERO;
    let mut unclassified = 0usize;

    for transaction in &transactions {
        match transaction.transaction_type {
            TransactionType::Revenue => {
                total_revenue += transaction.amount;
                gst_collected += transaction.gst_amount;
            }
            TransactionType::Expense => {
                total_expenses += transaction.amount;
                gst_paid += transaction.gst_amount;
            }
            TransactionType::Other(_) => unclassified += 1
        }
    }

    debug!(
        "Aggregated {} transactions ({unclassified} unclassified): revenue {total_revenue}, expenses {total_expenses}",
        transactions.len()
    );

    Summary::from_totals(total_revenue, total_expenses, gst_collected, gst_paid, transactions, now)
}
