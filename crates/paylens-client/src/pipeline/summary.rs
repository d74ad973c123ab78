use serde::Serialize;

use crate::pipeline::normalize::CanonicalTransaction;

/// Incoming/outgoing totals over one normalized snapshot, as shown on the
/// wallet summary cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SnapshotSummary {
    pub credit_total: f64,
    pub debit_total: f64,
    pub net_change: f64,
    pub credit_count: usize,
    pub debit_count: usize,
    pub total_count: usize,
}

pub fn summarize(transactions: &[CanonicalTransaction]) -> SnapshotSummary {
    let mut summary = SnapshotSummary {
        total_count: transactions.len(),
        ..SnapshotSummary::default()
    };

    for txn in transactions {
        summary.credit_total += txn.credit_amount;
        summary.debit_total += txn.debit_amount;
        if txn.credit_amount > 0.0 {
            summary.credit_count += 1;
        }
        if txn.debit_amount > 0.0 {
            summary.debit_count += 1;
        }
    }

    summary.net_change = summary.credit_total - summary.debit_total;
    summary
}
