use crate::display::{format_amount, format_timestamp, kind_label};
use crate::pipeline::normalize::CanonicalTransaction;

/// Case-insensitive substring match over every field the transaction table
/// renders: counterparty names, description, kind label, status, the
/// display-formatted timestamp, and the decimal string of the gross amount.
/// An empty or whitespace-only term matches everything.
pub fn matches_search(txn: &CanonicalTransaction, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let date_text = format_timestamp(txn.timestamp.as_ref()).to_lowercase();

    txn.names.primary.to_lowercase().contains(&needle)
        || txn.names.secondary.to_lowercase().contains(&needle)
        || txn.description.to_lowercase().contains(&needle)
        || kind_label(&txn.kind).to_lowercase().contains(&needle)
        || txn.status.to_lowercase().contains(&needle)
        || date_text.contains(&needle)
        || format_amount(txn.gross_amount).contains(&needle)
}

/// Pure subsequence selection: keeps matching transactions in their
/// original order, mutating nothing.
pub fn filter_transactions(
    transactions: &[CanonicalTransaction],
    term: &str,
) -> Vec<CanonicalTransaction> {
    transactions
        .iter()
        .filter(|txn| matches_search(txn, term))
        .cloned()
        .collect()
}
