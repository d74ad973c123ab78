use std::cmp::Reverse;
use std::path::{Path, PathBuf};

use crate::ClientResult;
use crate::contracts::types::{SessionInfo, TransactionRow};
use crate::display::{format_timestamp, kind_label};
use crate::pipeline::normalize::{CanonicalTransaction, normalize_snapshot};
use crate::snapshot::{parse_source, read_source};
use crate::state::{ensure_data_directory, resolve_data_home};

/// Resolves and initializes the data home for commands that touch the
/// store or config.
pub(crate) fn load_home(home_override: Option<&Path>) -> ClientResult<PathBuf> {
    let home = resolve_data_home(home_override)?;
    ensure_data_directory(&home)?;
    Ok(home)
}

/// Reads, parses, and normalizes one snapshot source end to end.
pub(crate) fn load_transactions(
    path: Option<&str>,
    stdin_override: Option<String>,
) -> ClientResult<Vec<CanonicalTransaction>> {
    let body = read_source(path, stdin_override)?;
    let records = parse_source(&body)?;
    Ok(normalize_snapshot(&records))
}

/// Newest first; records without a parseable timestamp sort last, keeping
/// their input order among themselves.
pub(crate) fn sort_newest_first(transactions: &mut [CanonicalTransaction]) {
    transactions.sort_by_key(|txn| Reverse(txn.timestamp));
}

pub(crate) fn transaction_row(txn: &CanonicalTransaction) -> TransactionRow {
    TransactionRow {
        id: txn.id.clone(),
        date: format_timestamp(txn.timestamp.as_ref()),
        mentor: txn.names.primary.clone(),
        user: txn.names.secondary.clone(),
        description: txn.description.clone(),
        kind: kind_label(&txn.kind),
        status: txn.status.clone(),
        amount: txn.gross_amount,
        credit_amount: txn.credit_amount,
        debit_amount: txn.debit_amount,
        closing_balance: txn.closing_balance,
        session: txn.session.as_ref().map(|details| SessionInfo {
            duration_minutes: details.duration_minutes,
            call_type: details.call_type.clone(),
            scheduled_date: details.scheduled_date.clone(),
            scheduled_time: details.scheduled_time.clone(),
            booking_type: details.booking_type.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::pipeline::normalize::normalize_snapshot;

    use super::sort_newest_first;

    #[test]
    fn sorts_newest_first_with_undated_records_last() {
        let mut txns = normalize_snapshot(&[
            json!({ "_id": "old", "createdAt": "2023-01-01T00:00:00Z" }),
            json!({ "_id": "undated-a" }),
            json!({ "_id": "new", "createdAt": "2025-06-01T00:00:00Z" }),
            json!({ "_id": "undated-b" }),
        ]);

        sort_newest_first(&mut txns);
        let ids = txns.iter().map(|txn| txn.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["new", "old", "undated-a", "undated-b"]);
    }
}
