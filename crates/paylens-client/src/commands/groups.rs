use crate::ClientResult;
use crate::commands::common::{load_transactions, sort_newest_first};
use crate::contracts::envelope::SuccessEnvelope;
use crate::contracts::types::{GroupIndexData, MonthGroupRow, YearGroupRow};
use crate::pipeline::group::group_by_year_month;

#[derive(Debug, Default)]
pub struct GroupsOptions {
    pub path: Option<String>,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<String>) -> ClientResult<SuccessEnvelope> {
    run_with_options(GroupsOptions {
        path,
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: GroupsOptions) -> ClientResult<SuccessEnvelope> {
    let mut transactions = load_transactions(options.path.as_deref(), options.stdin_override)?;
    let total_transactions = transactions.len();
    sort_newest_first(&mut transactions);

    let index = group_by_year_month(&transactions);

    // Years render newest first; months keep bucket order, which is already
    // newest first because the input was sorted before grouping.
    let mut years = Vec::new();
    for label in index.year_labels_desc() {
        let Some(bucket) = index.year(&label) else {
            continue;
        };

        let mut year_row = YearGroupRow {
            year: bucket.label.clone(),
            transaction_count: 0,
            credit_total: 0.0,
            debit_total: 0.0,
            months: Vec::new(),
        };

        for month in &bucket.months {
            let mut month_row = MonthGroupRow {
                month: month.label.clone(),
                transaction_count: month.transactions.len(),
                credit_total: 0.0,
                debit_total: 0.0,
            };
            for txn in &month.transactions {
                month_row.credit_total += txn.credit_amount;
                month_row.debit_total += txn.debit_amount;
            }

            year_row.transaction_count += month_row.transaction_count;
            year_row.credit_total += month_row.credit_total;
            year_row.debit_total += month_row.debit_total;
            year_row.months.push(month_row);
        }

        years.push(year_row);
    }

    SuccessEnvelope::for_command(
        "groups",
        GroupIndexData {
            years,
            total_transactions,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::{GroupsOptions, run_with_options};

    #[test]
    fn groups_report_counts_and_directional_totals() {
        let snapshot = r#"[
            {"_id": "a", "createdAt": "2024-03-05T10:00:00Z", "creditAmt": 100},
            {"_id": "b", "createdAt": "2024-03-20T10:00:00Z", "debitAmt": 40},
            {"_id": "c", "createdAt": "2023-12-01T10:00:00Z", "creditAmt": 9}
        ]"#;

        let envelope = run_with_options(GroupsOptions {
            stdin_override: Some(snapshot.to_string()),
            ..GroupsOptions::default()
        });

        assert!(envelope.is_ok());
        if let Ok(value) = envelope {
            assert_eq!(value.data["total_transactions"], 3);
            assert_eq!(value.data["years"][0]["year"], "2024");
            assert_eq!(value.data["years"][0]["transaction_count"], 2);
            assert_eq!(value.data["years"][0]["months"][0]["month"], "March");
            assert_eq!(value.data["years"][0]["months"][0]["credit_total"], 100.0);
            assert_eq!(value.data["years"][0]["months"][0]["debit_total"], 40.0);
            assert_eq!(value.data["years"][1]["year"], "2023");
        }
    }

    #[test]
    fn invalid_dates_land_in_a_trailing_bucket() {
        let snapshot = r#"[
            {"_id": "good", "createdAt": "2024-01-01T00:00:00Z", "amount": 1},
            {"_id": "bad", "createdAt": "whenever", "amount": 2}
        ]"#;

        let envelope = run_with_options(GroupsOptions {
            stdin_override: Some(snapshot.to_string()),
            ..GroupsOptions::default()
        });

        assert!(envelope.is_ok());
        if let Ok(value) = envelope {
            assert_eq!(value.data["years"][1]["year"], "Invalid date");
            assert_eq!(value.data["years"][1]["transaction_count"], 1);
        }
    }
}
