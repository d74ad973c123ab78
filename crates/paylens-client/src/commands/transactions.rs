use crate::commands::common::{load_transactions, sort_newest_first, transaction_row};
use crate::contracts::envelope::SuccessEnvelope;
use crate::contracts::types::{PageInfo, TransactionListData};
use crate::pipeline::filter::filter_transactions;
use crate::pipeline::group::group_by_year_month;
use crate::pipeline::normalize::CanonicalTransaction;
use crate::pipeline::paginate::paginate;
use crate::{ClientError, ClientResult};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Default)]
pub struct TransactionsOptions {
    pub path: Option<String>,
    pub search: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub page: usize,
    pub page_size: usize,
    pub stdin_override: Option<String>,
}

pub fn run(
    path: Option<String>,
    search: Option<String>,
    year: Option<String>,
    month: Option<String>,
    page: usize,
    page_size: usize,
) -> ClientResult<SuccessEnvelope> {
    run_with_options(TransactionsOptions {
        path,
        search,
        year,
        month,
        page,
        page_size,
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: TransactionsOptions) -> ClientResult<SuccessEnvelope> {
    if options.month.is_some() && options.year.is_none() {
        return Err(ClientError::invalid_argument_for_command(
            "`--month` requires `--year`.",
            Some("transactions"),
        ));
    }

    let mut transactions = load_transactions(options.path.as_deref(), options.stdin_override)?;
    let source_records = transactions.len();
    sort_newest_first(&mut transactions);

    let scoped = drill_down(
        transactions,
        options.year.as_deref(),
        options.month.as_deref(),
    )?;

    let search_term = options.search.as_deref().unwrap_or("");
    let matched = filter_transactions(&scoped, search_term);

    let page_size = if options.page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        options.page_size
    };
    let page = paginate(&matched, options.page.max(1), page_size);

    let data = TransactionListData {
        rows: page.items.iter().map(transaction_row).collect(),
        page: PageInfo {
            current_page: page.current_page,
            total_pages: page.total_pages,
            page_size,
            total_matches: page.total,
        },
        search: options.search,
        year: options.year,
        month: options.month,
        source_records,
    };

    SuccessEnvelope::for_command("transactions", data)
}

/// Narrows to one year bucket (and optionally one month inside it). Labels
/// match case-insensitively; an unknown label is an argument error that
/// lists what the snapshot actually contains.
fn drill_down(
    transactions: Vec<CanonicalTransaction>,
    year: Option<&str>,
    month: Option<&str>,
) -> ClientResult<Vec<CanonicalTransaction>> {
    let Some(year_value) = year else {
        return Ok(transactions);
    };

    let index = group_by_year_month(&transactions);
    let Some(year_bucket) = index.year(year_value) else {
        return Err(ClientError::invalid_argument_with_recovery(
            &format!("No transactions found in year `{year_value}`."),
            vec![format!(
                "Available years: {}.",
                join_or_none(&index.year_labels_desc())
            )],
        ));
    };

    let Some(month_value) = month else {
        return Ok(year_bucket
            .months
            .iter()
            .flat_map(|bucket| bucket.transactions.iter().cloned())
            .collect());
    };

    let Some(month_bucket) = year_bucket.month(month_value) else {
        let labels = year_bucket
            .months
            .iter()
            .map(|bucket| bucket.label.clone())
            .collect::<Vec<String>>();
        return Err(ClientError::invalid_argument_with_recovery(
            &format!("No transactions found in `{month_value}` of `{year_value}`."),
            vec![format!(
                "Months with activity in {year_value}: {}.",
                join_or_none(&labels)
            )],
        ));
    };

    Ok(month_bucket.transactions.clone())
}

fn join_or_none(labels: &[String]) -> String {
    if labels.is_empty() {
        "none".to_string()
    } else {
        labels.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::{TransactionsOptions, run_with_options};

    fn snapshot() -> String {
        r#"[
            {"_id": "a", "createdAt": "2024-03-05T10:00:00Z", "amount": 100, "mentorName": "Asha Rao", "type": "credit"},
            {"_id": "b", "createdAt": "2024-04-01T09:00:00Z", "amount": 200, "mentorName": "Priya K", "type": "credit"},
            {"_id": "c", "createdAt": "2023-12-31T23:00:00Z", "amount": 300, "mentorName": "Asha Rao", "type": "debit"}
        ]"#
        .to_string()
    }

    #[test]
    fn lists_newest_first_with_page_metadata() {
        let envelope = run_with_options(TransactionsOptions {
            stdin_override: Some(snapshot()),
            page: 1,
            page_size: 2,
            ..TransactionsOptions::default()
        });

        assert!(envelope.is_ok());
        if let Ok(value) = envelope {
            assert_eq!(value.command, "transactions");
            assert_eq!(value.data["page"]["total_pages"], 2);
            assert_eq!(value.data["page"]["total_matches"], 3);
            assert_eq!(value.data["rows"][0]["id"], "b");
            assert_eq!(value.data["rows"][1]["id"], "a");
        }
    }

    #[test]
    fn year_and_month_drill_down_narrows_the_list() {
        let envelope = run_with_options(TransactionsOptions {
            stdin_override: Some(snapshot()),
            year: Some("2024".to_string()),
            month: Some("march".to_string()),
            page: 1,
            page_size: 10,
            ..TransactionsOptions::default()
        });

        assert!(envelope.is_ok());
        if let Ok(value) = envelope {
            assert_eq!(value.data["page"]["total_matches"], 1);
            assert_eq!(value.data["rows"][0]["id"], "a");
        }
    }

    #[test]
    fn unknown_year_is_an_argument_error_listing_alternatives() {
        let envelope = run_with_options(TransactionsOptions {
            stdin_override: Some(snapshot()),
            year: Some("1999".to_string()),
            page: 1,
            page_size: 10,
            ..TransactionsOptions::default()
        });

        assert!(envelope.is_err());
        if let Err(error) = envelope {
            assert_eq!(error.code, "invalid_argument");
            assert!(error.recovery_steps[0].contains("2024"));
        }
    }

    #[test]
    fn month_without_year_is_rejected() {
        let envelope = run_with_options(TransactionsOptions {
            stdin_override: Some(snapshot()),
            month: Some("March".to_string()),
            page: 1,
            page_size: 10,
            ..TransactionsOptions::default()
        });

        assert!(envelope.is_err());
    }

    #[test]
    fn search_applies_after_drill_down() {
        let envelope = run_with_options(TransactionsOptions {
            stdin_override: Some(snapshot()),
            year: Some("2024".to_string()),
            search: Some("asha".to_string()),
            page: 1,
            page_size: 10,
            ..TransactionsOptions::default()
        });

        assert!(envelope.is_ok());
        if let Ok(value) = envelope {
            assert_eq!(value.data["page"]["total_matches"], 1);
            assert_eq!(value.data["rows"][0]["mentor"], "Asha Rao");
        }
    }
}
