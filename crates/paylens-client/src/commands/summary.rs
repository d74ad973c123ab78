use crate::ClientResult;
use crate::commands::common::load_transactions;
use crate::contracts::envelope::SuccessEnvelope;
use crate::contracts::types::SummaryData;
use crate::pipeline::summary::summarize;

#[derive(Debug, Default)]
pub struct SummaryOptions {
    pub path: Option<String>,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<String>) -> ClientResult<SuccessEnvelope> {
    run_with_options(SummaryOptions {
        path,
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: SummaryOptions) -> ClientResult<SuccessEnvelope> {
    let transactions = load_transactions(options.path.as_deref(), options.stdin_override)?;
    let totals = summarize(&transactions);

    SuccessEnvelope::for_command(
        "summary",
        SummaryData {
            credit_total: totals.credit_total,
            debit_total: totals.debit_total,
            net_change: totals.net_change,
            credit_count: totals.credit_count,
            debit_count: totals.debit_count,
            total_count: totals.total_count,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::{SummaryOptions, run_with_options};

    #[test]
    fn summarizes_directional_totals_over_the_snapshot() {
        let snapshot = r#"[
            {"creditAmt": 150, "createdAt": "2024-01-01T00:00:00Z"},
            {"debitAmt": 40, "createdAt": "2024-01-02T00:00:00Z"},
            {"amount": 60, "type": "credit", "createdAt": "2024-01-03T00:00:00Z"}
        ]"#;

        let envelope = run_with_options(SummaryOptions {
            stdin_override: Some(snapshot.to_string()),
            ..SummaryOptions::default()
        });

        assert!(envelope.is_ok());
        if let Ok(value) = envelope {
            assert_eq!(value.command, "summary");
            assert_eq!(value.data["credit_total"], 210.0);
            assert_eq!(value.data["debit_total"], 40.0);
            assert_eq!(value.data["net_change"], 170.0);
            assert_eq!(value.data["total_count"], 3);
        }
    }
}
