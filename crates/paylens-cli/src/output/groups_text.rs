use std::io;

use paylens_client::display::format_inr;
use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_groups(data: &Value) -> io::Result<String> {
    let years = data
        .get("years")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("groups output requires years"))?;
    let total = data
        .get("total_transactions")
        .and_then(Value::as_u64)
        .unwrap_or(0);

    if years.is_empty() {
        return Ok("No transactions to group; the snapshot was empty.".to_string());
    }

    let mut lines = vec![format!("Activity by year and month ({total} transactions):")];

    for year in years {
        let label = year.get("year").and_then(Value::as_str).unwrap_or("");
        let count = year
            .get("transaction_count")
            .and_then(Value::as_u64)
            .unwrap_or(0);

        lines.push(String::new());
        lines.push(format!("{label} — {count} transactions"));

        let columns = [
            Column {
                name: "Month",
                align: Align::Left,
            },
            Column {
                name: "Count",
                align: Align::Right,
            },
            Column {
                name: "Credits",
                align: Align::Right,
            },
            Column {
                name: "Debits",
                align: Align::Right,
            },
        ];

        let rows = year
            .get("months")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
            .iter()
            .map(|month| {
                vec![
                    month
                        .get("month")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                    month
                        .get("transaction_count")
                        .and_then(Value::as_u64)
                        .unwrap_or(0)
                        .to_string(),
                    format_inr(
                        month
                            .get("credit_total")
                            .and_then(Value::as_f64)
                            .unwrap_or(0.0),
                    ),
                    format_inr(
                        month
                            .get("debit_total")
                            .and_then(Value::as_f64)
                            .unwrap_or(0.0),
                    ),
                ]
            })
            .collect::<Vec<Vec<String>>>();

        lines.extend(format::render_table_or_blocks(
            &columns,
            &rows,
            format::terminal_width(),
            "Month",
        ));
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_groups;

    #[test]
    fn renders_year_sections_with_month_tables() {
        let data = json!({
            "years": [{
                "year": "2024",
                "transaction_count": 2,
                "credit_total": 100.0,
                "debit_total": 40.0,
                "months": [{
                    "month": "March",
                    "transaction_count": 2,
                    "credit_total": 100.0,
                    "debit_total": 40.0
                }]
            }],
            "total_transactions": 2
        });

        let rendered = render_groups(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("Activity by year and month (2 transactions):"));
            assert!(text.contains("2024 — 2 transactions"));
            assert!(text.contains("March"));
            assert!(text.contains("₹100.00"));
        }
    }

    #[test]
    fn empty_snapshot_has_a_plain_message() {
        let data = json!({"years": [], "total_transactions": 0});
        let rendered = render_groups(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("snapshot was empty"));
        }
    }
}
