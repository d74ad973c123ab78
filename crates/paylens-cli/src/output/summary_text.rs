use std::io;

use paylens_client::display::format_inr;
use serde_json::Value;

use super::format;

pub fn render_summary(data: &Value) -> io::Result<String> {
    let total = data
        .get("total_count")
        .and_then(Value::as_u64)
        .ok_or_else(|| io::Error::other("summary output requires total_count"))?;

    let mut lines = vec![format!("Snapshot summary ({total} transactions):"), String::new()];

    let entries = [
        (
            "Credits in:",
            format!(
                "{} across {} transactions",
                format_inr(amount(data, "credit_total")),
                data.get("credit_count").and_then(Value::as_u64).unwrap_or(0)
            ),
        ),
        (
            "Debits out:",
            format!(
                "{} across {} transactions",
                format_inr(amount(data, "debit_total")),
                data.get("debit_count").and_then(Value::as_u64).unwrap_or(0)
            ),
        ),
        ("Net change:", format_inr(amount(data, "net_change"))),
    ];
    lines.extend(format::key_value_rows(&entries, 2));

    Ok(lines.join("\n"))
}

fn amount(data: &Value, key: &str) -> f64 {
    data.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}
