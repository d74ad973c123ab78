use std::io;

use paylens_client::display::format_inr;
use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_transactions(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("transactions output requires rows"))?;
    let page = data
        .get("page")
        .ok_or_else(|| io::Error::other("transactions output requires page info"))?;

    let mut lines = vec!["Transactions (newest first):".to_string()];
    let scope = render_scope(data);
    if !scope.is_empty() {
        lines.extend(scope);
    }
    lines.push(String::new());

    if rows.is_empty() {
        lines.push("No transactions matched.".to_string());
        lines.push(String::new());
        lines.push("Widen the filters:".to_string());
        lines.push("  1. Drop or shorten --search.".to_string());
        lines.push("  2. Drop --year/--month to see the whole snapshot.".to_string());
        return Ok(lines.join("\n"));
    }

    let columns = [
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Mentor",
            align: Align::Left,
        },
        Column {
            name: "User",
            align: Align::Left,
        },
        Column {
            name: "Type",
            align: Align::Left,
        },
        Column {
            name: "Status",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
    ];

    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                text(row, "date"),
                text(row, "mentor"),
                text(row, "user"),
                text(row, "kind"),
                text(row, "status"),
                format_inr(row.get("amount").and_then(Value::as_f64).unwrap_or(0.0)),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table_or_blocks(
        &columns,
        &table_rows,
        format::terminal_width(),
        "Transaction",
    ));

    lines.push(String::new());
    lines.push(format!(
        "Page {} of {} — {} matching of {} records",
        page.get("current_page").and_then(Value::as_u64).unwrap_or(1),
        page.get("total_pages").and_then(Value::as_u64).unwrap_or(1),
        page.get("total_matches")
            .and_then(Value::as_u64)
            .unwrap_or(0),
        data.get("source_records")
            .and_then(Value::as_u64)
            .unwrap_or(0),
    ));

    Ok(lines.join("\n"))
}

fn render_scope(data: &Value) -> Vec<String> {
    let mut entries = Vec::new();
    if let Some(year) = data.get("year").and_then(Value::as_str) {
        entries.push(("Year:", year.to_string()));
    }
    if let Some(month) = data.get("month").and_then(Value::as_str) {
        entries.push(("Month:", month.to_string()));
    }
    if let Some(search) = data.get("search").and_then(Value::as_str) {
        entries.push(("Search:", format!("\"{search}\"")));
    }
    format::key_value_rows(&entries, 2)
}

fn text(row: &Value, key: &str) -> String {
    row.get(key).and_then(Value::as_str).unwrap_or("").to_string()
}
