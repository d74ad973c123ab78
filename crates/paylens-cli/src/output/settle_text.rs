use std::io;

use paylens_client::display::format_inr;
use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_settle(data: &Value) -> io::Result<String> {
    let totals = data
        .get("totals")
        .ok_or_else(|| io::Error::other("settle output requires totals"))?;
    let rates = data
        .get("rates")
        .ok_or_else(|| io::Error::other("settle output requires rates"))?;
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let mut lines = vec![
        "Settlement breakdown:".to_string(),
        String::new(),
        format!(
            "Rates: gateway {}, platform {}, TDS {} (on mentor share)",
            percent(rates, "gateway_fee_rate"),
            percent(rates, "platform_share_rate"),
            percent(rates, "tds_rate"),
        ),
    ];

    if !rows.is_empty() {
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
                name: "Gross",
                align: Align::Right,
            },
            Column {
                name: "Gateway fee",
                align: Align::Right,
            },
            Column {
                name: "TDS",
                align: Align::Right,
            },
            Column {
                name: "Mentor payout",
                align: Align::Right,
            },
        ];

        let table_rows = rows
            .iter()
            .map(|row| {
                vec![
                    row.get("date")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                    row.get("mentor")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                    format_inr(amount(row, "gross_amount")),
                    format_inr(amount(row, "gateway_fee")),
                    format_inr(amount(row, "tax_withheld")),
                    format_inr(amount(row, "mentor_payout")),
                ]
            })
            .collect::<Vec<Vec<String>>>();

        lines.push(String::new());
        lines.extend(format::render_table_or_blocks(
            &columns,
            &table_rows,
            format::terminal_width(),
            "Settlement",
        ));
    }

    lines.push(String::new());
    lines.push("Totals:".to_string());
    let entries = [
        ("Gross amount:", format_inr(amount(totals, "gross_amount"))),
        ("Gateway fee:", format_inr(amount(totals, "gateway_fee"))),
        (
            "Platform share:",
            format_inr(amount(totals, "platform_share")),
        ),
        (
            "Platform net (after fee):",
            format_inr(amount(totals, "platform_net")),
        ),
        ("Mentor share:", format_inr(amount(totals, "mentor_share"))),
        ("TDS withheld:", format_inr(amount(totals, "tax_withheld"))),
        (
            "Mentor payout:",
            format_inr(amount(totals, "mentor_payout")),
        ),
    ];
    lines.extend(format::key_value_rows(&entries, 2));

    Ok(lines.join("\n"))
}

fn amount(value: &Value, key: &str) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn percent(rates: &Value, key: &str) -> String {
    let fraction = rates.get(key).and_then(Value::as_f64).unwrap_or(0.0);
    let text = format!("{:.4}", fraction * 100.0);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}%")
}
