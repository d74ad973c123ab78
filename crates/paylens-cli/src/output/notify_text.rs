use std::io;

use paylens_client::display::format_inr;
use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_notify_add(data: &Value) -> io::Result<String> {
    let notification = data
        .get("notification")
        .ok_or_else(|| io::Error::other("notify add output requires the stored notification"))?;
    let store_path = data
        .get("store_path")
        .and_then(Value::as_str)
        .unwrap_or("");

    let mut lines = vec!["Notification stored.".to_string(), String::new()];
    lines.extend(notification_entries(notification));
    lines.push(String::new());
    lines.push(format!("Store: {store_path}"));

    Ok(lines.join("\n"))
}

pub fn render_notify_list(data: &Value) -> io::Result<String> {
    let notifications = data
        .get("notifications")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("notify list output requires notifications"))?;

    if notifications.is_empty() {
        let mut lines = vec!["No notifications stored yet.".to_string(), String::new()];
        lines.push("Store one:".to_string());
        lines.push("  1. cat payload.json | paylens notify add".to_string());
        lines.push("  2. paylens notify add <path>".to_string());
        return Ok(lines.join("\n"));
    }

    let columns = [
        Column {
            name: "Id",
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

    let rows = notifications
        .iter()
        .map(|item| {
            vec![
                text(item, "_id"),
                text(item, "userName"),
                text(item, "transactionType"),
                text(item, "status"),
                item.get("amount")
                    .and_then(Value::as_f64)
                    .map(format_inr)
                    .unwrap_or_default(),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    let total = data.get("total").and_then(Value::as_u64).unwrap_or(0);
    let mut lines = vec![format!("Stored notifications ({total}, newest first):")];
    lines.extend(format::render_table_or_blocks(
        &columns,
        &rows,
        format::terminal_width(),
        "Notification",
    ));

    Ok(lines.join("\n"))
}

pub fn render_notify_show(data: &Value) -> io::Result<String> {
    let mut lines = vec!["Notification:".to_string(), String::new()];
    lines.extend(notification_entries(data));
    Ok(lines.join("\n"))
}

fn notification_entries(notification: &Value) -> Vec<String> {
    let mut entries = vec![("Id:", text(notification, "_id"))];

    for (label, key) in [
        ("User:", "userName"),
        ("Email:", "userEmail"),
        ("Type:", "transactionType"),
        ("Status:", "status"),
        ("Transaction:", "transactionId"),
        ("Payment:", "paymentId"),
        ("Source:", "source"),
        ("Received:", "createdAt"),
    ] {
        let value = text(notification, key);
        if !value.is_empty() {
            entries.push((label, value));
        }
    }

    if let Some(amount) = notification.get("amount").and_then(Value::as_f64) {
        entries.push(("Amount:", format_inr(amount)));
    }

    format::key_value_rows(&entries, 2)
}

fn text(value: &Value, key: &str) -> String {
    value.get(key).and_then(Value::as_str).unwrap_or("").to_string()
}
