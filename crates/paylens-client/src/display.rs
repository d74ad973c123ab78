use chrono::{DateTime, FixedOffset};

pub const INVALID_DATE_LABEL: &str = "Invalid date";

/// Renders a timestamp the way the transaction tables display it
/// (`Mar 5, 2024 10:00 AM`). The search predicate matches against this exact
/// string, so display and search never disagree.
pub fn format_timestamp(timestamp: Option<&DateTime<FixedOffset>>) -> String {
    match timestamp {
        Some(value) => value.format("%b %-d, %Y %-I:%M %p").to_string(),
        None => INVALID_DATE_LABEL.to_string(),
    }
}

/// Plain decimal rendering of an amount, matching how upstream displayed the
/// raw number (`250`, `250.5`). Used by the search predicate.
pub fn format_amount(value: f64) -> String {
    format!("{value}")
}

/// Indian-locale currency rendering with lakh/crore digit grouping
/// (`₹1,23,456.78`). Non-finite values render as `N/A`.
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let rounded = format!("{:.2}", value.abs());
    let (integer_part, fraction_part) = match rounded.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (rounded.as_str(), "00"),
    };

    format!(
        "{sign}\u{20b9}{}.{fraction_part}",
        group_indian(integer_part)
    )
}

/// Human label for a transaction kind. Known labels are title-cased,
/// unrecognized values pass through verbatim, empty means unknown.
pub fn kind_label(kind: &str) -> String {
    match kind.to_lowercase().as_str() {
        "credit" => "Credit".to_string(),
        "debit" => "Debit".to_string(),
        "refund" => "Refund".to_string(),
        "payment" => "Payment".to_string(),
        "withdrawal" => "Withdrawal".to_string(),
        "deposit" => "Deposit".to_string(),
        "transfer" => "Transfer".to_string(),
        "session payment" | "session-payment" => "Session Payment".to_string(),
        "" => "Unknown".to_string(),
        _ => kind.to_string(),
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<String> = Vec::new();
    let head_chars = head.chars().collect::<Vec<char>>();
    let mut index = head_chars.len();
    while index > 0 {
        let start = index.saturating_sub(2);
        groups.push(head_chars[start..index].iter().collect());
        index = start;
    }
    groups.reverse();
    groups.push(tail.to_string());
    groups.join(",")
}
