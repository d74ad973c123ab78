use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::Value;

pub const UNKNOWN_MENTOR: &str = "(Unknown mentor)";
pub const UNKNOWN_USER: &str = "(Unknown user)";

/// A counterparty reference as upstream records carry it: either a bare
/// identifier string (unresolvable to a display name) or a populated profile
/// with nested name parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterpartyRef {
    Identifier(String),
    Profile {
        first_name: Option<String>,
        last_name: Option<String>,
    },
}

impl CounterpartyRef {
    pub fn from_value(value: Option<&Value>) -> Option<Self> {
        match value? {
            Value::String(id) => Some(Self::Identifier(id.clone())),
            Value::Object(fields) => {
                let name = fields.get("name").and_then(Value::as_object);
                Some(Self::Profile {
                    first_name: name
                        .and_then(|inner| inner.get("firstName"))
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    last_name: name
                        .and_then(|inner| inner.get("lastName"))
                        .and_then(Value::as_str)
                        .map(str::to_string),
                })
            }
            _ => None,
        }
    }

    /// Trimmed `first last` concatenation. Identifiers and profiles whose
    /// name parts collapse to nothing resolve to `None`, which callers turn
    /// into the explicit unknown placeholder.
    pub fn display_name(&self) -> Option<String> {
        match self {
            Self::Identifier(_) => None,
            Self::Profile {
                first_name,
                last_name,
            } => {
                let first = first_name.as_deref().unwrap_or("").trim();
                let last = last_name.as_deref().unwrap_or("").trim();
                let full = format!("{first} {last}").trim().to_string();
                if full.is_empty() { None } else { Some(full) }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterpartyNames {
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionDetails {
    pub duration_minutes: Option<f64>,
    pub call_type: Option<String>,
    pub scheduled_date: Option<String>,
    pub scheduled_time: Option<String>,
    pub booking_type: Option<String>,
}

/// The unified internal representation of any money-movement record,
/// regardless of which upstream collection it came from. Amounts are always
/// finite and non-negative; direction lives in `kind` and the separate
/// credit/debit fields, never in the sign.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalTransaction {
    pub id: String,
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub names: CounterpartyNames,
    pub description: String,
    pub kind: String,
    pub status: String,
    pub gross_amount: f64,
    pub credit_amount: f64,
    pub debit_amount: f64,
    pub closing_balance: Option<f64>,
    pub session: Option<SessionDetails>,
}

/// Maps one loosely-typed upstream record into a `CanonicalTransaction`.
/// Never fails: missing or malformed fields are replaced with safe defaults
/// so one bad row can only ever look wrong, not break the batch.
pub fn normalize(record: &Value) -> CanonicalTransaction {
    let kind = read_string(record, &["type", "transactionType"]);
    let status = read_string(record, &["status"]);
    let description = read_string(record, &["description"]);
    let id = read_string(record, &["_id", "transactionId", "id"]);

    let timestamp = read_raw_string(record, &["createdAt", "timestamp", "date"])
        .as_deref()
        .and_then(parse_timestamp);

    let explicit_amount = record.get("amount").map(coerce_amount);
    let mut credit_amount = record.get("creditAmt").map(coerce_amount).unwrap_or(0.0);
    let mut debit_amount = record.get("debitAmt").map(coerce_amount).unwrap_or(0.0);

    let gross_amount = match explicit_amount {
        Some(amount) => amount,
        None if credit_amount > 0.0 => credit_amount,
        None => debit_amount,
    };

    // Session-payment and notification records carry a single `amount`;
    // fold it into the matching direction so summaries stay consistent.
    if explicit_amount.is_some() && credit_amount == 0.0 && debit_amount == 0.0 {
        if kind.eq_ignore_ascii_case("debit") {
            debit_amount = gross_amount;
        } else {
            credit_amount = gross_amount;
        }
    }

    CanonicalTransaction {
        id,
        timestamp,
        names: resolve_names(record),
        description,
        kind,
        status,
        gross_amount,
        credit_amount,
        debit_amount,
        closing_balance: record.get("closingBal").map(coerce_amount),
        session: read_session(record),
    }
}

pub fn normalize_snapshot(records: &[Value]) -> Vec<CanonicalTransaction> {
    records.iter().map(normalize).collect()
}

/// Coerces an upstream amount to a finite, non-negative decimal. Numbers
/// pass through, strings parse as decimal, anything unparseable or negative
/// collapses to 0.
pub fn coerce_amount(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    if parsed.is_finite() && parsed > 0.0 {
        parsed
    } else {
        0.0
    }
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return assume_utc(naive);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return assume_utc(naive);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).and_then(assume_utc);
    }

    None
}

fn assume_utc(naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    FixedOffset::east_opt(0).and_then(|offset| naive.and_local_timezone(offset).single())
}

fn resolve_names(record: &Value) -> CounterpartyNames {
    let primary = read_raw_string(record, &["mentorName"])
        .filter(|value| !value.trim().is_empty())
        .or_else(|| {
            CounterpartyRef::from_value(record.get("mentorId"))
                .as_ref()
                .and_then(CounterpartyRef::display_name)
        })
        .unwrap_or_else(|| UNKNOWN_MENTOR.to_string());

    let secondary = read_raw_string(record, &["userName"])
        .filter(|value| !value.trim().is_empty())
        .or_else(|| {
            CounterpartyRef::from_value(record.get("userId"))
                .as_ref()
                .and_then(CounterpartyRef::display_name)
        })
        .unwrap_or_else(|| UNKNOWN_USER.to_string());

    CounterpartyNames { primary, secondary }
}

fn read_session(record: &Value) -> Option<SessionDetails> {
    let duration_minutes = record.get("sessionDuration").map(coerce_amount);
    let call_type = read_raw_string(record, &["sessionCallType"]);
    let scheduled_date = read_raw_string(record, &["sessionDate"]);
    let scheduled_time = read_raw_string(record, &["sessionTime"]);
    let booking_type = read_raw_string(record, &["bookingType"]);

    if duration_minutes.is_none()
        && call_type.is_none()
        && scheduled_date.is_none()
        && scheduled_time.is_none()
        && booking_type.is_none()
    {
        return None;
    }

    Some(SessionDetails {
        duration_minutes,
        call_type,
        scheduled_date,
        scheduled_time,
        booking_type,
    })
}

fn read_string(record: &Value, keys: &[&str]) -> String {
    read_raw_string(record, keys).unwrap_or_default()
}

fn read_raw_string(record: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        match record.get(key) {
            Some(Value::String(text)) => return Some(text.clone()),
            Some(Value::Number(number)) => return Some(number.to_string()),
            _ => continue,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{CounterpartyRef, UNKNOWN_MENTOR, UNKNOWN_USER, coerce_amount, normalize};

    #[test]
    fn bare_identifier_counterparty_falls_back_to_unknown_placeholder() {
        let record = json!({
            "mentorId": "x123",
            "createdAt": "2024-03-05T10:00:00Z",
            "amount": "250"
        });

        let txn = normalize(&record);
        assert_eq!(txn.names.primary, UNKNOWN_MENTOR);
        assert_eq!(txn.names.secondary, UNKNOWN_USER);
        assert_eq!(txn.gross_amount, 250.0);
        assert!(txn.timestamp.is_some());
    }

    #[test]
    fn populated_profile_resolves_full_name() {
        let record = json!({
            "mentorId": { "_id": "m1", "name": { "firstName": " Asha ", "lastName": "Rao" } },
            "userId": { "_id": "u1", "name": { "firstName": "Dev" } },
            "amount": 500,
            "createdAt": "2024-06-01T08:30:00Z"
        });

        let txn = normalize(&record);
        assert_eq!(txn.names.primary, "Asha Rao");
        assert_eq!(txn.names.secondary, "Dev");
    }

    #[test]
    fn flat_name_overrides_win_over_references() {
        let record = json!({
            "mentorName": "Priya K",
            "mentorId": { "name": { "firstName": "Someone", "lastName": "Else" } },
            "amount": 100
        });

        let txn = normalize(&record);
        assert_eq!(txn.names.primary, "Priya K");
    }

    #[test]
    fn profile_with_empty_name_parts_is_unresolved() {
        let reference = CounterpartyRef::from_value(Some(&json!({
            "name": { "firstName": "  ", "lastName": "" }
        })));
        assert!(reference.is_some());
        if let Some(value) = reference {
            assert_eq!(value.display_name(), None);
        }
    }

    #[test]
    fn amounts_coerce_to_finite_non_negative_values() {
        assert_eq!(coerce_amount(&json!("250.75")), 250.75);
        assert_eq!(coerce_amount(&json!(42)), 42.0);
        assert_eq!(coerce_amount(&json!("not a number")), 0.0);
        assert_eq!(coerce_amount(&json!(-10)), 0.0);
        assert_eq!(coerce_amount(&json!(null)), 0.0);
        assert_eq!(coerce_amount(&json!({"nested": true})), 0.0);
    }

    #[test]
    fn wallet_ledger_entries_keep_credit_and_debit_directions() {
        let record = json!({
            "_id": "w1",
            "creditAmt": "150",
            "debitAmt": 0,
            "closingBal": "1150",
            "transactionType": "credit",
            "status": "success",
            "createdAt": "2024-01-02T12:00:00Z"
        });

        let txn = normalize(&record);
        assert_eq!(txn.credit_amount, 150.0);
        assert_eq!(txn.debit_amount, 0.0);
        assert_eq!(txn.gross_amount, 150.0);
        assert_eq!(txn.closing_balance, Some(1150.0));
        assert_eq!(txn.kind, "credit");
    }

    #[test]
    fn single_amount_records_fold_into_the_kind_direction() {
        let debit = normalize(&json!({ "amount": 75, "type": "debit" }));
        assert_eq!(debit.debit_amount, 75.0);
        assert_eq!(debit.credit_amount, 0.0);

        let credit = normalize(&json!({ "amount": 75, "type": "credit" }));
        assert_eq!(credit.credit_amount, 75.0);
        assert_eq!(credit.debit_amount, 0.0);
    }

    #[test]
    fn unparseable_timestamp_stays_unset_instead_of_failing() {
        let txn = normalize(&json!({ "createdAt": "yesterday-ish", "amount": 10 }));
        assert!(txn.timestamp.is_none());
        assert_eq!(txn.gross_amount, 10.0);
    }

    #[test]
    fn empty_record_normalizes_to_safe_defaults() {
        let txn = normalize(&json!({}));
        assert_eq!(txn.gross_amount, 0.0);
        assert_eq!(txn.description, "");
        assert_eq!(txn.names.primary, UNKNOWN_MENTOR);
        assert!(txn.timestamp.is_none());
        assert!(txn.session.is_none());
    }

    #[test]
    fn session_fields_attach_only_when_present() {
        let txn = normalize(&json!({
            "amount": 300,
            "sessionDuration": 45,
            "sessionCallType": "video",
            "sessionTime": "10:30 AM"
        }));

        assert!(txn.session.is_some());
        if let Some(session) = txn.session {
            assert_eq!(session.duration_minutes, Some(45.0));
            assert_eq!(session.call_type.as_deref(), Some("video"));
            assert_eq!(session.scheduled_date, None);
        }
    }

    #[test]
    fn date_only_and_space_separated_timestamps_parse() {
        let date_only = normalize(&json!({ "createdAt": "2024-03-05" }));
        assert!(date_only.timestamp.is_some());

        let spaced = normalize(&json!({ "createdAt": "2024-03-05 10:00:00" }));
        assert!(spaced.timestamp.is_some());
    }
}
