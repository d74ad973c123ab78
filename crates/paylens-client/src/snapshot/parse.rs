use serde_json::{Map, Value};

use crate::{ClientError, ClientResult};

/// Parses one upstream snapshot into loosely-typed records for the
/// normalizer. Accepts a JSON array of objects (optionally wrapped in the
/// `{"data": [...]}` or `{"data": {"data": [...]}}` envelopes the upstream
/// APIs produce) or CSV with a header row.
pub fn parse_source(content: &str) -> ClientResult<Vec<Value>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ClientError::invalid_argument(
            "Snapshot source is empty. Provide a JSON array or CSV export.",
        ));
    }

    if looks_like_ndjson(trimmed) {
        return Err(ClientError::invalid_snapshot_format(
            "NDJSON is not supported. Provide a JSON array or CSV.",
            "ndjson",
        ));
    }

    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        return parse_json(trimmed);
    }

    if looks_like_csv(trimmed) {
        return parse_csv(trimmed);
    }

    Err(ClientError::invalid_snapshot_format(
        "Unsupported snapshot format. Provide a JSON array or CSV with headers.",
        "unknown",
    ))
}

fn parse_json(content: &str) -> ClientResult<Vec<Value>> {
    let parsed = serde_json::from_str::<Value>(content).map_err(|_| {
        ClientError::invalid_argument("Invalid JSON input. Provide a valid JSON array.")
    })?;

    let Some(items) = unwrap_payload(&parsed) else {
        return Err(ClientError::invalid_snapshot_format(
            "JSON input must be an array of records, or a `data` envelope around one.",
            "json_non_array",
        ));
    };

    for item in items {
        if !item.is_object() {
            return Err(ClientError::invalid_snapshot_format(
                "JSON array entries must all be objects with record fields.",
                "json_array_of_non_objects",
            ));
        }
    }

    Ok(items.to_vec())
}

/// Upstream responses arrive as a bare array, `{data: [...]}`, or the
/// doubly-wrapped `{data: {data: [...]}}` some endpoints return.
fn unwrap_payload(value: &Value) -> Option<&Vec<Value>> {
    if let Some(items) = value.as_array() {
        return Some(items);
    }

    let inner = value.get("data")?;
    if let Some(items) = inner.as_array() {
        return Some(items);
    }
    inner.get("data")?.as_array()
}

fn parse_csv(content: &str) -> ClientResult<Vec<Value>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| ClientError::invalid_argument("CSV header row is missing or unreadable."))?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    let mut rows = Vec::new();
    for result_row in reader.records() {
        let record = result_row.map_err(|_| {
            ClientError::invalid_argument("CSV rows are malformed or not UTF-8.")
        })?;

        let mut object = Map::new();
        for (index, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            if let Some(value) = record.get(index) {
                object.insert(header.clone(), Value::String(value.to_string()));
            }
        }
        rows.push(Value::Object(object));
    }

    Ok(rows)
}

fn looks_like_ndjson(content: &str) -> bool {
    let lines = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<&str>>();
    if lines.len() < 2 {
        return false;
    }

    lines.iter().all(|line| {
        let parsed = serde_json::from_str::<Value>(line.trim());
        if let Ok(value) = parsed {
            return value.is_object();
        }
        false
    })
}

fn looks_like_csv(content: &str) -> bool {
    let Some(first_line) = content.lines().find(|line| !line.trim().is_empty()) else {
        return false;
    };
    first_line.contains(',')
}
