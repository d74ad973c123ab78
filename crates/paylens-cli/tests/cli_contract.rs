use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

static TEST_COUNTER: AtomicU64 = AtomicU64::new(1);

fn unique_test_home() -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    let stamp = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(value) => value.as_nanos(),
        Err(_) => 0,
    };
    let sequence = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!(
        "paylens-cli-test-{}-{stamp}-{sequence}",
        std::process::id()
    ));
    path
}

fn run_cli_in_home_with_input(
    home: &std::path::Path,
    args: &[&str],
    input: Option<&str>,
) -> (bool, String) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_paylens"));
    for arg in args {
        command.arg(arg);
    }
    command.env("PAYLENS_HOME", home);
    if input.is_some() {
        command.stdin(Stdio::piped());
    } else {
        command.stdin(Stdio::null());
    }
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    let child_spawn = command.spawn();
    assert!(child_spawn.is_ok());
    if let Ok(mut child) = child_spawn {
        if let Some(body) = input {
            let mut stdin = child.stdin.take();
            assert!(stdin.is_some());
            if let Some(mut pipe) = stdin.take() {
                let write_result = pipe.write_all(body.as_bytes());
                assert!(write_result.is_ok());
            }
        }

        let output = child.wait_with_output();
        assert!(output.is_ok());
        if let Ok(result) = output {
            let stdout = String::from_utf8(result.stdout);
            assert!(stdout.is_ok());
            if let Ok(stdout_text) = stdout {
                return (result.status.success(), stdout_text);
            }
        }
    }

    (false, String::new())
}

fn run_cli_with_input(args: &[&str], input: Option<&str>) -> (bool, String, std::path::PathBuf) {
    let home = unique_test_home();
    let (ok, body) = run_cli_in_home_with_input(&home, args, input);
    (ok, body, home)
}

fn run_cli(args: &[&str]) -> (bool, String, std::path::PathBuf) {
    run_cli_with_input(args, None)
}

fn parse_json(body: &str) -> Value {
    let parsed = serde_json::from_str::<Value>(body);
    assert!(parsed.is_ok());
    if let Ok(value) = parsed {
        return value;
    }
    Value::Null
}

fn sample_snapshot() -> &'static str {
    r#"[
        {"_id": "a", "createdAt": "2024-03-05T10:00:00Z", "amount": 1000,
         "type": "session payment", "status": "Confirmed",
         "mentorId": {"name": {"firstName": "Asha", "lastName": "Rao"}},
         "userName": "Dev Mehta"},
        {"_id": "b", "createdAt": "2023-12-01T09:00:00Z", "creditAmt": 150,
         "debitAmt": 0, "transactionType": "credit", "status": "success"}
    ]"#
}

#[test]
fn bare_invocation_prints_root_help() {
    let (ok, body, _home) = run_cli(&[]);
    assert!(ok);
    assert!(body.starts_with("Paylens - mentor payment reconciliation"));
    assert!(body.contains("paylens transactions --help"));
}

#[test]
fn top_level_help_flag_prints_command_map() {
    let (ok, body, _home) = run_cli(&["--help"]);
    assert!(ok);
    assert!(body.contains("USAGE: paylens <command>"));
    assert!(body.contains("paylens settle --amount 1000"));
    assert!(body.contains("paylens notify list"));
}

#[test]
fn transactions_json_emits_the_structured_envelope() {
    let (ok, body, _home) =
        run_cli_with_input(&["transactions", "--json"], Some(sample_snapshot()));
    assert!(ok, "stdout was: {body}");

    let value = parse_json(&body);
    assert_eq!(value["ok"], Value::Bool(true));
    assert_eq!(value["version"], Value::String("v1".to_string()));
    assert_eq!(value["data"]["source_records"], 2);
    assert_eq!(value["data"]["rows"][0]["id"], "a");
    assert_eq!(value["data"]["rows"][0]["mentor"], "Asha Rao");
}

#[test]
fn transactions_text_renders_table_and_page_footer() {
    let (ok, body, _home) = run_cli_with_input(&["transactions"], Some(sample_snapshot()));
    assert!(ok, "stdout was: {body}");
    assert!(body.contains("Transactions (newest first):"));
    assert!(body.contains("Asha Rao"));
    assert!(body.contains("₹1,000.00"));
    assert!(body.contains("Page 1 of 1 — 2 matching of 2 records"));
}

#[test]
fn settle_amount_json_splits_per_the_default_contract() {
    let (ok, body, _home) = run_cli(&["settle", "--amount", "1000", "--json"]);
    assert!(ok, "stdout was: {body}");

    let value = parse_json(&body);
    assert_eq!(value["data"]["totals"]["gateway_fee"], 23.6);
    assert_eq!(value["data"]["totals"]["platform_net"], 276.4);
    assert_eq!(value["data"]["totals"]["mentor_payout"], 630.0);
}

#[test]
fn settlement_config_file_changes_the_split() {
    let home = unique_test_home();
    let created = fs::create_dir_all(&home);
    assert!(created.is_ok());
    let written = fs::write(
        home.join("settlement.json"),
        r#"{"gateway_fee_rate": 0.02, "platform_share_rate": 0.5, "tds_rate": 0.0}"#,
    );
    assert!(written.is_ok());

    let (ok, body) =
        run_cli_in_home_with_input(&home, &["settle", "--amount", "1000", "--json"], None);
    assert!(ok, "stdout was: {body}");

    let value = parse_json(&body);
    assert_eq!(value["data"]["totals"]["platform_share"], 500.0);
    assert_eq!(value["data"]["totals"]["mentor_payout"], 500.0);
    assert_eq!(value["data"]["rates"]["tds_rate"], 0.0);
}

#[test]
fn ndjson_input_fails_with_the_snapshot_format_error() {
    let (ok, body, _home) =
        run_cli_with_input(&["transactions"], Some("{\"a\": 1}\n{\"a\": 2}\n"));
    assert!(!ok);
    assert!(body.contains("invalid_snapshot_format"));
    assert!(body.contains("What to do next:"));
}

#[test]
fn unknown_command_fails_with_recovery_guidance() {
    let (ok, body, _home) = run_cli(&["reconcile"]);
    assert!(!ok);
    assert!(body.contains("invalid_argument"));
    assert!(body.contains("What to do next:"));
}

#[test]
fn notify_add_list_show_round_trip_through_one_home() {
    let home = unique_test_home();
    let payload = r#"{"userName": "Dev Mehta", "amount": 499, "status": "success"}"#;

    let (added_ok, added_body) =
        run_cli_in_home_with_input(&home, &["notify", "add", "--json"], Some(payload));
    assert!(added_ok, "stdout was: {added_body}");

    let added = parse_json(&added_body);
    let id = added["data"]["notification"]["_id"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    assert!(!id.is_empty());

    let (list_ok, list_body) =
        run_cli_in_home_with_input(&home, &["notify", "list", "--json"], None);
    assert!(list_ok);
    let listed = parse_json(&list_body);
    assert!(listed.is_array());
    assert_eq!(listed[0]["userName"], "Dev Mehta");

    let (show_ok, show_body) =
        run_cli_in_home_with_input(&home, &["notify", "show", &id], None);
    assert!(show_ok);
    assert!(show_body.contains("Dev Mehta"));
    assert!(show_body.contains("₹499.00"));
}

#[test]
fn notify_show_unknown_id_exits_with_user_error() {
    let (ok, body, _home) = run_cli(&["notify", "show", "nope"]);
    assert!(!ok);
    assert!(body.contains("notification_not_found"));
}
