use std::fs;
use std::path::{Path, PathBuf};

use paylens_client::commands::notify::{
    self, NotifyAddOptions, NotifyListOptions, NotifyShowOptions,
};
use tempfile::{Builder, TempDir};

fn temp_home(prefix: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = Builder::new().prefix(prefix).tempdir_in("/tmp")?;
    let home = dir.path().join("paylens-home");
    fs::create_dir_all(&home)?;
    Ok((dir, home))
}

fn payload(user: &str, amount: f64) -> String {
    format!(
        r#"{{
            "userName": "{user}",
            "userEmail": "{user}@example.com",
            "amount": {amount},
            "status": "success",
            "transactionType": "session payment",
            "source": "gateway-webhook"
        }}"#
    )
}

fn add(home: &Path, body: String) -> Option<String> {
    let added = notify::run_add_with_options(NotifyAddOptions {
        home_override: Some(home),
        stdin_override: Some(body),
        ..NotifyAddOptions::default()
    });
    assert!(added.is_ok());
    added.ok().and_then(|value| {
        value.data["notification"]["_id"]
            .as_str()
            .map(str::to_string)
    })
}

#[test]
fn notifications_persist_newest_first_across_store_reopens() {
    let setup = temp_home("paylens-notify");
    assert!(setup.is_ok());
    if let Ok((_dir, home)) = setup {
        let first = add(&home, payload("dev", 499.0));
        let second = add(&home, payload("rohan", 999.0));
        assert!(first.is_some());
        assert!(second.is_some());

        let listed = notify::run_list_with_options(NotifyListOptions {
            home_override: Some(&home),
        });
        assert!(listed.is_ok());
        if let Ok(value) = listed {
            assert_eq!(value.data["total"], 2);
            assert_eq!(value.data["notifications"][0]["userName"], "rohan");
            assert_eq!(value.data["notifications"][1]["userName"], "dev");
            assert!(value.data["notifications"][0]["createdAt"].is_string());
        }

        if let Some(id) = first {
            let shown = notify::run_show_with_options(NotifyShowOptions {
                id,
                home_override: Some(&home),
            });
            assert!(shown.is_ok());
            if let Ok(value) = shown {
                assert_eq!(value.data["amount"], 499.0);
            }
        }
    }
}

#[test]
fn add_accepts_a_payload_file_as_well_as_stdin() {
    let setup = temp_home("paylens-notify-file");
    assert!(setup.is_ok());
    if let Ok((dir, home)) = setup {
        let path = dir.path().join("webhook.json");
        let written = fs::write(&path, payload("asha", 1200.0));
        assert!(written.is_ok());

        let added = notify::run_add_with_options(NotifyAddOptions {
            path: Some(path.display().to_string()),
            home_override: Some(&home),
            stdin_override: Some(String::new()),
        });
        assert!(added.is_ok());
        if let Ok(value) = added {
            assert_eq!(value.data["notification"]["userName"], "asha");
            assert!(
                value.data["store_path"]
                    .as_str()
                    .unwrap_or_default()
                    .ends_with("payment-notifications.json")
            );
        }
    }
}

#[test]
fn a_corrupt_store_file_surfaces_a_coded_error() {
    let setup = temp_home("paylens-notify-corrupt");
    assert!(setup.is_ok());
    if let Ok((_dir, home)) = setup {
        let written = fs::write(home.join("payment-notifications.json"), "not json at all");
        assert!(written.is_ok());

        let listed = notify::run_list_with_options(NotifyListOptions {
            home_override: Some(&home),
        });
        assert!(listed.is_err());
        if let Err(error) = listed {
            assert_eq!(error.code, "notification_store_corrupt");
        }
    }
}

#[test]
fn malformed_payloads_never_touch_the_store() {
    let setup = temp_home("paylens-notify-bad-payload");
    assert!(setup.is_ok());
    if let Ok((_dir, home)) = setup {
        let added = notify::run_add_with_options(NotifyAddOptions {
            home_override: Some(&home),
            stdin_override: Some("[1, 2, 3]".to_string()),
            ..NotifyAddOptions::default()
        });
        assert!(added.is_err());

        let listed = notify::run_list_with_options(NotifyListOptions {
            home_override: Some(&home),
        });
        assert!(listed.is_ok());
        if let Ok(value) = listed {
            assert_eq!(value.data["total"], 0);
        }
    }
}
