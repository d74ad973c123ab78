use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `paylens {cmd} --help` for usage."),
            None => "Run `paylens --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn invalid_snapshot_format(message: &str, received_format: &str) -> Self {
        Self::new(
            "invalid_snapshot_format",
            message,
            vec![
                "Provide a supported snapshot format (JSON array or CSV with headers).".to_string(),
                "Export the upstream records again and retry the command.".to_string(),
            ],
        )
        .with_data(json!({
            "received_format": received_format,
            "supported_formats": ["json_array", "csv"],
        }))
    }

    pub fn snapshot_unreadable(path: &str, detail: &str) -> Self {
        Self::new(
            "snapshot_unreadable",
            &format!("Cannot read snapshot `{path}`: {detail}"),
            vec![
                format!("Check that `{path}` exists and is readable."),
                "Use `-` as the path to read the snapshot from stdin.".to_string(),
            ],
        )
    }

    pub fn settlement_config_invalid(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "settlement_config_invalid",
            &format!("Settlement rate config at `{location}` is invalid: {detail}"),
            vec![
                format!(
                    "Fix `{location}` so it is a JSON object with numeric \
                     `gateway_fee_rate`, `platform_share_rate`, and `tds_rate` fields."
                ),
                format!("Or delete `{location}` to fall back to the default rates."),
            ],
        )
    }

    pub fn notification_not_found(notification_id: &str) -> Self {
        Self::new(
            "notification_not_found",
            &format!("Payment notification `{notification_id}` was not found."),
            vec![
                "Run `paylens notify list` to see stored notification ids.".to_string(),
                "Retry with `paylens notify show <id>`.".to_string(),
            ],
        )
        .with_data(json!({
            "notification_id": notification_id,
        }))
    }

    pub fn notification_store_corrupt(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "notification_store_corrupt",
            &format!("Notification store at `{location}` is not valid JSON."),
            vec![format!(
                "Repair or remove `{location}`; a fresh store is created on the next `notify add`."
            )],
        )
    }

    pub fn store_init_permission_denied(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_init_permission_denied",
            &format!("Cannot initialize data directory `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or set `PAYLENS_HOME` to a writable directory."
            )],
        )
    }

    pub fn store_init_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_init_failed",
            &format!("Data directory initialization failed at `{location}`: {detail}"),
            Vec::new(),
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
