use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::state::{ensure_data_directory, map_io_error, notifications_path};
use crate::{ClientError, ClientResult};

/// One relayed payment notification, in the wire shape the payment gateway
/// webhook delivers. Unknown upstream fields are dropped; missing ones stay
/// `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNotification {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub mentor_id: Option<String>,
    #[serde(default)]
    pub session_type: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Flat-file JSON store for relayed payment notifications, newest first.
/// The whole file is read and rewritten per operation; the relay volume is
/// one record per completed session, not a ledger.
#[derive(Debug, Clone)]
pub struct NotificationStore {
    path: PathBuf,
}

impl NotificationStore {
    pub fn open(home: &Path) -> ClientResult<Self> {
        ensure_data_directory(home)?;
        Ok(Self {
            path: notifications_path(home),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list(&self) -> ClientResult<Vec<PaymentNotification>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let body = fs::read_to_string(&self.path)
            .map_err(|error| map_io_error(&self.path, &error))?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str::<Vec<PaymentNotification>>(&body)
            .map_err(|_| ClientError::notification_store_corrupt(&self.path))
    }

    /// Stores one notification at the head of the list, assigning an id and
    /// created/updated stamps when the relay did not provide them.
    pub fn add(&self, mut notification: PaymentNotification) -> ClientResult<PaymentNotification> {
        let now = Utc::now().to_rfc3339();
        if notification.id.as_deref().unwrap_or("").is_empty() {
            notification.id = Some(Ulid::new().to_string());
        }
        if notification.created_at.is_none() {
            notification.created_at = Some(now.clone());
        }
        notification.updated_at = Some(now);

        let mut all = self.list()?;
        all.insert(0, notification.clone());
        self.write(&all)?;

        Ok(notification)
    }

    pub fn find(&self, notification_id: &str) -> ClientResult<PaymentNotification> {
        self.list()?
            .into_iter()
            .find(|item| item.id.as_deref() == Some(notification_id))
            .ok_or_else(|| ClientError::notification_not_found(notification_id))
    }

    fn write(&self, notifications: &[PaymentNotification]) -> ClientResult<()> {
        let body = serde_json::to_string_pretty(notifications)
            .map_err(|error| ClientError::internal_serialization(&error.to_string()))?;
        fs::write(&self.path, body).map_err(|error| map_io_error(&self.path, &error))
    }
}

/// Parses one notification payload (a single JSON object) as delivered by
/// the payment gateway.
pub fn parse_notification(content: &str) -> ClientResult<PaymentNotification> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ClientError::invalid_argument(
            "Notification payload is empty. Provide one JSON object.",
        ));
    }

    serde_json::from_str::<PaymentNotification>(trimmed).map_err(|_| {
        ClientError::invalid_argument(
            "Notification payload must be one JSON object with payment fields.",
        )
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{NotificationStore, parse_notification};

    fn sample_payload() -> &'static str {
        r#"{
            "userId": "u1",
            "userName": "Dev Mehta",
            "userEmail": "dev@example.com",
            "amount": 499.0,
            "transactionId": "txn_123",
            "paymentId": "pay_456",
            "status": "success",
            "transactionType": "session payment",
            "timestamp": "2024-03-05T10:00:00Z",
            "source": "gateway-webhook"
        }"#
    }

    #[test]
    fn add_assigns_id_and_stamps_and_prepends() {
        let dir = tempdir();
        assert!(dir.is_ok());
        if let Ok(home) = dir {
            let store = NotificationStore::open(home.path());
            assert!(store.is_ok());
            if let Ok(store) = store {
                let first = parse_notification(sample_payload()).and_then(|n| store.add(n));
                assert!(first.is_ok());

                let second = parse_notification(sample_payload()).and_then(|n| store.add(n));
                assert!(second.is_ok());

                let listed = store.list();
                assert!(listed.is_ok());
                if let (Ok(all), Ok(newest)) = (listed, second) {
                    assert_eq!(all.len(), 2);
                    assert_eq!(all[0].id, newest.id);
                    assert!(all[0].id.as_deref().unwrap_or("").len() > 10);
                    assert!(all[0].created_at.is_some());
                }
            }
        }
    }

    #[test]
    fn find_returns_coded_error_for_unknown_id() {
        let dir = tempdir();
        assert!(dir.is_ok());
        if let Ok(home) = dir {
            let store = NotificationStore::open(home.path());
            assert!(store.is_ok());
            if let Ok(store) = store {
                let missing = store.find("nope");
                assert!(missing.is_err());
                if let Err(error) = missing {
                    assert_eq!(error.code, "notification_not_found");
                }
            }
        }
    }

    #[test]
    fn corrupt_store_file_is_a_coded_error() {
        let dir = tempdir();
        assert!(dir.is_ok());
        if let Ok(home) = dir {
            let store = NotificationStore::open(home.path());
            assert!(store.is_ok());
            if let Ok(store) = store {
                let written = fs::write(store.path(), "{broken");
                assert!(written.is_ok());

                let listed = store.list();
                assert!(listed.is_err());
                if let Err(error) = listed {
                    assert_eq!(error.code, "notification_store_corrupt");
                }
            }
        }
    }

    #[test]
    fn missing_store_file_lists_empty() {
        let dir = tempdir();
        assert!(dir.is_ok());
        if let Ok(home) = dir {
            let store = NotificationStore::open(home.path());
            assert!(store.is_ok());
            if let Ok(store) = store {
                let listed = store.list();
                assert!(listed.is_ok());
                if let Ok(all) = listed {
                    assert!(all.is_empty());
                }
            }
        }
    }

    #[test]
    fn payload_must_be_a_single_object() {
        assert!(parse_notification("[]").is_err());
        assert!(parse_notification("").is_err());
        assert!(parse_notification(r#"{"amount": 10}"#).is_ok());
    }
}
