use std::path::Path;

use crate::ClientResult;
use crate::commands::common::load_home;
use crate::contracts::envelope::SuccessEnvelope;
use crate::contracts::types::{NotificationAddData, NotificationListData};
use crate::notifications::{NotificationStore, parse_notification};
use crate::snapshot::read_source;

#[derive(Debug, Default)]
pub struct NotifyAddOptions<'a> {
    pub path: Option<String>,
    pub home_override: Option<&'a Path>,
    pub stdin_override: Option<String>,
}

#[derive(Debug, Default)]
pub struct NotifyListOptions<'a> {
    pub home_override: Option<&'a Path>,
}

#[derive(Debug, Default)]
pub struct NotifyShowOptions<'a> {
    pub id: String,
    pub home_override: Option<&'a Path>,
}

pub fn run_add(path: Option<String>) -> ClientResult<SuccessEnvelope> {
    run_add_with_options(NotifyAddOptions {
        path,
        home_override: None,
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_add_with_options(options: NotifyAddOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let home = load_home(options.home_override)?;
    let store = NotificationStore::open(&home)?;

    let payload = read_source(options.path.as_deref(), options.stdin_override)?;
    let stored = store.add(parse_notification(&payload)?)?;

    SuccessEnvelope::for_command(
        "notify add",
        NotificationAddData {
            notification: stored,
            store_path: store.path().display().to_string(),
        },
    )
}

pub fn run_list() -> ClientResult<SuccessEnvelope> {
    run_list_with_options(NotifyListOptions {
        home_override: None,
    })
}

#[doc(hidden)]
pub fn run_list_with_options(options: NotifyListOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let home = load_home(options.home_override)?;
    let store = NotificationStore::open(&home)?;
    let notifications = store.list()?;
    let total = notifications.len();

    SuccessEnvelope::for_command(
        "notify list",
        NotificationListData {
            notifications,
            total,
            store_path: store.path().display().to_string(),
        },
    )
}

pub fn run_show(id: String) -> ClientResult<SuccessEnvelope> {
    run_show_with_options(NotifyShowOptions {
        id,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn run_show_with_options(options: NotifyShowOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let home = load_home(options.home_override)?;
    let store = NotificationStore::open(&home)?;
    let notification = store.find(&options.id)?;

    SuccessEnvelope::for_command("notify show", notification)
}
