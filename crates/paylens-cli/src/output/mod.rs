mod error_text;
mod format;
mod groups_text;
mod json;
mod mode;
mod notify_text;
mod settle_text;
mod summary_text;
mod transactions_text;

use std::io;

use paylens_client::{ClientError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};

use crate::stdout_io::write_stdout_line;

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "transactions" => transactions_text::render_transactions(&success.data),
        "groups" => groups_text::render_groups(&success.data),
        "summary" => summary_text::render_summary(&success.data),
        "settle" => settle_text::render_settle(&success.data),
        "notify add" => notify_text::render_notify_add(&success.data),
        "notify list" => notify_text::render_notify_list(&success.data),
        "notify show" => notify_text::render_notify_show(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
