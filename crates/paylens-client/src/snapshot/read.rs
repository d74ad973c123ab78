use std::fs;
use std::io::{IsTerminal, Read};

use crate::{ClientError, ClientResult};

/// Reads one snapshot source: a file path, or stdin when the path is `-` or
/// omitted while input is piped. `stdin_override` lets tests inject piped
/// content without a real terminal.
pub fn read_source(path: Option<&str>, stdin_override: Option<String>) -> ClientResult<String> {
    let stdin_body = read_stdin(stdin_override)?;

    if let Some(path_value) = path {
        if path_value == "-" {
            if let Some(stdin_value) = stdin_body
                && !stdin_value.trim().is_empty()
            {
                return Ok(stdin_value);
            }

            return Err(ClientError::invalid_argument(
                "Path `-` means stdin input, but stdin was empty. Pipe JSON/CSV input or pass a file path.",
            ));
        }

        if stdin_body
            .as_ref()
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false)
        {
            return Err(ClientError::invalid_argument(
                "Both stdin and file input were provided. Pass exactly one source.",
            ));
        }

        return fs::read_to_string(path_value)
            .map_err(|error| ClientError::snapshot_unreadable(path_value, &error.to_string()));
    }

    if let Some(stdin_value) = stdin_body
        && !stdin_value.trim().is_empty()
    {
        return Ok(stdin_value);
    }

    Err(ClientError::invalid_argument(
        "No snapshot source provided. Pass a file path or pipe input via stdin.",
    ))
}

fn read_stdin(stdin_override: Option<String>) -> ClientResult<Option<String>> {
    if let Some(value) = stdin_override {
        return Ok(Some(value));
    }

    if std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|error| {
            ClientError::invalid_argument_with_recovery(
                &format!("Could not read stdin: {error}"),
                vec![
                    "Retry with an explicit file path argument.".to_string(),
                    "Or rerun with valid stdin content.".to_string(),
                ],
            )
        })?;

    if buffer.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(buffer))
}
