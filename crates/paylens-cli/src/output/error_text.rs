use paylens_client::ClientError;

/// Text rendering of a failed command: a headline with the message, the
/// machine-readable code for scripts and bug reports, then numbered
/// recovery steps. Errors without steps still get a generic retry.
pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        format!("paylens could not finish: {}", error.message),
        format!("(error code: {})", error.code),
        String::new(),
        "What to do next:".to_string(),
    ];

    let mut step_number = 0;
    for step in &error.recovery_steps {
        step_number += 1;
        lines.push(format!("  {step_number}. {step}"));
    }
    if step_number == 0 {
        lines.push("  1. Retry the command.".to_string());
    }

    lines.join("\n")
}
