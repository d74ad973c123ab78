use crate::cli::{Commands, NotifyCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Transactions { json, .. }
        | Commands::Groups { json, .. }
        | Commands::Summary { json, .. }
        | Commands::Settle { json, .. } => *json,
        Commands::Notify { command } => match command {
            NotifyCommand::Add { json, .. }
            | NotifyCommand::List { json }
            | NotifyCommand::Show { json, .. } => *json,
        },
    };

    if json { OutputMode::Json } else { OutputMode::Text }
}
