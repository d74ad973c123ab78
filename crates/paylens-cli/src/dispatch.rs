use paylens_client::commands;
use paylens_client::config::RateOverrides;
use paylens_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, NotifyCommand};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Transactions {
            path,
            search,
            year,
            month,
            page,
            page_size,
            json: _,
        } => commands::transactions::run(
            path.clone(),
            search.clone(),
            year.clone(),
            month.clone(),
            *page,
            *page_size,
        ),
        Commands::Groups { path, .. } => commands::groups::run(path.clone()),
        Commands::Summary { path, .. } => commands::summary::run(path.clone()),
        Commands::Settle {
            path,
            amount,
            search,
            gateway_fee_rate,
            platform_share_rate,
            tds_rate,
            json: _,
        } => commands::settle::run(
            *amount,
            path.clone(),
            search.clone(),
            RateOverrides {
                gateway_fee_rate: *gateway_fee_rate,
                platform_share_rate: *platform_share_rate,
                tds_rate: *tds_rate,
            },
        ),
        Commands::Notify { command } => match command {
            NotifyCommand::Add { path, .. } => commands::notify::run_add(path.clone()),
            NotifyCommand::List { .. } => commands::notify::run_list(),
            NotifyCommand::Show { id, .. } => commands::notify::run_show(id.clone()),
        },
    }
}
