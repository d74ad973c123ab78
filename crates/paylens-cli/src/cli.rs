use clap::{Parser, Subcommand};

pub fn parse_page(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err("page must be a whole number starting at 1".to_string()),
    }
}

pub fn parse_page_size(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(size) if (1..=500).contains(&size) => Ok(size),
        _ => Err("page size must be between 1 and 500".to_string()),
    }
}

pub fn parse_rate(value: &str) -> Result<f64, String> {
    match value.parse::<f64>() {
        Ok(rate) if rate.is_finite() && (0.0..=1.0).contains(&rate) => Ok(rate),
        _ => Err("rate must be a fraction between 0 and 1 (for example 0.0236)".to_string()),
    }
}

/// Extended help shown after `paylens transactions --help`.
pub const TRANSACTIONS_AFTER_HELP: &str = "\
Snapshot input:
  Paylens reads one exported snapshot per run. It does not call the
  payment APIs itself; export the records and feed the file in.

  Accepted formats:
    JSON — one top-level array of record objects, or the `data` /
           `data.data` envelopes the dashboard APIs return
    CSV  — one header row with field names, values read as text

  Records from different collections can be mixed in one snapshot.
  Recognized fields include: _id / transactionId / id, createdAt /
  timestamp / date, amount / creditAmt / debitAmt, type /
  transactionType, status, description, mentorId / mentorName,
  userId / userName, closingBal, and session fields.

  <path> is a local file path. To read stdin explicitly, use `-`
  as the path, or just pipe input with no path at all.
  Example: cat snapshot.json | paylens transactions

Narrowing the list:
  --year 2024                 Only that calendar year
  --year 2024 --month March   Only that month (full month name)
  --search <term>             Case-insensitive match over names,
                              description, type, status, the shown
                              date text, and the amount
  --page / --page-size        Window the result
";

#[derive(Debug, Parser)]
#[command(
    name = "paylens",
    version,
    about = "mentor payment reconciliation from exported transaction snapshots",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List normalized transactions from a snapshot, newest first
    #[command(after_long_help = TRANSACTIONS_AFTER_HELP)]
    Transactions {
        /// Path to a JSON or CSV snapshot (use `-` for stdin)
        path: Option<String>,
        /// Case-insensitive search over every displayed field
        #[arg(long)]
        search: Option<String>,
        /// Only transactions from this calendar year (e.g. 2024)
        #[arg(long)]
        year: Option<String>,
        /// Only transactions from this month; requires --year (e.g. March)
        #[arg(long)]
        month: Option<String>,
        /// Page number, starting at 1
        #[arg(long, default_value = "1", value_parser = parse_page)]
        page: usize,
        /// Transactions per page
        #[arg(long, default_value = "10", value_parser = parse_page_size)]
        page_size: usize,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show the year and month drill-down index for a snapshot
    Groups {
        /// Path to a JSON or CSV snapshot (use `-` for stdin)
        path: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show credit/debit totals over a snapshot
    Summary {
        /// Path to a JSON or CSV snapshot (use `-` for stdin)
        path: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Split gross amounts into gateway, platform, and mentor shares
    Settle {
        /// Path to a JSON or CSV snapshot (use `-` for stdin)
        path: Option<String>,
        /// Settle one gross amount instead of a snapshot
        #[arg(long)]
        amount: Option<f64>,
        /// Case-insensitive search filter applied before settling
        #[arg(long)]
        search: Option<String>,
        /// Override the gateway fee fraction for this run
        #[arg(long, value_parser = parse_rate)]
        gateway_fee_rate: Option<f64>,
        /// Override the platform share fraction for this run
        #[arg(long, value_parser = parse_rate)]
        platform_share_rate: Option<f64>,
        /// Override the TDS fraction for this run
        #[arg(long, value_parser = parse_rate)]
        tds_rate: Option<f64>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Manage stored payment gateway notifications
    #[command(arg_required_else_help = true)]
    Notify {
        #[command(subcommand)]
        command: NotifyCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum NotifyCommand {
    /// Store one notification payload (a single JSON object)
    Add {
        /// Path to the payload file (use `-` for stdin)
        path: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List stored notifications, newest first
    List {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show one stored notification by id
    Show {
        /// The notification id from `paylens notify list`
        id: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
