use std::path::Path;

use crate::commands::common::{load_home, load_transactions, sort_newest_first};
use crate::config::{RateOverrides, apply_overrides, load_settlement_rates};
use crate::contracts::envelope::SuccessEnvelope;
use crate::contracts::types::{SettlementData, SettlementRateInfo, SettlementRow, SettlementTotals};
use crate::display::format_timestamp;
use crate::pipeline::filter::filter_transactions;
use crate::pipeline::settle::{Settlement, SettlementRates, settle};
use crate::{ClientError, ClientResult};

#[derive(Debug, Default)]
pub struct SettleOptions<'a> {
    pub amount: Option<f64>,
    pub path: Option<String>,
    pub search: Option<String>,
    pub overrides: RateOverrides,
    pub home_override: Option<&'a Path>,
    pub stdin_override: Option<String>,
}

pub fn run(
    amount: Option<f64>,
    path: Option<String>,
    search: Option<String>,
    overrides: RateOverrides,
) -> ClientResult<SuccessEnvelope> {
    run_with_options(SettleOptions {
        amount,
        path,
        search,
        overrides,
        home_override: None,
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: SettleOptions<'_>) -> ClientResult<SuccessEnvelope> {
    if options.amount.is_some() && options.path.is_some() {
        return Err(ClientError::invalid_argument_for_command(
            "Pass either `--amount` or a snapshot path, not both.",
            Some("settle"),
        ));
    }

    validate_overrides(&options.overrides)?;

    let home = load_home(options.home_override)?;
    let rates = apply_overrides(load_settlement_rates(&home)?, &options.overrides);

    let data = match options.amount {
        Some(amount) => settle_single_amount(amount, &rates)?,
        None => settle_snapshot(&options, &rates)?,
    };

    SuccessEnvelope::for_command("settle", data)
}

fn settle_single_amount(amount: f64, rates: &SettlementRates) -> ClientResult<SettlementData> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ClientError::invalid_argument_for_command(
            "`--amount` must be a non-negative decimal number.",
            Some("settle"),
        ));
    }

    let settlement = settle(amount, rates);
    Ok(SettlementData {
        rates: rate_info(rates),
        rows: Vec::new(),
        totals: totals_from(&settlement),
    })
}

fn settle_snapshot(
    options: &SettleOptions<'_>,
    rates: &SettlementRates,
) -> ClientResult<SettlementData> {
    let mut transactions =
        load_transactions(options.path.as_deref(), options.stdin_override.clone())?;
    sort_newest_first(&mut transactions);

    let search_term = options.search.as_deref().unwrap_or("");
    let matched = filter_transactions(&transactions, search_term);

    let mut rows = Vec::with_capacity(matched.len());
    let mut totals = SettlementTotals {
        gross_amount: 0.0,
        gateway_fee: 0.0,
        platform_share: 0.0,
        platform_net: 0.0,
        mentor_share: 0.0,
        tax_withheld: 0.0,
        mentor_payout: 0.0,
    };

    for txn in &matched {
        let settlement = settle(txn.gross_amount, rates);
        totals.gross_amount += settlement.gross_amount;
        totals.gateway_fee += settlement.gateway_fee;
        totals.platform_share += settlement.platform_share;
        totals.platform_net += settlement.platform_net;
        totals.mentor_share += settlement.mentor_share;
        totals.tax_withheld += settlement.tax_withheld;
        totals.mentor_payout += settlement.mentor_payout;

        rows.push(SettlementRow {
            id: txn.id.clone(),
            date: format_timestamp(txn.timestamp.as_ref()),
            mentor: txn.names.primary.clone(),
            gross_amount: settlement.gross_amount,
            gateway_fee: settlement.gateway_fee,
            platform_net: settlement.platform_net,
            mentor_share: settlement.mentor_share,
            tax_withheld: settlement.tax_withheld,
            mentor_payout: settlement.mentor_payout,
        });
    }

    Ok(SettlementData {
        rates: rate_info(rates),
        rows,
        totals,
    })
}

fn validate_overrides(overrides: &RateOverrides) -> ClientResult<()> {
    let named = [
        ("--gateway-fee-rate", overrides.gateway_fee_rate),
        ("--platform-share-rate", overrides.platform_share_rate),
        ("--tds-rate", overrides.tds_rate),
    ];

    for (flag, value) in named {
        if let Some(rate) = value
            && !(rate.is_finite() && (0.0..=1.0).contains(&rate))
        {
            return Err(ClientError::invalid_argument_for_command(
                &format!("`{flag}` must be a fraction between 0 and 1 (for example 0.0236)."),
                Some("settle"),
            ));
        }
    }

    Ok(())
}

fn rate_info(rates: &SettlementRates) -> SettlementRateInfo {
    SettlementRateInfo {
        gateway_fee_rate: rates.gateway_fee_rate,
        platform_share_rate: rates.platform_share_rate,
        tds_rate: rates.tds_rate,
    }
}

fn totals_from(settlement: &Settlement) -> SettlementTotals {
    SettlementTotals {
        gross_amount: settlement.gross_amount,
        gateway_fee: settlement.gateway_fee,
        platform_share: settlement.platform_share,
        platform_net: settlement.platform_net,
        mentor_share: settlement.mentor_share,
        tax_withheld: settlement.tax_withheld,
        mentor_payout: settlement.mentor_payout,
    }
}
