use std::fs;
use std::path::Path;

use crate::pipeline::settle::SettlementRates;
use crate::state::settlement_config_path;
use crate::{ClientError, ClientResult};

/// Loads settlement rates from `settlement.json` in the data home. A
/// missing file means the default contract rates; a present-but-broken file
/// is an error rather than a silent fallback, so a typo never changes
/// payouts unnoticed.
pub fn load_settlement_rates(home: &Path) -> ClientResult<SettlementRates> {
    let path = settlement_config_path(home);
    if !path.exists() {
        return Ok(SettlementRates::default());
    }

    let body = fs::read_to_string(&path)
        .map_err(|error| ClientError::settlement_config_invalid(&path, &error.to_string()))?;

    serde_json::from_str::<SettlementRates>(&body)
        .map_err(|error| ClientError::settlement_config_invalid(&path, &error.to_string()))
}

/// Per-run rate overrides from CLI flags, applied on top of whatever the
/// config file (or default) provided.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateOverrides {
    pub gateway_fee_rate: Option<f64>,
    pub platform_share_rate: Option<f64>,
    pub tds_rate: Option<f64>,
}

pub fn apply_overrides(base: SettlementRates, overrides: &RateOverrides) -> SettlementRates {
    SettlementRates {
        gateway_fee_rate: overrides.gateway_fee_rate.unwrap_or(base.gateway_fee_rate),
        platform_share_rate: overrides
            .platform_share_rate
            .unwrap_or(base.platform_share_rate),
        tds_rate: overrides.tds_rate.unwrap_or(base.tds_rate),
    }
}
