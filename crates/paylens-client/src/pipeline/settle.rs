use serde::{Deserialize, Serialize};

/// Percentage constants for the settlement split. These are business
/// configuration, not fixed math: the defaults mirror the current gateway
/// and platform contract but can be overridden per run or via the
/// settlement config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettlementRates {
    /// Gateway charge as a fraction of the gross amount.
    pub gateway_fee_rate: f64,
    /// Platform share as a fraction of the gross amount; the mentor share
    /// is the remainder.
    pub platform_share_rate: f64,
    /// Tax withheld at source, as a fraction of the mentor share.
    pub tds_rate: f64,
}

impl Default for SettlementRates {
    fn default() -> Self {
        Self {
            gateway_fee_rate: 0.0236,
            platform_share_rate: 0.30,
            tds_rate: 0.10,
        }
    }
}

/// The fixed-percentage split of one gross amount. Deductions redistribute
/// within the two shares, so all components sum back to the gross.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Settlement {
    pub gross_amount: f64,
    pub gateway_fee: f64,
    pub platform_share: f64,
    pub platform_net: f64,
    pub mentor_share: f64,
    pub tax_withheld: f64,
    pub mentor_payout: f64,
}

/// Pure settlement split. Never rounds; currency rounding is a display
/// concern. A negative or non-finite gross is a caller contract violation
/// and propagates through the arithmetic rather than failing the row.
pub fn settle(gross_amount: f64, rates: &SettlementRates) -> Settlement {
    let gateway_fee = gross_amount * rates.gateway_fee_rate;
    let platform_share = gross_amount * rates.platform_share_rate;
    let mentor_share = gross_amount * (1.0 - rates.platform_share_rate);
    let tax_withheld = mentor_share * rates.tds_rate;

    Settlement {
        gross_amount,
        gateway_fee,
        platform_share,
        platform_net: platform_share - gateway_fee,
        mentor_share,
        tax_withheld,
        mentor_payout: mentor_share - tax_withheld,
    }
}
