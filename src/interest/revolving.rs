use rust_decimal_macros::dec;

use crate::decimal::{Money, Rate};
use crate::types::default_min_payment;

/// fallback annual rate when a card has none on record, 15% p.a.
pub fn default_card_rate() -> Rate {
    Rate::from_percentage(dec!(15))
}

/// next-cycle cost estimate for a revolving balance
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardInterestEstimate {
    /// interest accruing over the next billing cycle on the current balance
    pub estimated_interest: Money,
    /// minimum due, 5% of the balance with a floor of 50
    pub min_payment: Money,
}

/// Estimate next month's interest on a card balance if only the minimum is
/// paid.
///
/// This is a single-period estimate on the current balance, not a converged
/// payoff projection; the simulator owns the multi-month picture.
pub fn estimate_card_interest(
    balance_magnitude: Money,
    annual_rate: Option<Rate>,
) -> CardInterestEstimate {
    let rate = annual_rate.unwrap_or_else(default_card_rate);
    let estimated_interest = balance_magnitude * rate.monthly_rate().as_decimal();

    CardInterestEstimate {
        estimated_interest,
        min_payment: default_min_payment(balance_magnitude),
    }
}
