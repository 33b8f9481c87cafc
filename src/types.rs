use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};

/// unique identifier for a debt account
pub type DebtId = Uuid;

/// how interest is charged on a debt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestType {
    /// interest recomputed monthly on the outstanding balance (credit cards)
    ReducingBalance,
    /// interest fixed at origination on the original principal (hire purchase)
    FlatRate,
    /// no interest charged
    None,
}

/// payoff strategy for the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// smallest balance first, for quick wins
    Snowball,
    /// highest interest rate first, minimizing total interest
    Avalanche,
}

/// default minimum payment: 5% of the balance magnitude, floored at 50
pub fn default_min_payment(balance_magnitude: Money) -> Money {
    balance_magnitude
        .percentage(dec!(5))
        .max(Money::from_major(50))
}

/// original contract terms for a flat-rate installment loan
///
/// all three fields are required to settle via rule of 78; a debt without
/// them simply has no settlement quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatRateTerms {
    pub original_amount: Money,
    pub tenure_months: u32,
    pub start_date: DateTime<Utc>,
}

/// immutable snapshot of one debt account, as resolved from storage
///
/// the stored balance keeps its sign (liabilities are commonly stored
/// negative); every calculation works on the magnitude
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: DebtId,
    pub name: String,
    pub balance: Money,
    pub interest_rate: Rate,
    pub interest_type: InterestType,
    pub min_payment: Option<Money>,
    pub flat_rate_terms: Option<FlatRateTerms>,
}

impl Debt {
    /// non-negative balance used by all calculations
    pub fn balance_magnitude(&self) -> Money {
        self.balance.abs()
    }

    /// stated minimum payment, or the 5%-with-floor default
    pub fn effective_min_payment(&self) -> Money {
        self.min_payment
            .unwrap_or_else(|| default_min_payment(self.balance_magnitude()))
    }
}
