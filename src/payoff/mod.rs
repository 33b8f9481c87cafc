pub mod simulator;
pub mod strategy;

use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{Debt, DebtId, InterestType};

pub use simulator::{simulate, MAX_MONTHS};

/// outcome of one payoff simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// months until every balance reaches zero, capped at [`MAX_MONTHS`]
    pub total_months: u32,
    /// interest accrued across all reducing-balance debts during the run
    pub total_interest_paid: Money,
    /// debts in the strategy's fixed order, first entry is the focus
    pub priority_order: Vec<DebtSummary>,
}

impl SimulationResult {
    /// empty-portfolio result: already debt free
    pub fn debt_free() -> Self {
        Self {
            total_months: 0,
            total_interest_paid: Money::ZERO,
            priority_order: Vec::new(),
        }
    }
}

/// one debt's position in the payoff order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtSummary {
    pub id: DebtId,
    pub name: String,
    /// pre-simulation balance magnitude, not the simulated remainder
    pub balance: Money,
    pub interest_rate: Rate,
    pub min_payment: Money,
    /// true for the single debt receiving any extra payment
    pub is_focus: bool,
}

/// per-run working copy of a debt; balances mutate month by month while the
/// source snapshots stay untouched
#[derive(Debug, Clone)]
pub(crate) struct WorkingDebt {
    pub(crate) id: DebtId,
    pub(crate) name: String,
    pub(crate) balance: Money,
    pub(crate) interest_rate: Rate,
    pub(crate) interest_type: InterestType,
    pub(crate) min_payment: Money,
}

impl WorkingDebt {
    pub(crate) fn new(debt: &Debt) -> Self {
        Self {
            id: debt.id,
            name: debt.name.clone(),
            balance: debt.balance_magnitude(),
            interest_rate: debt.interest_rate,
            interest_type: debt.interest_type,
            min_payment: debt.effective_min_payment(),
        }
    }
}
