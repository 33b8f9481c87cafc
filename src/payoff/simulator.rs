use crate::decimal::Money;
use crate::types::{Debt, InterestType, Strategy};

use super::strategy::sort_for_strategy;
use super::{DebtSummary, SimulationResult, WorkingDebt};

/// hard horizon: a portfolio not cleared within 30 years reports the cap
pub const MAX_MONTHS: u32 = 360;

/// Project month-by-month payoff of a debt portfolio.
///
/// Every month each debt accrues interest (reducing-balance debts only) and
/// pays its minimum; the extra payment then goes in full to the focus debt,
/// the first in the fixed strategy order that still carries a balance. The
/// loop's continuation flag reflects balances before the month's payments,
/// so the reported month count includes the pass that finds nothing owing.
///
/// Flat-rate debts accrue nothing here: their interest is fixed at
/// origination and priced by the rule-of-78 settlement instead.
///
/// Never fails. An empty portfolio is trivially debt free and a negative
/// extra payment is treated as zero.
pub fn simulate(
    debts: &[Debt],
    strategy: Strategy,
    extra_monthly_payment: Money,
) -> SimulationResult {
    if debts.is_empty() {
        return SimulationResult::debt_free();
    }

    let extra = extra_monthly_payment.max(Money::ZERO);

    let mut working: Vec<WorkingDebt> = debts.iter().map(WorkingDebt::new).collect();
    sort_for_strategy(&mut working, strategy);

    let mut month = 0;
    let mut total_interest = Money::ZERO;

    while month < MAX_MONTHS {
        month += 1;
        let mut has_active_debt = false;

        // interest accrual and minimum payment, each debt independently
        for debt in working.iter_mut() {
            if debt.balance <= Money::ZERO {
                continue;
            }
            has_active_debt = true;

            if debt.interest_type == InterestType::ReducingBalance {
                let monthly_interest =
                    debt.balance * debt.interest_rate.monthly_rate().as_decimal();
                debt.balance += monthly_interest;
                total_interest += monthly_interest;
            }

            let payment = debt.min_payment.min(debt.balance);
            debt.balance -= payment;
        }

        // the extra payment lands on one debt only; it does not spill over
        // to the next even when it clears the focus mid-month
        if extra > Money::ZERO {
            if let Some(focus) = working.iter_mut().find(|d| d.balance > Money::ZERO) {
                let applied = extra.min(focus.balance);
                focus.balance -= applied;
            }
        }

        if !has_active_debt {
            break;
        }
    }

    // summaries carry the pre-simulation balances, looked up from the
    // untouched input snapshots
    let priority_order = working
        .iter()
        .enumerate()
        .map(|(index, debt)| DebtSummary {
            id: debt.id,
            name: debt.name.clone(),
            balance: debts
                .iter()
                .find(|d| d.id == debt.id)
                .map(|d| d.balance_magnitude())
                .unwrap_or(Money::ZERO),
            interest_rate: debt.interest_rate,
            min_payment: debt.min_payment,
            is_focus: index == 0,
        })
        .collect();

    SimulationResult {
        total_months: month,
        total_interest_paid: total_interest,
        priority_order,
    }
}
