use crate::types::Strategy;

use super::WorkingDebt;

/// Fix the payoff order for a simulation run.
///
/// Snowball sorts ascending by balance, avalanche descending by rate. The
/// sort is stable, so debts tying on the key keep their input order. The
/// order is computed once per run and never revisited mid-simulation.
pub(crate) fn sort_for_strategy(debts: &mut [WorkingDebt], strategy: Strategy) {
    match strategy {
        Strategy::Snowball => debts.sort_by(|a, b| a.balance.cmp(&b.balance)),
        Strategy::Avalanche => {
            debts.sort_by(|a, b| b.interest_rate.cmp(&a.interest_rate))
        }
    }
}
