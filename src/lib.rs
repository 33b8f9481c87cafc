pub mod decimal;
pub mod errors;
pub mod interest;
pub mod payoff;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{DebtMathError, Result};
pub use interest::{
    calculate_rule_of_78, estimate_card_interest, months_elapsed, settlement_quote,
    CardInterestEstimate, RuleOf78Settlement,
};
pub use payoff::{simulate, DebtSummary, SimulationResult, MAX_MONTHS};
pub use types::{default_min_payment, Debt, DebtId, FlatRateTerms, InterestType, Strategy};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
