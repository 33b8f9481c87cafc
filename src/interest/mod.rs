pub mod flat_rate;
pub mod revolving;

pub use flat_rate::{
    calculate_rule_of_78, months_elapsed, settlement_quote, RuleOf78Settlement,
};
pub use revolving::{default_card_rate, estimate_card_interest, CardInterestEstimate};
