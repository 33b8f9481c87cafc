use chrono::{DateTime, Datelike, Utc};
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::decimal::{Money, Rate};
use crate::errors::{DebtMathError, Result};
use crate::types::Debt;

/// early settlement figures for a flat-rate installment loan
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RuleOf78Settlement {
    /// interest payable over the whole contracted tenure
    pub total_interest: Money,
    /// fixed monthly installment, (principal + total interest) / tenure
    pub monthly_installment: Money,
    /// interest rebated for settling early, sum-of-digits weighted
    pub rebate: Money,
    /// remaining installments less the rebate
    pub settlement_amount: Money,
    /// installments left on the contract
    pub months_remaining: u32,
}

/// Rule-of-78 settlement for a flat-rate loan (hire purchase, car loans).
///
/// The rebate follows the sum-of-digits weighting
/// `R = n(n+1) / N(N+1) * I` where `n` is the remaining tenure, `N` the
/// original tenure and `I` the total interest payable. Interest is
/// front-loaded, so the rebate shrinks faster than linearly as the loan ages.
///
/// A loan already past its tenure settles at zero: no installments remain
/// and no rebate applies.
pub fn calculate_rule_of_78(
    principal: Money,
    flat_annual_rate: Rate,
    tenure_months: u32,
    months_paid: u32,
) -> Result<RuleOf78Settlement> {
    if tenure_months == 0 {
        return Err(DebtMathError::InvalidTenure {
            months: tenure_months,
        });
    }
    if principal < Money::ZERO {
        return Err(DebtMathError::InvalidPrincipal { amount: principal });
    }
    if flat_annual_rate < Rate::ZERO {
        return Err(DebtMathError::InvalidInterestRate {
            rate: flat_annual_rate,
        });
    }

    // flat interest is fixed at origination on the original principal:
    // I = P * rate * (tenure in years)
    let tenure = Decimal::from(tenure_months);
    let total_interest =
        principal * (flat_annual_rate.as_decimal() * tenure / dec!(12));
    let total_amount = principal + total_interest;
    let monthly_installment = total_amount / tenure;

    let months_remaining = tenure_months.saturating_sub(months_paid);

    // sum of digits for the remaining tenure over the original tenure
    let numerator = Decimal::from(months_remaining) * Decimal::from(months_remaining + 1);
    let denominator = tenure * (tenure + Decimal::ONE);
    let rebate = total_interest * numerator / denominator;

    let balance_to_pay = monthly_installment * Decimal::from(months_remaining);
    let settlement_amount = balance_to_pay - rebate;

    Ok(RuleOf78Settlement {
        total_interest,
        monthly_installment,
        rebate,
        settlement_amount,
        months_remaining,
    })
}

/// whole calendar months elapsed between two instants, clamped to zero
pub fn months_elapsed(start: DateTime<Utc>, as_of: DateTime<Utc>) -> u32 {
    let mut months = (as_of.year() - start.year()) * 12 + as_of.month() as i32
        - start.month() as i32;
    if as_of.day() < start.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// Settlement quote for a debt as of the provider's current time.
///
/// Returns `Ok(None)` when the debt carries no flat-rate contract terms;
/// without the original amount, tenure and start date there is nothing to
/// settle against.
pub fn settlement_quote(
    debt: &Debt,
    time_provider: &SafeTimeProvider,
) -> Result<Option<RuleOf78Settlement>> {
    let Some(terms) = &debt.flat_rate_terms else {
        return Ok(None);
    };

    let months_paid = months_elapsed(terms.start_date, time_provider.now());
    let settlement = calculate_rule_of_78(
        terms.original_amount,
        debt.interest_rate,
        terms.tenure_months,
        months_paid,
    )?;

    Ok(Some(settlement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FlatRateTerms, InterestType};
    use chrono::TimeZone;
    use hourglass_rs::TimeSource;
    use uuid::Uuid;

    #[test]
    fn test_full_term_remaining_gets_full_rebate() {
        // 12000 at 3.5% flat over 60 months: I = 12000 * 0.035 * 5 = 2100
        let result = calculate_rule_of_78(
            Money::from_major(12_000),
            Rate::from_percentage(dec!(3.5)),
            60,
            0,
        )
        .unwrap();

        assert_eq!(result.total_interest, Money::from_major(2_100));
        assert_eq!(result.monthly_installment, Money::from_major(235));
        assert_eq!(result.rebate, Money::from_major(2_100));
        assert_eq!(result.months_remaining, 60);
        // settling on day one costs the remaining installments minus all interest
        assert_eq!(result.settlement_amount, Money::from_major(12_000));
    }

    #[test]
    fn test_mid_term_settlement() {
        let result = calculate_rule_of_78(
            Money::from_major(12_000),
            Rate::from_percentage(dec!(3.5)),
            60,
            24,
        )
        .unwrap();

        assert_eq!(result.months_remaining, 36);
        // rebate = 36*37 / (60*61) * 2100
        assert_eq!(result.rebate.round_dp(2), Money::from_str_exact("764.26").unwrap());
        assert_eq!(
            result.settlement_amount.round_dp(2),
            Money::from_str_exact("7695.74").unwrap()
        );
    }

    #[test]
    fn test_rebate_never_exceeds_total_interest() {
        for months_paid in 0..=60 {
            let result = calculate_rule_of_78(
                Money::from_major(25_000),
                Rate::from_percentage(dec!(4.2)),
                60,
                months_paid,
            )
            .unwrap();

            assert!(result.rebate <= result.total_interest);
            assert!(result.months_remaining <= 60);
        }
    }

    #[test]
    fn test_fully_paid_loan_settles_at_zero() {
        let result = calculate_rule_of_78(
            Money::from_major(12_000),
            Rate::from_percentage(dec!(3.5)),
            60,
            60,
        )
        .unwrap();

        assert_eq!(result.months_remaining, 0);
        assert_eq!(result.rebate, Money::ZERO);
        assert_eq!(result.settlement_amount, Money::ZERO);
    }

    #[test]
    fn test_overdue_loan_clamps_to_zero_remaining() {
        let result = calculate_rule_of_78(
            Money::from_major(12_000),
            Rate::from_percentage(dec!(3.5)),
            60,
            72,
        )
        .unwrap();

        assert_eq!(result.months_remaining, 0);
        assert_eq!(result.settlement_amount, Money::ZERO);
    }

    #[test]
    fn test_zero_tenure_is_rejected() {
        let result = calculate_rule_of_78(
            Money::from_major(12_000),
            Rate::from_percentage(dec!(3.5)),
            0,
            0,
        );

        assert!(matches!(
            result,
            Err(DebtMathError::InvalidTenure { months: 0 })
        ));
    }

    #[test]
    fn test_months_elapsed() {
        let start = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();

        let same_day = Utc.with_ymd_and_hms(2024, 7, 15, 0, 0, 0).unwrap();
        assert_eq!(months_elapsed(start, same_day), 6);

        // one day short of the 6th installment anniversary
        let day_before = Utc.with_ymd_and_hms(2024, 7, 14, 0, 0, 0).unwrap();
        assert_eq!(months_elapsed(start, day_before), 5);

        let across_year = Utc.with_ymd_and_hms(2025, 2, 20, 0, 0, 0).unwrap();
        assert_eq!(months_elapsed(start, across_year), 13);

        // start date in the future clamps to zero
        let before_start = Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap();
        assert_eq!(months_elapsed(start, before_start), 0);
    }

    fn hire_purchase(terms: Option<FlatRateTerms>) -> Debt {
        Debt {
            id: Uuid::new_v4(),
            name: "Car loan".to_string(),
            balance: Money::from_major(-9_000),
            interest_rate: Rate::from_percentage(dec!(3.5)),
            interest_type: InterestType::FlatRate,
            min_payment: Some(Money::from_major(235)),
            flat_rate_terms: terms,
        }
    }

    #[test]
    fn test_settlement_quote_uses_injected_time() {
        let start = Utc.with_ymd_and_hms(2022, 3, 1, 0, 0, 0).unwrap();
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        ));

        let debt = hire_purchase(Some(FlatRateTerms {
            original_amount: Money::from_major(12_000),
            tenure_months: 60,
            start_date: start,
        }));

        let quote = settlement_quote(&debt, &time).unwrap().unwrap();
        assert_eq!(quote.months_remaining, 36);
    }

    #[test]
    fn test_settlement_quote_skipped_without_terms() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        ));

        let debt = hire_purchase(None);
        assert_eq!(settlement_quote(&debt, &time).unwrap(), None);
    }
}
