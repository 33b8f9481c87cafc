use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum DebtMathError {
    #[error("invalid tenure: {months} months, must be greater than zero")]
    InvalidTenure {
        months: u32,
    },

    #[error("invalid principal: {amount}, must be non-negative")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid interest rate: {rate}, must be non-negative")]
    InvalidInterestRate {
        rate: Rate,
    },
}

pub type Result<T> = std::result::Result<T, DebtMathError>;
