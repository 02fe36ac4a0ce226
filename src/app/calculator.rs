use rust_decimal::{Decimal, MathematicalOps};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestRequest {
    pub principal: Decimal,
    /// Annual rate as a raw fraction: 0.05 means 5% per year.
    pub annual_rate: Decimal,
    pub compounds_per_year: u32,
    pub years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestResult {
    pub total_amount: Decimal,
    pub total_interest: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("principal must be greater than 0")]
    InvalidPrincipal,
    #[error("rate must be greater than 0")]
    InvalidRate,
    #[error("times compounded must be greater than 0")]
    InvalidCompoundFrequency,
    #[error("years must be greater than 0")]
    InvalidYears,
    #[error("amount exceeds the supported decimal range")]
    Overflow,
}

/// total = principal * (1 + rate / n) ^ (n * years)
///
/// The whole chain runs on `Decimal`, so the repeated multiplication behind
/// the power stays exact; callers round for display only. Inputs are checked
/// in field order and the first violation wins.
pub fn compound_interest(req: &InterestRequest) -> Result<InterestResult, CalcError> {
    if req.principal <= Decimal::ZERO {
        return Err(CalcError::InvalidPrincipal);
    }
    if req.annual_rate <= Decimal::ZERO {
        return Err(CalcError::InvalidRate);
    }
    if req.compounds_per_year == 0 {
        return Err(CalcError::InvalidCompoundFrequency);
    }
    if req.years == 0 {
        return Err(CalcError::InvalidYears);
    }

    let n = Decimal::from(req.compounds_per_year);
    let periods = u64::from(req.compounds_per_year) * u64::from(req.years);

    let total_amount = req
        .annual_rate
        .checked_div(n)
        .and_then(|rate| rate.checked_add(Decimal::ONE))
        .and_then(|base| base.checked_powu(periods))
        .and_then(|growth| growth.checked_mul(req.principal))
        .ok_or(CalcError::Overflow)?;

    Ok(InterestResult {
        total_amount,
        total_interest: total_amount - req.principal,
    })
}
