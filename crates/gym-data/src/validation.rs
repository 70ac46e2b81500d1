use std::ops::RangeInclusive;

use thiserror::Error as ThisError;

use crate::{Member, NewMember};

/// Valid days of the month a payment can be due.
pub const PAYMENT_DAY_RANGE: RangeInclusive<u8> = 1..=31;

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The {0} is required")]
    MissingField(&'static str),
    #[error("The payment day must be between 1 and 31, got {0}")]
    PaymentDayOutOfRange(u8),
}

/// Checks a member record before it is handed to the store.
/// The store itself accepts whatever it is given.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

fn payment_day(day: u8) -> Result<(), ValidationError> {
    if !PAYMENT_DAY_RANGE.contains(&day) {
        return Err(ValidationError::PaymentDayOutOfRange(day));
    }
    Ok(())
}

impl Validate for NewMember {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        required("email", &self.email)?;
        required("password", &self.password)?;
        payment_day(self.payment_day)
    }
}

impl Validate for Member {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        required("email", &self.email)?;
        required("password", &self.password)?;
        payment_day(self.payment_day)
    }
}
