use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum CycleMonthError {
    #[error("Cycle month {0:?} is not in YYYY-MM format")]
    Format(String),
    #[error("Month {0} is out of range")]
    MonthOutOfRange(u32),
}

/// A billing cycle, written as `YYYY-MM`.
///
/// The payment status of a member always refers to one cycle. Marking a
/// member as paid moves them into the cycle of the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CycleMonth {
    year: i32,
    month: u32,
}

impl CycleMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, CycleMonthError> {
        if !(1..=12).contains(&month) {
            return Err(CycleMonthError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// The cycle a date falls into.
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Does the date lie within this cycle?
    pub fn contains<D: Datelike>(&self, date: &D) -> bool {
        *self == Self::of(date)
    }
}

impl Default for CycleMonth {
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
        }
    }
}

impl fmt::Display for CycleMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Years have at least four digits, a leading minus
        // for years before year zero.
        if self.year < 0 {
            write!(f, "-{:04}-{:02}", self.year.unsigned_abs(), self.month)
        } else {
            write!(f, "{:04}-{:02}", self.year, self.month)
        }
    }
}

impl FromStr for CycleMonth {
    type Err = CycleMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || CycleMonthError::Format(s.to_string());
        let (year, month) = s.rsplit_once('-').ok_or_else(format_err)?;
        let (negative, digits) = match year.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, year),
        };
        if digits.len() < 4 || month.len() != 2 {
            return Err(format_err());
        }
        if !digits.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(format_err());
        }
        let year: i32 = digits.parse().map_err(|_| format_err())?;
        let year = if negative { -year } else { year };
        let month: u32 = month.parse().map_err(|_| format_err())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for CycleMonth {
    type Error = CycleMonthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CycleMonth> for String {
    fn from(cycle: CycleMonth) -> Self {
        cycle.to_string()
    }
}
