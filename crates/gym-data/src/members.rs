use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use uuid::Uuid;

use crate::CycleMonth;

/// Number of days ahead of the payment day in which an
/// unpaid member counts as expiring soon.
pub const EXPIRING_SOON_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Unpaid,
}

impl PaymentStatus {
    pub fn is_paid(self) -> bool {
        self == PaymentStatus::Paid
    }

    /// The opposite status.
    pub fn toggled(self) -> Self {
        match self {
            PaymentStatus::Paid => PaymentStatus::Unpaid,
            PaymentStatus::Unpaid => PaymentStatus::Paid,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Unpaid => write!(f, "unpaid"),
        }
    }
}

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
#[error("Unknown payment status {0:?}, expected paid or unpaid")]
pub struct PaymentStatusError(String);

impl FromStr for PaymentStatus {
    type Err = PaymentStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paid" => Ok(PaymentStatus::Paid),
            "unpaid" => Ok(PaymentStatus::Unpaid),
            _ => Err(PaymentStatusError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    // Stored as entered, there is no credential handling.
    pub password: String,
    pub payment_day: u8,
    pub current_cycle_month: CycleMonth,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub password: String,
    pub payment_day: u8,
    pub payment_status: PaymentStatus,
    pub current_cycle_month: CycleMonth,
}

impl Default for NewMember {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            payment_day: 1,
            payment_status: PaymentStatus::Unpaid,
            current_cycle_month: CycleMonth::default(),
        }
    }
}

impl NewMember {
    /// Turn the form data into a member record.
    pub fn into_member(self, id: Uuid, now: DateTime<Utc>) -> Member {
        Member {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
            payment_day: self.payment_day,
            current_cycle_month: self.current_cycle_month,
            payment_status: self.payment_status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a member. Fields left at `None`
/// are not touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub payment_day: Option<u8>,
    pub payment_status: Option<PaymentStatus>,
    pub current_cycle_month: Option<CycleMonth>,
}

impl MemberPatch {
    pub fn is_empty(&self) -> bool {
        *self == MemberPatch::default()
    }
}

impl Member {
    /// Merge a patch into the member. Timestamps are left
    /// to the caller.
    pub fn apply(&mut self, patch: MemberPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(payment_day) = patch.payment_day {
            self.payment_day = payment_day;
        }
        if let Some(payment_status) = patch.payment_status {
            self.payment_status = payment_status;
        }
        if let Some(cycle) = patch.current_cycle_month {
            self.current_cycle_month = cycle;
        }
    }

    /// Days from today's day of month to the payment day.
    /// This is a plain difference of the days of the month,
    /// it does not wrap into the next month.
    pub fn days_until_payment(&self, today: NaiveDate) -> i64 {
        self.payment_day as i64 - today.day() as i64
    }

    /// Paid, and the payment belongs to the cycle of today.
    pub fn is_paid_for(&self, today: NaiveDate) -> bool {
        self.payment_status.is_paid() && self.current_cycle_month.contains(&today)
    }

    /// Not paid, or paid for a cycle other than the current one.
    pub fn is_pending(&self, today: NaiveDate) -> bool {
        !self.payment_status.is_paid() || !self.current_cycle_month.contains(&today)
    }

    pub fn is_expiring_soon(&self, today: NaiveDate) -> bool {
        let days = self.days_until_payment(today);
        !self.payment_status.is_paid() && (0..=EXPIRING_SOON_DAYS).contains(&days)
    }
}
