use chrono::{DateTime, Local, NaiveDate, Utc};

use gym_data::CycleMonth;

/// The moment a command runs. Read once at startup and
/// handed to everything that depends on the date.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    pub now: DateTime<Utc>,
    pub today: NaiveDate,
}

impl Clock {
    /// Read the system clock once, `today` is the local date of `now`.
    pub fn system() -> Self {
        let local = Local::now();
        Self {
            now: local.with_timezone(&Utc),
            today: local.date_naive(),
        }
    }

    /// Pretend it is `today`, at the current time of day.
    pub fn pinned(today: NaiveDate) -> Self {
        Self {
            now: today.and_time(Utc::now().time()).and_utc(),
            today,
        }
    }

    /// The billing cycle of today.
    pub fn cycle(&self) -> CycleMonth {
        CycleMonth::of(&self.today)
    }
}
