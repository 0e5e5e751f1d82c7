//! Record generators - build one client at a time
//!
//! Each generator draws from a `DataProvider` and the caller's RNG, and
//! measures every date window from a single generation instant.

pub mod company;
pub mod person;

pub use company::{generate_company, LEGAL_SUFFIXES};
pub use person::generate_person;

use chrono::{Duration, NaiveDateTime, Timelike, Utc};

/// Length of a year in the relative date windows (365.25 days)
const SECONDS_PER_YEAR: i64 = 31_557_600;

/// Current UTC time, truncated to whole seconds.
pub fn generation_instant() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}

/// `now` minus a whole number of 365.25-day years
pub fn years_before(now: NaiveDateTime, years: i64) -> NaiveDateTime {
    now - Duration::seconds(years * SECONDS_PER_YEAR)
}
