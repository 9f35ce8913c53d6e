//! Calendar access for date-dependent providers.
//!
//! Passport dates depend on "today". Providers read it through
//! [`mockable::Clock`] so callers can pin it with [`FixedClock`].

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use mockable::Clock;

/// Returns the clock's current local date.
#[must_use]
pub fn today(clock: &dyn Clock) -> NaiveDate {
    clock.local().date_naive()
}

/// A clock that always reports noon on a fixed local date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fake_ko_kr::clock::{FixedClock, today};
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date");
/// assert_eq!(today(&FixedClock::new(date)), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    /// Pins the clock to `date`.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Returns the pinned date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        let noon = self.date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default());
        Local
            .from_local_datetime(&noon)
            .earliest()
            .unwrap_or_else(|| noon.and_utc().with_timezone(&Local))
    }

    fn utc(&self) -> DateTime<Utc> {
        self.local().with_timezone(&Utc)
    }
}
