/// Source of "today" for the daily rollover
///
/// The rollover compares calendar dates in the user's local timezone, so the
/// real clock reads `chrono::Local`. Tests use `FixedClock` to move between days.

use std::cell::Cell;
use chrono::{Duration, Local, NaiveDate};

/// Format of the stored `last_update_date` value
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Something that knows the current local calendar date
pub trait Clock {
    /// Today's date in the local calendar
    fn today(&self) -> NaiveDate;

    /// Today's date formatted the way it is stored
    fn today_string(&self) -> String {
        self.today().format(DATE_FORMAT).to_string()
    }
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a settable date
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Cell<NaiveDate>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date: Cell::new(date) }
    }

    /// Move the clock to another date
    pub fn set(&self, date: NaiveDate) {
        self.date.set(date);
    }

    /// Move the clock forward by whole days
    pub fn advance_days(&self, days: i64) {
        self.date.set(self.date.get() + Duration::days(days));
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}
