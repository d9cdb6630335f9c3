// SPDX-License-Identifier: MIT

//!
//! The plan's date range
//!

use crate::ConfigurationError;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::fmt::Debug;

/// The day of the month on which one plan ends and the next begins
pub const DAY_WHEN_PERIOD_CHANGES: u32 = 13;

/// The days covered by a plan.  The start is inclusive and the end exclusive,
/// so a range anchored on the 13th of May ends on the 12th of June.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    /// The first day in the range
    start: NaiveDate,

    /// The day after the last day in the range
    end: NaiveDate,
}

impl DateRange {
    /// Create a range from any start and (exclusive) end, as long as the range
    /// holds at least one day
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ConfigurationError> {
        if end <= start {
            return Err(ConfigurationError::EmptyRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The range running from the 13th of the given month to the 13th of the
    /// following one
    pub fn starting_in(year: i32, month: u32) -> Result<Self, ConfigurationError> {
        let start = NaiveDate::from_ymd_opt(year, month, DAY_WHEN_PERIOD_CHANGES)
            .ok_or(ConfigurationError::InvalidMonth { year, month })?;
        let (end_year, end_month) = next_month(year, month);
        let end = NaiveDate::from_ymd_opt(end_year, end_month, DAY_WHEN_PERIOD_CHANGES).ok_or(
            ConfigurationError::InvalidMonth {
                year: end_year,
                month: end_month,
            },
        )?;
        Self::new(start, end)
    }

    /// The range that `date` falls in.  Days before the 13th belong to the
    /// range that started in the previous month.
    pub fn containing(date: NaiveDate) -> Result<Self, ConfigurationError> {
        let (year, month) = if date.day() < DAY_WHEN_PERIOD_CHANGES {
            previous_month(date.year(), date.month())
        } else {
            (date.year(), date.month())
        };
        Self::starting_in(year, month)
    }

    /// The first day in the range
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The day after the last day in the range
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// The last day in the range
    pub fn last_day(&self) -> NaiveDate {
        self.end - Days::new(1)
    }

    /// The number of days in the range
    pub fn day_count(&self) -> u32 {
        let days = (self.end - self.start).num_days();
        u32::try_from(days).unwrap_or(u32::MAX)
    }

    /// Every day in the range, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day < end)
    }

    /// Whether `date` is in the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Whether the range starts in February (and so runs February -> March)
    pub fn starts_in_february(&self) -> bool {
        self.start.month() == 2
    }

    /// e.g. "May-June 2024".  The year is the start date's year.
    pub fn label(&self) -> String {
        format!(
            "{}-{} {}",
            self.start.format("%B"),
            self.last_day().format("%B"),
            self.start.year()
        )
    }
}

/// The year and month after the given one
fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// The year and month before the given one
fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}
