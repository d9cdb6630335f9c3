// SPDX-License-Identifier: MIT

//!
//! Periods and day assignments
//!

use crate::Tier;
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::fmt::Debug;

/// A run of consecutive days during which the same tier is the minimum a user
/// must hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    /// The tier to hold during the period
    tier: Tier,

    /// The tier's position in the tier list the period was planned from
    tier_index: usize,

    /// The first day of the period
    start: NaiveDate,

    /// The number of days in the period
    length: u32,
}

/// The tier to hold on a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAssignment {
    pub date: NaiveDate,
    pub tier: Tier,
    pub tier_index: usize,
}

impl Period {
    pub(crate) fn new(tier: Tier, tier_index: usize, start: NaiveDate, length: u32) -> Self {
        Self {
            tier,
            tier_index,
            start,
            length,
        }
    }

    pub fn tier(&self) -> &Tier {
        &self.tier
    }

    pub fn tier_index(&self) -> usize {
        self.tier_index
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// The day after the period's last day (i.e. the next period's start)
    pub fn end(&self) -> NaiveDate {
        self.start + Days::new(u64::from(self.length))
    }

    /// Whether `date` falls in the period
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end()
    }

    /// One [`DayAssignment`] for every day of the period
    pub fn day_assignments(&self) -> impl Iterator<Item = DayAssignment> + '_ {
        self.start
            .iter_days()
            .take(self.length as usize)
            .map(|date| DayAssignment {
                date,
                tier: self.tier.clone(),
                tier_index: self.tier_index,
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn end_and_contains() {
        let start = NaiveDate::from_ymd_opt(2024, 5, 13).unwrap();
        let period = Period::new(Tier::from("ash").unwrap(), 0, start, 4);
        assert_eq!(period.end(), NaiveDate::from_ymd_opt(2024, 5, 17).unwrap());
        assert!(period.contains(start));
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 5, 16).unwrap()));
        assert!(!period.contains(period.end()));
    }

    #[test]
    fn day_assignments() {
        let start = NaiveDate::from_ymd_opt(2024, 5, 30).unwrap();
        let period = Period::new(Tier::from("gold").unwrap(), 3, start, 3);
        let days: Vec<DayAssignment> = period.day_assignments().collect();
        assert_eq!(days.len(), 3);
        assert_eq!(days[2].date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!(days.iter().all(|day| day.tier.as_str() == "gold"));
        assert!(days.iter().all(|day| day.tier_index == 3));
    }
}
