// SPDX-License-Identifier: MIT

//!
//! Errors raised while building a plan's inputs
//!

use chrono::NaiveDate;
use thiserror::Error;

/// The tier list or date range can't be turned into a plan.  These are caller
/// configuration mistakes and are never recovered from
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// At least one tier is needed to plan anything
    #[error("The tier list is empty")]
    NoTiers,

    /// Tier names must be non-empty once trimmed
    #[error("Tier name cannot be empty")]
    EmptyTierName,

    /// Every tier in the list must be unique
    #[error("Tier `{0}` appears more than once")]
    DuplicateTier(String),

    /// The range is too short to give every tier a period longer than the
    /// one before it
    #[error("{tiers} tiers need at least {required} days, but the range only has {days}")]
    NotEnoughDays { days: u32, tiers: usize, required: u64 },

    /// The year/month pair doesn't name a real month
    #[error("There is no month {month} in year {year}")]
    InvalidMonth { year: i32, month: u32 },

    /// The range's end must come after its start
    #[error("Empty date range: {start} to {end}")]
    EmptyRange { start: NaiveDate, end: NaiveDate },
}
