// SPDX-License-Identifier: MIT

//!
//! The period planner
//!
//! Splits a [`DateRange`] into one [`Period`] per tier.  The first period is
//! [`DAYS_OF_FIRST_PERIOD`] days long (or [`DAYS_OF_FIRST_PERIOD_IN_FEBRUARY`]
//! when the range starts in February), each following period is a day longer
//! than the one before, and the last period gets whatever is left.
//!

use crate::{ConfigurationError, DateRange, DayAssignment, Period, Tier, ensure_valid_tier_list};
use log::{debug, trace};

/// The length of the first period
pub const DAYS_OF_FIRST_PERIOD: u32 = 4;

/// The length of the first period when the range runs February -> March.
/// February is short enough that a 4 day start leaves the last tier with
/// fewer days than the tier before it.
pub const DAYS_OF_FIRST_PERIOD_IN_FEBRUARY: u32 = 3;

/// The length of the first period of a plan over `date_range`
pub fn first_period_length(date_range: &DateRange) -> u32 {
    if date_range.starts_in_february() {
        DAYS_OF_FIRST_PERIOD_IN_FEBRUARY
    } else {
        DAYS_OF_FIRST_PERIOD
    }
}

/// The fewest days that fit `tier_count` periods which each grow by a day,
/// starting from `first_length`
pub fn minimum_days(first_length: u32, tier_count: usize) -> u64 {
    let count = tier_count as u64;
    let triangle = count * count.saturating_sub(1) / 2;
    u64::from(first_length) * count + triangle
}

/// Split `date_range` into one period per tier, in tier order.
///
/// Every day of the range is covered by exactly one period.  Fails if the
/// tier list is empty, holds duplicates, or the range can't fit a strictly
/// growing period for every tier.
pub fn compute_periods(
    date_range: &DateRange,
    tiers: &[Tier],
) -> Result<Vec<Period>, ConfigurationError> {
    ensure_valid_tier_list(tiers)?;

    let total_days = date_range.day_count();
    let first_length = first_period_length(date_range);
    let required = minimum_days(first_length, tiers.len());
    if u64::from(total_days) < required {
        return Err(ConfigurationError::NotEnoughDays {
            days: total_days,
            tiers: tiers.len(),
            required,
        });
    }
    debug!(
        "Planning {} tiers over {} days from {} (first period {} days)",
        tiers.len(),
        total_days,
        date_range.start(),
        first_length
    );

    let last_index = tiers.len() - 1;
    let mut periods = Vec::with_capacity(tiers.len());
    let mut start = date_range.start();
    let mut assigned_days = 0;
    for (index, tier) in tiers.iter().enumerate() {
        // The checks above guarantee neither of these can underflow/overflow
        let length = if index == last_index {
            total_days - assigned_days
        } else {
            first_length + index as u32
        };
        let period = Period::new(tier.clone(), index, start, length);
        trace!("{} from {} for {} days", tier, start, length);
        start = period.end();
        assigned_days += length;
        periods.push(period);
    }
    Ok(periods)
}

/// Flatten periods into one assignment per day, in date order
pub fn day_assignments(periods: &[Period]) -> Vec<DayAssignment> {
    periods
        .iter()
        .flat_map(|period| period.day_assignments())
        .collect()
}

/// Plan `date_range` and return the tier for every day in it
pub fn plan_days(
    date_range: &DateRange,
    tiers: &[Tier],
) -> Result<Vec<DayAssignment>, ConfigurationError> {
    let periods = compute_periods(date_range, tiers)?;
    Ok(day_assignments(&periods))
}
