// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Grade Planner project*
//!
//! This crate defines the datatypes shared across the Grade Planner project
//! (renderer, config, command line tool) and the period planner itself.
//!
//! A plan covers the days between the 13th of one month and the 13th of the
//! next.  The planner divides those days into consecutive periods, one per
//! tier, each period one day longer than the one before it.  The last period
//! takes whatever days are left.
//!
//! As with the rest of the project, types are only handed out once they are
//! known to be valid.
//!

mod date_range;
mod error;
mod period;
mod planner;
mod tier;

pub use date_range::*;
pub use error::*;
pub use period::*;
pub use planner::*;
pub use tier::*;
