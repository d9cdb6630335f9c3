// SPDX-License-Identifier: MIT

//!
//! *Part of the grade planner*
//!
//! Reads the planner's `settings.toml`, fills in defaults for anything left
//! out, and turns it into the types the planner and renderer work with.
//!

mod error;
mod resources;
mod settings;

pub use error::*;
pub use resources::*;
pub use settings::*;
