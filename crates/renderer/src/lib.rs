// SPDX-License-Identifier: MIT

//!
//! *Part of the grade planner*
//!
//! This crate draws a plan as a calendar image.  One row per week, one
//! column per weekday, with each day's cell showing the artwork of the tier
//! for that day and the day of the month on top.
//!
//! The crate is split in the same way as most renderers:
//!
//! - A platform independent [`Engine`] that measures text (through a
//!   [`Typeface`]) and works out where everything goes
//! - Frontends that take the engine's [`PlanLayout`] and draw it (currently
//!   only [`frontends::raster`], which draws into an RGBA image)
//!
//! ## Usage
//!
//! ```no_run
//! use grade_planner_core::{DateRange, default_tiers, plan_days};
//! use grade_planner_renderer::{FontFile, Fonts, LayoutSpec, Resources, TierArtwork, render};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let range = DateRange::starting_in(2024, 5)?;
//! let tiers = default_tiers();
//! let days = plan_days(&range, &tiers)?;
//!
//! let header = FontFile::load("fonts/header.ttf")?;
//! let body = FontFile::load("fonts/body.ttf")?;
//! let artwork = TierArtwork::load("placeholders", &tiers)?;
//! let resources = Resources {
//!     fonts: Fonts { header: &header, body: &body },
//!     artwork: &artwork,
//! };
//!
//! let image = render(&days, &LayoutSpec::default(), &range.label(), &resources)?;
//! image.save("plan.png")?;
//! # Ok(())
//! # }
//! ```
//!

mod artwork;
pub mod colour;
pub mod engine;
mod error;
pub mod frontends;
mod typeface;

pub use artwork::*;
pub use colour::*;
pub use engine::*;
pub use error::*;
pub use frontends::raster::{Resources, draw, render};
pub use typeface::*;
