// SPDX-License-Identifier: MIT

//!
//! Frontends that turn a [`crate::PlanLayout`] into something viewable
//!

pub mod raster;
