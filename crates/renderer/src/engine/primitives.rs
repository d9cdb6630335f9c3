// SPDX-License-Identifier: MIT

//!
//! Primitives
//!

use crate::{Point, Size, colour::Colour};
use grade_planner_core::Tier;
use serde::Serialize;
use std::fmt::Debug;

/// Which of the two fonts a piece of text is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontRole {
    Header,
    Body,
}

/// A box that specifies the location and size of something (e.g. a cell, or
/// the artwork drawn in it)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PositionAndSize {
    /// The smallest x/y values (boxes grow down and to the right from here)
    pub position: Point,

    pub size: Size,
}

/// Information needed to draw text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextOut {
    pub top_left: Point,
    pub text: String,
    pub colour: Colour,
    pub font_size: u32,
    pub font: FontRole,
}

/// Information needed to draw a tier's artwork, already scaled to fit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconOut {
    pub tier: Tier,
    pub position_and_size: PositionAndSize,
}
