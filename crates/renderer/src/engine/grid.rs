// SPDX-License-Identifier: MIT

//!
//! The calendar grid
//!

use super::ceiling_div;
use crate::{COLUMNS, PositionAndSize};
use grade_planner_core::DayAssignment;
use serde::Serialize;
use std::fmt::Debug;

/// The number of rows and columns of day cells (the header isn't included)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridDimensions {
    pub rows: u32,
    pub columns: u32,
}

impl GridDimensions {
    /// The grid needed to show `day_span` days when the first day falls
    /// `leading_blank_days` columns in
    pub fn for_days(leading_blank_days: u32, day_span: u32) -> Self {
        GridDimensions {
            rows: ceiling_div(leading_blank_days + day_span, COLUMNS),
            columns: COLUMNS,
        }
    }

    pub fn cell_count(&self) -> u32 {
        self.rows * self.columns
    }
}

/// A single slot in the calendar grid.  Slots before the first day and after
/// the last day have no assignment and are left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell<'a> {
    pub row: u32,
    pub column: u32,
    pub assignment: Option<&'a DayAssignment>,
    pub bounds: PositionAndSize,
}

impl GridCell<'_> {
    pub fn is_blank(&self) -> bool {
        self.assignment.is_none()
    }
}
