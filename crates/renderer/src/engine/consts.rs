// SPDX-License-Identifier: MIT

//!
//! Constants
//!

/// The number of columns in the calendar grid (one per weekday)
pub const COLUMNS: u32 = 7;

/// Weekday headings, Monday first
pub const WEEKDAYS_SHORT: [&str; COLUMNS as usize] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Extra vertical space given to each line of the header
pub const HEADER_LINE_SPACING: u32 = 20;

/// The number of text lines in the header (title, then weekdays)
pub const HEADER_LINES: u32 = 2;

pub const DEFAULT_FONT_SIZE: u32 = 108;
pub const DEFAULT_CELL_SIZE: u32 = 360;

/// The largest canvas drawn, in pixels (1 GiB of RGBA)
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;
