// SPDX-License-Identifier: MIT

//!
//! Points and sizes, in whole pixels
//!

use serde::Serialize;
use std::fmt::Debug;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn offset(self, x: u32, y: u32) -> Self {
        Point {
            x: self.x + x,
            y: self.y + y,
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether this size fits inside `other`
    pub fn fits_in(&self, other: Size) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

impl From<[u32; 2]> for Size {
    fn from(value: [u32; 2]) -> Self {
        Size {
            width: value[0],
            height: value[1],
        }
    }
}
