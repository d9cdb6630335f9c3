// SPDX-License-Identifier: MIT

//!
//! Margins and paddings
//!

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Errors that can arise when expanding margin/padding shorthand
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoxSidesError {
    #[error("Expected 1 to 4 values, got {0}")]
    InvalidLength(usize),
}

/// A value for each side of a box (e.g. a margin or padding)
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BoxSides {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl BoxSides {
    /// The same value on every side
    pub const fn uniform(value: u32) -> Self {
        BoxSides {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Expand CSS style shorthand:
    ///
    /// - 1 value: all sides
    /// - 2 values: top and bottom, then left and right
    /// - 3 values: top, then left and right, then bottom
    /// - 4 values: top, right, bottom, left
    pub fn from_shorthand(values: &[u32]) -> Result<Self, BoxSidesError> {
        match *values {
            [all] => Ok(BoxSides::uniform(all)),
            [vertical, horizontal] => Ok(BoxSides {
                top: vertical,
                right: horizontal,
                bottom: vertical,
                left: horizontal,
            }),
            [top, horizontal, bottom] => Ok(BoxSides {
                top,
                right: horizontal,
                bottom,
                left: horizontal,
            }),
            [top, right, bottom, left] => Ok(BoxSides {
                top,
                right,
                bottom,
                left,
            }),
            _ => Err(BoxSidesError::InvalidLength(values.len())),
        }
    }

    /// Left plus right.  Widened so no pair of sides can overflow.
    pub fn horizontal(&self) -> u64 {
        u64::from(self.left) + u64::from(self.right)
    }

    /// Top plus bottom
    pub fn vertical(&self) -> u64 {
        u64::from(self.top) + u64::from(self.bottom)
    }
}

/// Margins or paddings as written in settings: a single number or a list of
/// 1 to 4 numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoxSetting {
    Uniform(u32),
    Shorthand(Vec<u32>),
}

impl TryFrom<&BoxSetting> for BoxSides {
    type Error = BoxSidesError;
    fn try_from(value: &BoxSetting) -> Result<Self, Self::Error> {
        match value {
            BoxSetting::Uniform(all) => Ok(BoxSides::uniform(*all)),
            BoxSetting::Shorthand(values) => BoxSides::from_shorthand(values),
        }
    }
}
