// SPDX-License-Identifier: MIT

//!
//! Layout spec
//!

use crate::{
    BoxSides, Colour, DEFAULT_CELL_SIZE, DEFAULT_FONT_SIZE, HEADER_LINE_SPACING, HEADER_LINES,
    LayoutError, Size,
};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Where a day's number is drawn within the padded area of its cell
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayNumberPosition {
    #[default]
    #[serde(rename = "center", alias = "centre")]
    Centre,
    #[serde(rename = "top-left")]
    TopLeft,
}

/// Everything that controls how a plan is laid out and coloured.  Built once
/// from settings, then only read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutSpec {
    pub header_font_size: u32,
    pub body_font_size: u32,
    pub header_text_colour: Colour,
    pub body_text_colour: Colour,
    pub background_colour: Colour,

    /// Space between the edges of the image and the plan
    pub plan_margins: BoxSides,

    /// Space between the edges of a cell and its artwork
    pub cell_paddings: BoxSides,

    /// The size of every day cell
    pub cell_size: Size,

    pub day_number_position: DayNumberPosition,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        LayoutSpec {
            header_font_size: DEFAULT_FONT_SIZE,
            body_font_size: DEFAULT_FONT_SIZE,
            header_text_colour: Colour::from_rgb(255, 255, 255),
            body_text_colour: Colour::from_rgb(255, 255, 255),
            background_colour: Colour::from_rgb(0, 0, 0),
            plan_margins: BoxSides {
                top: 0,
                right: 50,
                bottom: 0,
                left: 50,
            },
            cell_paddings: BoxSides::uniform(0),
            cell_size: Size {
                width: DEFAULT_CELL_SIZE,
                height: DEFAULT_CELL_SIZE,
            },
            day_number_position: DayNumberPosition::Centre,
        }
    }
}

impl LayoutSpec {
    /// Reject specs that can't produce a sensible image
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.cell_size.is_empty() {
            return Err(LayoutError::ZeroCellSize(self.cell_size));
        }
        if self.header_font_size == 0 || self.body_font_size == 0 {
            return Err(LayoutError::ZeroFontSize);
        }
        if self.cell_paddings.horizontal() >= u64::from(self.cell_size.width)
            || self.cell_paddings.vertical() >= u64::from(self.cell_size.height)
        {
            return Err(LayoutError::PaddingsTooLarge {
                paddings: self.cell_paddings,
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }

    /// The area of a cell left once its paddings are removed
    pub fn padded_cell_size(&self) -> Size {
        Size {
            width: remaining(self.cell_size.width, self.cell_paddings.horizontal()),
            height: remaining(self.cell_size.height, self.cell_paddings.vertical()),
        }
    }

    /// The height of a single header line
    pub fn header_line_height(&self) -> u32 {
        self.header_font_size.saturating_add(HEADER_LINE_SPACING)
    }

    /// The height of the whole header (title line and weekday line)
    pub fn header_height(&self) -> u32 {
        self.header_line_height().saturating_mul(HEADER_LINES)
    }
}

/// What's left of `length` once `taken` is removed (never less than zero)
fn remaining(length: u32, taken: u64) -> u32 {
    // The result is at most `length`, so it always fits back in a `u32`
    u64::from(length).saturating_sub(taken) as u32
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(LayoutSpec::default().validate().is_ok());
    }

    #[test]
    fn validate() {
        let mut spec = LayoutSpec::default();
        spec.cell_size = Size {
            width: 0,
            height: 360,
        };
        assert!(matches!(spec.validate(), Err(LayoutError::ZeroCellSize(_))));

        let mut spec = LayoutSpec::default();
        spec.body_font_size = 0;
        assert_eq!(spec.validate(), Err(LayoutError::ZeroFontSize));

        let mut spec = LayoutSpec::default();
        spec.cell_paddings = BoxSides::uniform(180);
        assert!(matches!(
            spec.validate(),
            Err(LayoutError::PaddingsTooLarge { .. })
        ));

        let mut spec = LayoutSpec::default();
        spec.cell_paddings = BoxSides::from_shorthand(&[10, 179]).unwrap();
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn huge_paddings_are_rejected() {
        // Left and right alone overflow a u32 when added
        let mut spec = LayoutSpec::default();
        spec.cell_paddings = BoxSides::from_shorthand(&[0, 3_000_000_000]).unwrap();
        assert!(matches!(
            spec.validate(),
            Err(LayoutError::PaddingsTooLarge { .. })
        ));

        // Two halves of 2^32, which would wrap around to 0
        let mut spec = LayoutSpec::default();
        spec.cell_paddings = BoxSides::from_shorthand(&[2_147_483_648, 2_147_483_648]).unwrap();
        assert!(matches!(
            spec.validate(),
            Err(LayoutError::PaddingsTooLarge { .. })
        ));
        assert_eq!(spec.padded_cell_size(), Size::default());
    }

    #[test]
    fn padded_cell_size() {
        let mut spec = LayoutSpec::default();
        spec.cell_paddings = BoxSides::from_shorthand(&[10, 20, 30]).unwrap();
        assert_eq!(
            spec.padded_cell_size(),
            Size {
                width: 320,
                height: 320
            }
        );
    }

    #[test]
    fn header_height() {
        let spec = LayoutSpec::default();
        assert_eq!(spec.header_line_height(), 128);
        assert_eq!(spec.header_height(), 256);
    }
}
