// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

use crate::{Point, PositionAndSize, Size};

/// Integer division rounding up
pub(crate) fn ceiling_div(value: u32, divisor: u32) -> u32 {
    value.div_ceil(divisor)
}

/// Scale `size` to fit inside `bounds` while keeping its aspect ratio.  One
/// side always matches `bounds` exactly; the other is rounded to the nearest
/// pixel.
pub(crate) fn contain(size: Size, bounds: Size) -> Size {
    if size.is_empty() || bounds.is_empty() {
        return Size::default();
    }
    let (width, height) = (u64::from(size.width), u64::from(size.height));
    let (max_width, max_height) = (u64::from(bounds.width), u64::from(bounds.height));

    // Compare width/height against max_width/max_height without dividing
    if width * max_height > height * max_width {
        let scaled_height = (height * max_width + width / 2) / width;
        Size {
            width: bounds.width,
            height: (scaled_height as u32).max(1),
        }
    } else {
        let scaled_width = (width * max_height + height / 2) / height;
        Size {
            width: (scaled_width as u32).max(1),
            height: bounds.height,
        }
    }
}

/// The top left position that centres something of size `inner` within
/// `outer`.  Anything too big is pinned to the top left of `outer`.
pub(crate) fn centre_in(outer: PositionAndSize, inner: Size) -> Point {
    outer.position.offset(
        outer.size.width.saturating_sub(inner.width) / 2,
        outer.size.height.saturating_sub(inner.height) / 2,
    )
}
