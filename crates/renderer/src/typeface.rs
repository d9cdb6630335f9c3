// SPDX-License-Identifier: MIT

//!
//! Measuring and drawing text
//!

use crate::{Point, ResourceError, Size, colour::Colour};
use ab_glyph::{Font, FontVec, Glyph, PxScale, ScaleFont, point};
use image::RgbaImage;
use log::debug;
use std::path::Path;

/// Something that can measure and draw a line of text.  The engine only ever
/// measures; frontends draw.
pub trait Typeface {
    /// The size of the box `text` occupies at `size_px`
    fn measure(&self, size_px: u32, text: &str) -> Size;

    /// Draw `text` with the top left of its box at `top_left`.  Anything
    /// falling outside the canvas is dropped.
    fn draw(&self, canvas: &mut RgbaImage, top_left: Point, size_px: u32, text: &str, colour: Colour);
}

/// A TrueType/OpenType font loaded from disk
pub struct FontFile {
    font: FontVec,
}

impl FontFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| ResourceError::FontUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontVec::try_from_vec(data)
            .map_err(|_| ResourceError::InvalidFont(path.to_path_buf()))?;
        debug!("Loaded font {}", path.display());
        Ok(Self { font })
    }

    /// Position every glyph of `text` on a baseline at `origin`
    fn layout_glyphs(&self, size_px: u32, text: &str, origin: (f32, f32)) -> (Vec<Glyph>, f32) {
        let scaled = self.font.as_scaled(PxScale::from(size_px as f32));
        let mut caret = origin.0;
        let mut previous: Option<Glyph> = None;
        let mut glyphs = Vec::with_capacity(text.len());
        for c in text.chars() {
            let mut glyph = scaled.scaled_glyph(c);
            if let Some(previous) = previous.take() {
                caret += scaled.kern(previous.id, glyph.id);
            }
            glyph.position = point(caret, origin.1);
            caret += scaled.h_advance(glyph.id);
            previous = Some(glyph.clone());
            glyphs.push(glyph);
        }
        (glyphs, caret - origin.0)
    }
}

impl Typeface for FontFile {
    fn measure(&self, size_px: u32, text: &str) -> Size {
        let scaled = self.font.as_scaled(PxScale::from(size_px as f32));
        let (_, width) = self.layout_glyphs(size_px, text, (0.0, 0.0));
        Size {
            width: width.ceil().max(0.0) as u32,
            height: (scaled.ascent() - scaled.descent()).ceil().max(0.0) as u32,
        }
    }

    fn draw(&self, canvas: &mut RgbaImage, top_left: Point, size_px: u32, text: &str, colour: Colour) {
        let scaled = self.font.as_scaled(PxScale::from(size_px as f32));
        let baseline = top_left.y as f32 + scaled.ascent();
        let (glyphs, _) = self.layout_glyphs(size_px, text, (top_left.x as f32, baseline));
        let (width, height) = canvas.dimensions();
        for glyph in glyphs {
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|x, y, coverage| {
                let x = bounds.min.x as i64 + i64::from(x);
                let y = bounds.min.y as i64 + i64::from(y);
                if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
                    return;
                }
                colour.blend_onto(canvas.get_pixel_mut(x as u32, y as u32), coverage);
            });
        }
    }
}

#[cfg(test)]
pub(crate) mod test_typeface {
    use super::*;

    /// Draws every character as a solid square `size_px` wide
    pub(crate) struct BlockTypeface;

    impl Typeface for BlockTypeface {
        fn measure(&self, size_px: u32, text: &str) -> Size {
            Size {
                width: size_px * text.chars().count() as u32,
                height: size_px,
            }
        }

        fn draw(&self, canvas: &mut RgbaImage, top_left: Point, size_px: u32, text: &str, colour: Colour) {
            let size = self.measure(size_px, text);
            for y in top_left.y..(top_left.y + size.height).min(canvas.height()) {
                for x in top_left.x..(top_left.x + size.width).min(canvas.width()) {
                    colour.blend_onto(canvas.get_pixel_mut(x, y), 1.0);
                }
            }
        }
    }
}
