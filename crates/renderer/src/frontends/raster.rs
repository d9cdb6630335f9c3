// SPDX-License-Identifier: MIT

//!
//! The raster frontend
//!
//! Draws a plan into an in-memory RGBA image, ready to be saved as a PNG.
//!

use crate::{
    Engine, Fonts, IconOut, LayoutSpec, PlanLayout, RenderError, ResourceError, Size, TierArtwork,
};
use grade_planner_core::{DayAssignment, Tier};
use image::{RgbaImage, imageops};
use log::{debug, info};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// The fonts and artwork a plan is drawn with
#[derive(Clone, Copy)]
pub struct Resources<'a> {
    pub fonts: Fonts<'a>,
    pub artwork: &'a TierArtwork,
}

/// Lay out and draw a plan
pub fn render(
    assignments: &[DayAssignment],
    layout: &LayoutSpec,
    header_label: &str,
    resources: &Resources,
) -> Result<RgbaImage, RenderError> {
    info!("Rendering {} days ({})", assignments.len(), header_label);
    let engine = Engine::new(layout, resources.fonts)?;
    let plan = engine.layout(assignments, header_label, resources.artwork)?;
    Ok(draw(&plan, resources)?)
}

/// Draw an already laid out plan
pub fn draw(plan: &PlanLayout, resources: &Resources) -> Result<RgbaImage, ResourceError> {
    let Size { width, height } = plan.canvas_size;
    let mut canvas = RgbaImage::from_pixel(width, height, plan.background_colour.into());

    let scaled = scaled_artwork(&plan.icons, resources.artwork)?;
    for icon in &plan.icons {
        let key = (&icon.tier, icon.position_and_size.size);
        if let Some(artwork) = scaled.get(&key) {
            let position = icon.position_and_size.position;
            imageops::overlay(&mut canvas, artwork, i64::from(position.x), i64::from(position.y));
        }
    }

    for text in &plan.texts {
        let typeface = resources.fonts.get(text.font);
        typeface.draw(&mut canvas, text.top_left, text.font_size, &text.text, text.colour);
    }

    debug!("Drew {} icons and {} texts", plan.icons.len(), plan.texts.len());
    Ok(canvas)
}

/// Scale each tier's artwork once for every size it's drawn at.  Every cell
/// of a tier shares the same entry.
pub fn scaled_artwork<'a>(
    icons: &'a [IconOut],
    artwork: &TierArtwork,
) -> Result<HashMap<(&'a Tier, Size), RgbaImage>, ResourceError> {
    let mut scaled = HashMap::new();
    for icon in icons {
        let size = icon.position_and_size.size;
        if size.is_empty() {
            continue;
        }
        if let Entry::Vacant(entry) = scaled.entry((&icon.tier, size)) {
            let original = artwork
                .get(&icon.tier)
                .ok_or_else(|| ResourceError::MissingArtwork(icon.tier.to_string()))?;
            debug!(
                "Scaling {} artwork from {}x{} to {}x{}",
                icon.tier,
                original.width(),
                original.height(),
                size.width,
                size.height
            );
            entry.insert(scale(original, size));
        }
    }
    Ok(scaled)
}

/// Resize artwork, skipping the work when it's already the right size
fn scale(original: &RgbaImage, size: Size) -> RgbaImage {
    if original.dimensions() == (size.width, size.height) {
        return original.clone();
    }
    imageops::resize(original, size.width, size.height, imageops::FilterType::Lanczos3)
}
