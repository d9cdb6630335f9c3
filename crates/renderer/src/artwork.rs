// SPDX-License-Identifier: MIT

//!
//! Tier artwork
//!

use crate::{ResourceError, Size};
use grade_planner_core::Tier;
use image::RgbaImage;
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The artwork drawn in each day's cell, one image per tier
#[derive(Debug, Clone, Default)]
pub struct TierArtwork {
    images: HashMap<Tier, RgbaImage>,
}

/// Where the artwork for `tier` lives: `{directory}/{tier}.png`
pub fn artwork_path<P: AsRef<Path>>(directory: P, tier: &Tier) -> PathBuf {
    directory.as_ref().join(format!("{}.png", tier))
}

impl TierArtwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `{directory}/{tier}.png` for every tier
    pub fn load<P: AsRef<Path>>(directory: P, tiers: &[Tier]) -> Result<Self, ResourceError> {
        let mut artwork = Self::new();
        for tier in tiers {
            let path = artwork_path(&directory, tier);
            let image = image::open(&path)
                .map_err(|source| ResourceError::ArtworkUnreadable {
                    path: path.clone(),
                    source,
                })?
                .into_rgba8();
            debug!(
                "Loaded artwork for {} ({}x{}) from {}",
                tier,
                image.width(),
                image.height(),
                path.display()
            );
            artwork.insert(tier.clone(), image);
        }
        Ok(artwork)
    }

    pub fn insert(&mut self, tier: Tier, image: RgbaImage) {
        self.images.insert(tier, image);
    }

    pub fn get(&self, tier: &Tier) -> Option<&RgbaImage> {
        self.images.get(tier)
    }

    /// The original size of a tier's artwork
    pub fn size_of(&self, tier: &Tier) -> Option<Size> {
        self.get(tier).map(|image| Size {
            width: image.width(),
            height: image.height(),
        })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use grade_planner_core::default_tiers;
    use image::Rgba;
    use tempdir::TempDir;

    #[test]
    fn path() {
        let tier = Tier::from("gold").unwrap();
        assert_eq!(
            artwork_path("placeholders", &tier),
            PathBuf::from("placeholders/gold.png")
        );
    }

    #[test]
    fn load() {
        let dir = TempDir::new("grade-planner-artwork").unwrap();
        let tiers = default_tiers();
        for tier in &tiers {
            RgbaImage::from_pixel(30, 20, Rgba([10, 20, 30, 255]))
                .save(artwork_path(dir.path(), tier))
                .unwrap();
        }
        let artwork = TierArtwork::load(dir.path(), &tiers).unwrap();
        assert_eq!(artwork.len(), 5);
        assert_eq!(
            artwork.size_of(&tiers[2]),
            Some(Size {
                width: 30,
                height: 20
            })
        );
        assert_eq!(artwork.get(&tiers[4]).unwrap().get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn missing_file() {
        let dir = TempDir::new("grade-planner-artwork").unwrap();
        let result = TierArtwork::load(dir.path(), &default_tiers());
        assert!(matches!(result, Err(ResourceError::ArtworkUnreadable { .. })));
    }
}
