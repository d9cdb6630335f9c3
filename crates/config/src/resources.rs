// SPDX-License-Identifier: MIT

//!
//! Loading the fonts and artwork named in the settings
//!

use crate::Settings;
use grade_planner_core::Tier;
use grade_planner_renderer::{FontFile, Fonts, ResourceError, Resources, TierArtwork};
use log::info;

/// Fonts and artwork read from disk, owned for the length of a render
pub struct LoadedResources {
    pub header_font: FontFile,
    pub body_font: FontFile,
    pub artwork: TierArtwork,
}

impl LoadedResources {
    /// Borrow everything in the form the renderer takes
    pub fn resources(&self) -> Resources<'_> {
        Resources {
            fonts: Fonts {
                header: &self.header_font,
                body: &self.body_font,
            },
            artwork: &self.artwork,
        }
    }
}

impl Settings {
    /// Load both fonts, and the artwork for every tier in `tiers`
    pub fn load_resources(&self, tiers: &[Tier]) -> Result<LoadedResources, ResourceError> {
        let paths = &self.paths;
        info!(
            "Loading fonts {} and {}",
            paths.header_font.display(),
            paths.body_font.display()
        );
        let header_font = FontFile::load(&paths.header_font)?;
        let body_font = FontFile::load(&paths.body_font)?;

        info!("Loading artwork for {} tiers from {}", tiers.len(), paths.placeholders.display());
        let artwork = TierArtwork::load(&paths.placeholders, tiers)?;

        Ok(LoadedResources {
            header_font,
            body_font,
            artwork,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use grade_planner_core::default_tiers;
    use tempdir::TempDir;

    #[test]
    fn missing_fonts() {
        let dir = TempDir::new("grade-planner-resources").unwrap();
        let mut settings = Settings::default();
        settings.resolve_paths(dir.path());
        assert!(matches!(
            settings.load_resources(&default_tiers()),
            Err(ResourceError::FontUnreadable { path, .. }) if path == dir.path().join("fonts/OpenSans-Bold.ttf")
        ));
    }
}
