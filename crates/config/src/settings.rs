// SPDX-License-Identifier: MIT

//!
//! The settings file
//!

use crate::SettingsError;
use grade_planner_core::{DateRange, Tier, default_tiers, ensure_valid_tier_list};
use grade_planner_renderer::{
    BoxSetting, BoxSides, Colour, ColourSetting, DEFAULT_CELL_SIZE, DEFAULT_FONT_SIZE,
    DayNumberPosition, LayoutSpec, Size,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The settings file used when none is given
pub const DEFAULT_SETTINGS_FILE: &str = "settings.toml";

/// Everything in `settings.toml`.  Anything left out takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub paths: PathSettings,
    pub customization: Customization,
    pub plan: PlanSettings,
}

/// Where fonts and artwork are read from and where plans are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathSettings {
    pub header_font: PathBuf,
    pub body_font: PathBuf,

    /// Directory holding one `{tier}.png` per tier
    pub placeholders: PathBuf,

    /// Directory plans are saved to (created if missing)
    pub plans: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        PathSettings {
            header_font: PathBuf::from("fonts/OpenSans-Bold.ttf"),
            body_font: PathBuf::from("fonts/OpenSans-Regular.ttf"),
            placeholders: PathBuf::from("images"),
            plans: PathBuf::from("plans"),
        }
    }
}

/// How a plan looks, as written in the settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Customization {
    pub header_font_size: u32,
    pub body_font_size: u32,
    pub header_text_color: ColourSetting,
    pub body_text_color: ColourSetting,
    pub background_color: ColourSetting,
    pub plan_margins: BoxSetting,
    pub cell_paddings: BoxSetting,
    pub cell_size: [u32; 2],
    pub day_number_position: DayNumberPosition,
}

impl Default for Customization {
    fn default() -> Self {
        Customization {
            header_font_size: DEFAULT_FONT_SIZE,
            body_font_size: DEFAULT_FONT_SIZE,
            header_text_color: ColourSetting::Text("white".to_string()),
            body_text_color: ColourSetting::Text("white".to_string()),
            background_color: ColourSetting::Text("black".to_string()),
            plan_margins: BoxSetting::Shorthand(vec![0, 50]),
            cell_paddings: BoxSetting::Uniform(0),
            cell_size: [DEFAULT_CELL_SIZE, DEFAULT_CELL_SIZE],
            day_number_position: DayNumberPosition::Centre,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanSettings {
    /// Lowest tier first
    pub tiers: Vec<Tier>,
}

impl Default for PlanSettings {
    fn default() -> Self {
        PlanSettings {
            tiers: default_tiers(),
        }
    }
}

impl Settings {
    /// Read a settings file.  Relative paths in it are taken to be relative
    /// to the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        info!("Loading settings from {}", path.display());
        let data = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings = Self::from_toml(&data).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(directory) = path.parent() {
            settings.resolve_paths(directory);
        }
        debug!("Settings loaded = {settings:?}");
        Ok(settings)
    }

    /// Read a settings file if there is one, otherwise use the defaults
    /// (relative to the working directory)
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            info!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    /// Make every relative path relative to `directory` instead
    pub fn resolve_paths<P: AsRef<Path>>(&mut self, directory: P) {
        let directory = directory.as_ref();
        let paths = &mut self.paths;
        for path in [
            &mut paths.header_font,
            &mut paths.body_font,
            &mut paths.placeholders,
            &mut paths.plans,
        ] {
            if path.is_relative() {
                *path = directory.join(&*path);
            }
        }
    }

    /// The settings' customisation, normalised and checked
    pub fn layout_spec(&self) -> Result<LayoutSpec, SettingsError> {
        let custom = &self.customization;
        let layout = LayoutSpec {
            header_font_size: custom.header_font_size,
            body_font_size: custom.body_font_size,
            header_text_colour: colour("header_text_color", &custom.header_text_color)?,
            body_text_colour: colour("body_text_color", &custom.body_text_color)?,
            background_colour: colour("background_color", &custom.background_color)?,
            plan_margins: box_sides("plan_margins", &custom.plan_margins)?,
            cell_paddings: box_sides("cell_paddings", &custom.cell_paddings)?,
            cell_size: Size::from(custom.cell_size),
            day_number_position: custom.day_number_position,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// The configured tiers, checked for emptiness and duplicates
    pub fn tiers(&self) -> Result<Vec<Tier>, SettingsError> {
        ensure_valid_tier_list(&self.plan.tiers)?;
        Ok(self.plan.tiers.clone())
    }

    /// Where the plan for `date_range` is saved.  Creates the plans directory
    /// if it doesn't exist yet.
    pub fn plan_file_path(&self, date_range: &DateRange) -> Result<PathBuf, SettingsError> {
        let directory = &self.paths.plans;
        if !directory.is_dir() {
            info!("Creating plans directory {}", directory.display());
            fs::create_dir_all(directory).map_err(|source| SettingsError::PlansDirectory {
                path: directory.clone(),
                source,
            })?;
        }
        Ok(directory.join(plan_file_name(date_range)))
    }
}

/// The name a plan is saved under, e.g. `Plan May-June 2024.png`
pub fn plan_file_name(date_range: &DateRange) -> String {
    format!("Plan {}.png", date_range.label())
}

fn colour(field: &'static str, setting: &ColourSetting) -> Result<Colour, SettingsError> {
    Colour::try_from(setting).map_err(|source| SettingsError::Colour { field, source })
}

fn box_sides(field: &'static str, setting: &BoxSetting) -> Result<BoxSides, SettingsError> {
    BoxSides::try_from(setting).map_err(|source| SettingsError::BoxSides { field, source })
}

#[cfg(test)]
mod test {
    use super::*;
    use grade_planner_core::ConfigurationError;
    use grade_planner_renderer::{ColourError, LayoutError};
    use tempdir::TempDir;

    const FULL: &str = r##"
        [paths]
        header_font = "fonts/Header.ttf"
        body_font = "/usr/share/fonts/Body.ttf"
        placeholders = "art"
        plans = "out"

        [customization]
        header_font_size = 96
        body_font_size = 72
        header_text_color = "Gold"
        body_text_color = [10, 20, 30]
        background_color = "#102030"
        plan_margins = [10, 20, 30]
        cell_paddings = 8
        cell_size = [300, 200]
        day_number_position = "top-left"

        [plan]
        tiers = ["copper", "jade"]
    "##;

    #[test]
    fn defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.layout_spec().unwrap(), LayoutSpec::default());
        assert_eq!(settings.tiers().unwrap(), default_tiers());
    }

    #[test]
    fn partial() {
        let settings = Settings::from_toml("[customization]\nbody_font_size = 50\n").unwrap();
        assert_eq!(settings.customization.body_font_size, 50);
        assert_eq!(settings.customization.header_font_size, DEFAULT_FONT_SIZE);
        assert_eq!(settings.paths, PathSettings::default());
    }

    #[test]
    fn full() {
        let settings = Settings::from_toml(FULL).unwrap();
        let layout = settings.layout_spec().unwrap();
        assert_eq!(layout.header_font_size, 96);
        assert_eq!(layout.body_font_size, 72);
        assert_eq!(layout.header_text_colour, Colour::from_rgb(255, 215, 0));
        assert_eq!(layout.body_text_colour, Colour::from_rgb(10, 20, 30));
        assert_eq!(layout.background_colour, Colour::from_rgb(16, 32, 48));
        assert_eq!(layout.plan_margins, BoxSides::from_shorthand(&[10, 20, 30]).unwrap());
        assert_eq!(layout.cell_paddings, BoxSides::uniform(8));
        assert_eq!(
            layout.cell_size,
            Size {
                width: 300,
                height: 200
            }
        );
        assert_eq!(layout.day_number_position, DayNumberPosition::TopLeft);

        let tiers = settings.tiers().unwrap();
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers[1].as_str(), "jade");
    }

    #[test]
    fn invalid_values() {
        let settings = Settings::from_toml("[customization]\nbackground_color = \"blurple\"\n").unwrap();
        assert!(matches!(
            settings.layout_spec(),
            Err(SettingsError::Colour {
                field: "background_color",
                source: ColourError::UnknownName(_)
            })
        ));

        let settings = Settings::from_toml("[customization]\nplan_margins = [1, 2, 3, 4, 5]\n").unwrap();
        assert!(matches!(
            settings.layout_spec(),
            Err(SettingsError::BoxSides {
                field: "plan_margins",
                ..
            })
        ));

        let settings = Settings::from_toml("[customization]\ncell_paddings = [200, 0]\n").unwrap();
        assert!(matches!(
            settings.layout_spec(),
            Err(SettingsError::Layout(LayoutError::PaddingsTooLarge { .. }))
        ));

        // Paddings whose sum doesn't fit in a u32
        let settings = Settings::from_toml("[customization]\ncell_paddings = [0, 3000000000]\n").unwrap();
        assert!(matches!(
            settings.layout_spec(),
            Err(SettingsError::Layout(LayoutError::PaddingsTooLarge { .. }))
        ));

        let settings = Settings::from_toml("[plan]\ntiers = [\"ash\", \"ash\"]\n").unwrap();
        assert!(matches!(
            settings.tiers(),
            Err(SettingsError::Configuration(ConfigurationError::DuplicateTier(_)))
        ));

        let settings = Settings::from_toml("[plan]\ntiers = []\n").unwrap();
        assert!(matches!(
            settings.tiers(),
            Err(SettingsError::Configuration(ConfigurationError::NoTiers))
        ));
    }

    #[test]
    fn rejected_toml() {
        // Typos aren't silently ignored
        assert!(Settings::from_toml("[customization]\nbackground_colour = \"red\"\n").is_err());

        // Nor are blank tier names
        assert!(Settings::from_toml("[plan]\ntiers = [\"  \"]\n").is_err());
    }

    #[test]
    fn load_resolves_paths() {
        let dir = TempDir::new("grade-planner-settings").unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, FULL).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.paths.header_font, dir.path().join("fonts/Header.ttf"));
        assert_eq!(settings.paths.body_font, PathBuf::from("/usr/share/fonts/Body.ttf"));
        assert_eq!(settings.paths.placeholders, dir.path().join("art"));
        assert_eq!(settings.paths.plans, dir.path().join("out"));
    }

    #[test]
    fn load_errors() {
        let dir = TempDir::new("grade-planner-settings").unwrap();
        let path = dir.path().join("settings.toml");
        assert!(matches!(Settings::load(&path), Err(SettingsError::Read { .. })));
        assert_eq!(Settings::load_or_default(&path).unwrap(), Settings::default());

        fs::write(&path, "[customization\n").unwrap();
        assert!(matches!(Settings::load(&path), Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn plan_file() {
        let dir = TempDir::new("grade-planner-settings").unwrap();
        let mut settings = Settings::default();
        settings.resolve_paths(dir.path());
        assert!(!settings.paths.plans.exists());

        let range = DateRange::starting_in(2024, 5).unwrap();
        let path = settings.plan_file_path(&range).unwrap();
        assert_eq!(path, dir.path().join("plans").join("Plan May-June 2024.png"));
        assert!(settings.paths.plans.is_dir());
    }
}
