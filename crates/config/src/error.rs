// SPDX-License-Identifier: MIT

//!
//! Settings errors
//!

use grade_planner_core::ConfigurationError;
use grade_planner_renderer::{BoxSidesError, ColourError, LayoutError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Unable to read settings `{path}`: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid settings in `{path}`: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid `{field}`: {source}")]
    Colour {
        field: &'static str,
        source: ColourError,
    },

    #[error("Invalid `{field}`: {source}")]
    BoxSides {
        field: &'static str,
        source: BoxSidesError,
    },

    #[error("Unable to create plans directory `{path}`: {source}")]
    PlansDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
