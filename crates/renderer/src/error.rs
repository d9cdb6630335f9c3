// SPDX-License-Identifier: MIT

//!
//! Errors raised while rendering a plan
//!

use crate::{BoxSides, Size};
use std::path::PathBuf;
use thiserror::Error;

/// A font or a tier's artwork is missing or unusable
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Unable to read font `{path}`: {source}")]
    FontUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("`{0}` is not a usable TrueType/OpenType font")]
    InvalidFont(PathBuf),

    #[error("Unable to load artwork `{path}`: {source}")]
    ArtworkUnreadable {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("No artwork loaded for tier `{0}`")]
    MissingArtwork(String),
}

/// The layout can't produce a sensible image
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Cell size must be positive, got {}x{}", .0.width, .0.height)]
    ZeroCellSize(Size),

    #[error("Font sizes must be positive")]
    ZeroFontSize,

    #[error(
        "Paddings {paddings:?} leave no room inside a {}x{} cell",
        cell_size.width,
        cell_size.height
    )]
    PaddingsTooLarge { paddings: BoxSides, cell_size: Size },

    #[error("The image would be too large to create")]
    CanvasTooLarge,

    #[error("There are no days to draw")]
    NoDays,

    #[error("Days must be in date order without repeats")]
    DaysOutOfOrder,
}

/// Any error raised while rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
