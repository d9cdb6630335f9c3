// SPDX-License-Identifier: MIT

//!
//! The `grade-planner-renderer` engine
//!
//! The engine works out where everything goes.  It never touches pixels:
//! frontends take the [`PlanLayout`] it produces and draw it.
//!

mod box_sides;
mod consts;
mod grid;
mod helpers;
mod layout_spec;
mod point;
mod primitives;

pub(crate) use helpers::*;

pub use box_sides::*;
pub use consts::*;
pub use grid::*;
pub use layout_spec::*;
pub use point::*;
pub use primitives::*;

use crate::{LayoutError, RenderError, ResourceError, TierArtwork, Typeface, colour::Colour};
use chrono::Datelike;
use grade_planner_core::DayAssignment;
use log::{debug, trace, warn};

/// The two typefaces a plan is drawn with
#[derive(Clone, Copy)]
pub struct Fonts<'a> {
    pub header: &'a dyn Typeface,
    pub body: &'a dyn Typeface,
}

impl<'a> Fonts<'a> {
    pub fn get(&self, role: FontRole) -> &'a dyn Typeface {
        match role {
            FontRole::Header => self.header,
            FontRole::Body => self.body,
        }
    }
}

/// Everything a frontend needs to draw a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanLayout {
    pub canvas_size: Size,
    pub background_colour: Colour,
    pub grid: GridDimensions,
    pub icons: Vec<IconOut>,
    pub texts: Vec<TextOut>,
}

/// How a piece of text sits in the box it's given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Centre,
    TopLeft,
}

/// The core `grade-planner-renderer` engine.  Lays out the header and one
/// cell per grid slot, measuring text with the fonts it's given.
pub struct Engine<'a> {
    layout: &'a LayoutSpec,
    fonts: Fonts<'a>,
}

impl<'a> Engine<'a> {
    /// Create a new engine.  Fails if the layout can't produce an image.
    pub fn new(layout: &'a LayoutSpec, fonts: Fonts<'a>) -> Result<Self, LayoutError> {
        layout.validate()?;
        Ok(Self { layout, fonts })
    }

    /// The number of empty cells before the first day (Monday is column 0)
    pub fn leading_blank_days(assignments: &[DayAssignment]) -> Result<u32, LayoutError> {
        let first = assignments.first().ok_or(LayoutError::NoDays)?;
        Ok(first.date.weekday().num_days_from_monday())
    }

    /// The rows and columns needed to show every day
    pub fn grid_dimensions(&self, assignments: &[DayAssignment]) -> Result<GridDimensions, LayoutError> {
        let leading = Self::leading_blank_days(assignments)?;
        let span = day_span(assignments)?;
        Ok(GridDimensions::for_days(leading, span))
    }

    /// The size of the whole image: margins, header, and grid.  Anything
    /// larger than [`MAX_CANVAS_PIXELS`] is rejected.
    pub fn canvas_size(&self, grid: GridDimensions) -> Result<Size, LayoutError> {
        let margins = self.layout.plan_margins;
        let cell = self.layout.cell_size;
        let width = u64::from(margins.left)
            + u64::from(margins.right)
            + u64::from(grid.columns) * u64::from(cell.width);
        let height = u64::from(margins.top)
            + u64::from(margins.bottom)
            + u64::from(self.layout.header_height())
            + u64::from(grid.rows) * u64::from(cell.height);
        if width.saturating_mul(height) > MAX_CANVAS_PIXELS {
            return Err(LayoutError::CanvasTooLarge);
        }
        Ok(Size {
            width: u32::try_from(width).map_err(|_| LayoutError::CanvasTooLarge)?,
            height: u32::try_from(height).map_err(|_| LayoutError::CanvasTooLarge)?,
        })
    }

    /// Where the top left cell of the grid starts
    fn grid_origin(&self) -> Point {
        let margins = self.layout.plan_margins;
        Point {
            x: margins.left,
            y: margins.top.saturating_add(self.layout.header_height()),
        }
    }

    /// Every slot of the grid, row by row.  Days are placed by how far they
    /// fall from the first day, so the grid's size must already have been
    /// checked with [`Engine::canvas_size`].
    pub fn cells<'d>(
        &self,
        assignments: &'d [DayAssignment],
        grid: GridDimensions,
    ) -> Result<Vec<GridCell<'d>>, LayoutError> {
        let leading = Self::leading_blank_days(assignments)?;
        let first_date = assignments[0].date;

        let mut slots: Vec<Option<&DayAssignment>> = vec![None; grid.cell_count() as usize];
        for assignment in assignments {
            let slot = usize::try_from((assignment.date - first_date).num_days())
                .ok()
                .and_then(|offset| offset.checked_add(leading as usize))
                .and_then(|index| slots.get_mut(index));
            match slot {
                Some(slot) => *slot = Some(assignment),
                None => return Err(LayoutError::DaysOutOfOrder),
            }
        }

        let origin = self.grid_origin();
        let cell_size = self.layout.cell_size;
        let cells = slots
            .into_iter()
            .enumerate()
            .map(|(index, assignment)| {
                let index = index as u32;
                let row = index / grid.columns;
                let column = index % grid.columns;
                GridCell {
                    row,
                    column,
                    assignment,
                    bounds: PositionAndSize {
                        position: origin.offset(column * cell_size.width, row * cell_size.height),
                        size: cell_size,
                    },
                }
            })
            .collect();
        Ok(cells)
    }

    /// The area of a cell inside its paddings
    pub fn padded_area(&self, cell: &GridCell) -> PositionAndSize {
        let paddings = self.layout.cell_paddings;
        PositionAndSize {
            position: cell.bounds.position.offset(paddings.left, paddings.top),
            size: self.layout.padded_cell_size(),
        }
    }

    /// The title line and the weekday line
    pub fn headings_for_drawing(&self, header_label: &str) -> Vec<TextOut> {
        let margins = self.layout.plan_margins;
        let cell_width = self.layout.cell_size.width;
        let line_height = self.layout.header_line_height();
        let colour = self.layout.header_text_colour;
        let font_size = self.layout.header_font_size;

        let mut texts = Vec::with_capacity(1 + WEEKDAYS_SHORT.len());
        let title_box = PositionAndSize {
            position: Point {
                x: margins.left,
                y: margins.top,
            },
            size: Size {
                width: cell_width.saturating_mul(COLUMNS),
                height: line_height,
            },
        };
        texts.push(self.text_in_box(header_label, FontRole::Header, colour, font_size, title_box, Anchor::Centre));

        for (column, weekday) in WEEKDAYS_SHORT.iter().enumerate() {
            let weekday_box = PositionAndSize {
                position: Point {
                    x: margins
                        .left
                        .saturating_add((column as u32).saturating_mul(cell_width)),
                    y: margins.top.saturating_add(line_height),
                },
                size: Size {
                    width: cell_width,
                    height: line_height,
                },
            };
            texts.push(self.text_in_box(weekday, FontRole::Header, colour, font_size, weekday_box, Anchor::Centre));
        }
        texts
    }

    /// The artwork for a day, scaled to fit and centred in the cell's padded
    /// area
    pub fn icon_for_cell(&self, cell: &GridCell, artwork: &TierArtwork) -> Result<Option<IconOut>, ResourceError> {
        let Some(assignment) = cell.assignment else {
            return Ok(None);
        };
        let original_size = artwork
            .size_of(&assignment.tier)
            .ok_or_else(|| ResourceError::MissingArtwork(assignment.tier.to_string()))?;
        let area = self.padded_area(cell);
        let size = contain(original_size, area.size);
        Ok(Some(IconOut {
            tier: assignment.tier.clone(),
            position_and_size: PositionAndSize {
                position: centre_in(area, size),
                size,
            },
        }))
    }

    /// The day of the month, drawn over the artwork
    pub fn day_number_for_cell(&self, cell: &GridCell) -> Option<TextOut> {
        let assignment = cell.assignment?;
        let anchor = match self.layout.day_number_position {
            DayNumberPosition::Centre => Anchor::Centre,
            DayNumberPosition::TopLeft => Anchor::TopLeft,
        };
        Some(self.text_in_box(
            &assignment.date.day().to_string(),
            FontRole::Body,
            self.layout.body_text_colour,
            self.layout.body_font_size,
            self.padded_area(cell),
            anchor,
        ))
    }

    /// Lay out a whole plan
    pub fn layout(
        &self,
        assignments: &[DayAssignment],
        header_label: &str,
        artwork: &TierArtwork,
    ) -> Result<PlanLayout, RenderError> {
        let grid = self.grid_dimensions(assignments)?;
        let canvas_size = self.canvas_size(grid)?;
        debug!(
            "Laying out {} days in {} rows on a {}x{} canvas",
            assignments.len(),
            grid.rows,
            canvas_size.width,
            canvas_size.height
        );

        let mut texts = self.headings_for_drawing(header_label);
        let mut icons = Vec::with_capacity(assignments.len());
        for cell in self.cells(assignments, grid)? {
            if cell.is_blank() {
                continue;
            }
            if let Some(icon) = self.icon_for_cell(&cell, artwork)? {
                icons.push(icon);
            }
            if let Some(day_number) = self.day_number_for_cell(&cell) {
                trace!("Day {} at row {} column {}", day_number.text, cell.row, cell.column);
                texts.push(day_number);
            }
        }

        Ok(PlanLayout {
            canvas_size,
            background_colour: self.layout.background_colour,
            grid,
            icons,
            texts,
        })
    }

    /// Measure `text` and position it in `bounds`.  Text that doesn't fit is
    /// pinned to the top left of `bounds` whatever the anchor.
    fn text_in_box(
        &self,
        text: &str,
        font: FontRole,
        colour: Colour,
        font_size: u32,
        bounds: PositionAndSize,
        anchor: Anchor,
    ) -> TextOut {
        let text_size = self.fonts.get(font).measure(font_size, text);
        let top_left = if !text_size.fits_in(bounds.size) {
            warn!(
                "Text `{}` ({}x{}) overflows its {}x{} box",
                text, text_size.width, text_size.height, bounds.size.width, bounds.size.height
            );
            bounds.position
        } else {
            match anchor {
                Anchor::Centre => centre_in(bounds, text_size),
                Anchor::TopLeft => bounds.position,
            }
        };
        TextOut {
            top_left,
            text: text.to_string(),
            colour,
            font_size,
            font,
        }
    }
}

/// The number of days from the first to the last day, inclusive.  Days must
/// be strictly increasing.
fn day_span(assignments: &[DayAssignment]) -> Result<u32, LayoutError> {
    let (first, last) = match (assignments.first(), assignments.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(LayoutError::NoDays),
    };
    if assignments.windows(2).any(|pair| pair[0].date >= pair[1].date) {
        return Err(LayoutError::DaysOutOfOrder);
    }
    let span = (last.date - first.date).num_days() + 1;
    u32::try_from(span).map_err(|_| LayoutError::CanvasTooLarge)
}
