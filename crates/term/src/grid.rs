//! RenderGrid: composites independent drawing functions into one board.
//!
//! Each drawing function claims a rectangle of the board at setup time.
//! Claims may not overlap; conflicts and out-of-bounds rectangles are
//! reported by [`RenderGrid::register_region`], so a render pass itself
//! cannot fail.
//!
//! Bounds are inclusive everywhere: a board of width 89 spans columns
//! `0..=89`, and a region from column 3 to column 43 is 41 columns wide.
//!
//! Storage is a region arena plus a dense row-major lookup table holding the
//! owning [`RegionId`] of every cell.

use log::debug;
use thiserror::Error;

use crate::sink::{LineBuffer, LineSink};

/// Drawing function for a region: `(context, row within the region)` to the
/// text of that row, as wide as the region.
pub type RegionFn<G> = Box<dyn Fn(&G, u16) -> String>;

/// Handle of a registered region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(usize);

/// Inclusive cell rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub start_column: u16,
    pub end_column: u16,
    pub start_row: u16,
    pub end_row: u16,
}

impl Rect {
    pub const fn new(start_column: u16, end_column: u16, start_row: u16, end_row: u16) -> Self {
        Self {
            start_column,
            end_column,
            start_row,
            end_row,
        }
    }

    /// Columns covered.
    pub fn width(&self) -> usize {
        usize::from(self.end_column.saturating_sub(self.start_column)) + 1
    }

    /// Rows covered.
    pub fn height(&self) -> usize {
        usize::from(self.end_row.saturating_sub(self.start_row)) + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("region {rect:?} does not fit a board of width {width} and height {height}")]
    OutOfBounds { rect: Rect, width: u16, height: u16 },

    #[error("a region already claims cell ({column}, {row})")]
    RegionConflict { column: u16, row: u16 },
}

struct Region<G> {
    rect: Rect,
    draw: RegionFn<G>,
}

/// Fixed-size board of claimable regions.
pub struct RenderGrid<G> {
    width: u16,
    height: u16,
    regions: Vec<Region<G>>,
    cells: Vec<Option<RegionId>>,
}

impl<G> RenderGrid<G> {
    /// Create an empty grid covering columns `0..=width` and rows `0..=height`.
    pub fn new(width: u16, height: u16) -> Self {
        let len = (usize::from(width) + 1) * (usize::from(height) + 1);
        Self {
            width,
            height,
            regions: Vec::new(),
            cells: vec![None; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    #[inline(always)]
    fn idx(&self, column: u16, row: u16) -> usize {
        usize::from(row) * (usize::from(self.width) + 1) + usize::from(column)
    }

    /// Region owning the cell, if any.
    pub fn owner(&self, column: u16, row: u16) -> Option<RegionId> {
        if column > self.width || row > self.height {
            return None;
        }
        self.cells[self.idx(column, row)]
    }

    /// Rectangle claimed by a region.
    pub fn rect(&self, id: RegionId) -> Option<Rect> {
        self.regions.get(id.0).map(|region| region.rect)
    }

    /// Claim the inclusive rectangle for `draw`.
    ///
    /// Nothing is claimed when this fails.
    pub fn register_region(
        &mut self,
        draw: impl Fn(&G, u16) -> String + 'static,
        start_column: u16,
        end_column: u16,
        start_row: u16,
        end_row: u16,
    ) -> Result<RegionId, GridError> {
        let rect = Rect::new(start_column, end_column, start_row, end_row);
        if start_column > end_column
            || start_row > end_row
            || end_column > self.width
            || end_row > self.height
        {
            return Err(GridError::OutOfBounds {
                rect,
                width: self.width,
                height: self.height,
            });
        }

        for row in start_row..=end_row {
            for column in start_column..=end_column {
                if self.cells[self.idx(column, row)].is_some() {
                    return Err(GridError::RegionConflict { column, row });
                }
            }
        }

        let id = RegionId(self.regions.len());
        for row in start_row..=end_row {
            for column in start_column..=end_column {
                let i = self.idx(column, row);
                self.cells[i] = Some(id);
            }
        }
        self.regions.push(Region {
            rect,
            draw: Box::new(draw),
        });

        debug!("region {:?} claimed {:?}", id, rect);
        Ok(id)
    }

    /// Compose one row into `sink`.
    ///
    /// Unclaimed cells are written as a single blank. A region is drawn
    /// once per row, with the row made relative to its own top edge, and the
    /// walk resumes right after its last column. Rows past the bottom edge
    /// are ignored.
    pub fn render_row(&self, ctx: &G, row: u16, sink: &mut impl LineSink) {
        if row > self.height {
            return;
        }

        let mut column = 0usize;
        while column <= usize::from(self.width) {
            // `column` never exceeds `width`, which is a u16.
            let cell = self.cells[self.idx(column as u16, row)];
            match cell {
                None => {
                    sink.push_str(" ");
                    column += 1;
                }
                Some(id) => {
                    let region = &self.regions[id.0];
                    let text = (region.draw)(ctx, row - region.rect.start_row);
                    sink.push_str(&fit_to_width(text, region.rect.width()));
                    column = usize::from(region.rect.end_column) + 1;
                }
            }
        }
    }

    /// Compose every row, ending each with a line break.
    pub fn render_board(&self, ctx: &G, sink: &mut impl LineSink) {
        for row in 0..=self.height {
            self.render_row(ctx, row, sink);
            sink.end_line();
        }
    }

    /// Convenience helper that renders into a new [`LineBuffer`].
    pub fn render(&self, ctx: &G) -> LineBuffer {
        let mut buf = LineBuffer::new();
        self.render_board(ctx, &mut buf);
        buf
    }
}

/// Pad or cut region text so a misbehaving drawer cannot shift the columns
/// to its right.
fn fit_to_width(mut text: String, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        text = text.chars().take(width).collect();
    } else if len < width {
        text.extend(std::iter::repeat(' ').take(width - len));
    }
    text
}
