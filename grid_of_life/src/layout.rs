// layout.rs - Mapping between window pixels and grid cells

use crate::error::{Error, Result};

/// Integer pixel rectangle: top-left corner plus size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl CellRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The pixel at the middle of the rectangle, rounded towards the origin.
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        let (left, top) = (i64::from(self.x), i64::from(self.y));
        x >= left && x < left + i64::from(self.w) && y >= top && y < top + i64::from(self.h)
    }
}

/// A straight separator line between two pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// Where each grid cell sits on screen.
///
/// Only layout parameters are stored here; anything that needs cell states
/// takes the [`Grid`](crate::Grid) as an argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    background: CellRect,
    viewport: CellRect,
    rows: usize,
    columns: usize,
    cell_width: i32,
    cell_height: i32,
}

impl Layout {
    /// Splits `viewport` evenly into `rows x columns` cells.
    ///
    /// Cell sizes are truncated, so the cells may leave a strip of unused
    /// pixels along the right and bottom edges of the viewport.
    pub fn new(viewport: CellRect, rows: usize, columns: usize) -> Result<Self> {
        Self::with_background(viewport, viewport, rows, columns)
    }

    /// Places the grid inside a window-sized `background` rectangle.
    ///
    /// The grid is a square spanning 20% to 80% of the background's shorter
    /// side, measured from the background's top-left corner on both axes.
    pub fn from_background(background: CellRect, rows: usize, columns: usize) -> Result<Self> {
        let side = f64::from(background.w.min(background.h));
        let near = (0.2 * side) as i32;
        let far = (0.8 * side) as i32;
        let off_screen = Error::InvalidViewport {
            width: background.w,
            height: background.h,
        };
        let viewport = CellRect::new(
            background.x.checked_add(near).ok_or(off_screen)?,
            background.y.checked_add(near).ok_or(off_screen)?,
            far - near,
            far - near,
        );
        Self::with_background(background, viewport, rows, columns)
    }

    fn with_background(
        background: CellRect,
        viewport: CellRect,
        rows: usize,
        columns: usize,
    ) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::InvalidDimensions { rows, columns });
        }
        let too_small = Error::InvalidViewport {
            width: viewport.w,
            height: viewport.h,
        };
        let columns_px = i32::try_from(columns).map_err(|_| too_small)?;
        let rows_px = i32::try_from(rows).map_err(|_| too_small)?;
        let cell_width = viewport.w / columns_px;
        let cell_height = viewport.h / rows_px;
        if cell_width <= 0 || cell_height <= 0 {
            return Err(too_small);
        }
        // Every pixel coordinate derived later stays below the far edges.
        for rect in [background, viewport] {
            if rect.x.checked_add(rect.w).is_none() || rect.y.checked_add(rect.h).is_none() {
                return Err(Error::InvalidViewport {
                    width: rect.w,
                    height: rect.h,
                });
            }
        }
        Ok(Self {
            background,
            viewport,
            rows,
            columns,
            cell_width,
            cell_height,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The whole window area behind the grid.
    pub fn background(&self) -> CellRect {
        self.background
    }

    /// The rectangle the grid is laid out in.
    pub fn viewport(&self) -> CellRect {
        self.viewport
    }

    /// Width and height of one cell in pixels.
    pub fn cell_size(&self) -> (i32, i32) {
        (self.cell_width, self.cell_height)
    }

    /// Screen rectangle of the cell at `(row, col)`.
    pub fn rect_for_cell(&self, row: usize, col: usize) -> Result<CellRect> {
        if row < self.rows && col < self.columns {
            Ok(self.cell_rect(row, col))
        } else {
            Err(Error::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    /// Callers must have checked `row < rows` and `col < columns`; both then
    /// fit in `i32` because every cell is at least one pixel wide.
    pub(crate) fn cell_rect(&self, row: usize, col: usize) -> CellRect {
        CellRect::new(
            self.viewport.x + col as i32 * self.cell_width,
            self.viewport.y + row as i32 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// The `(row, col)` of the cell under pixel `(x, y)`.
    ///
    /// Returns `None` outside the viewport (whose right and bottom edges are
    /// exclusive) and inside the untiled strip left over by truncating the
    /// cell size.
    pub fn cell_for_point(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        if !self.viewport.contains(x, y) {
            return None;
        }
        let row = ((y - self.viewport.y) / self.cell_height) as usize;
        let col = ((x - self.viewport.x) / self.cell_width) as usize;
        (row < self.rows && col < self.columns).then_some((row, col))
    }

    /// Separator lines between neighbouring rows and columns.
    ///
    /// The `rows - 1` horizontal lines come first, top to bottom, followed by
    /// the `columns - 1` vertical lines, left to right. Each spans the tiled
    /// area only.
    pub fn grid_lines(&self) -> Vec<LineSegment> {
        let CellRect { x, y, .. } = self.viewport;
        let right = x + self.columns as i32 * self.cell_width;
        let bottom = y + self.rows as i32 * self.cell_height;

        let horizontal = (1..self.rows).map(|r| {
            let line_y = y + r as i32 * self.cell_height;
            LineSegment {
                x1: x,
                y1: line_y,
                x2: right,
                y2: line_y,
            }
        });
        let vertical = (1..self.columns).map(|c| {
            let line_x = x + c as i32 * self.cell_width;
            LineSegment {
                x1: line_x,
                y1: y,
                x2: line_x,
                y2: bottom,
            }
        });
        horizontal.chain(vertical).collect()
    }
}
