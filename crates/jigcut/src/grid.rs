use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geom::{Point, Rect, point, rect};

pub const GRID_MIN: u32 = 2;
pub const GRID_MAX: u32 = 20;

/// Row/column count of a puzzle, validated to `2..=20` on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridSize {
    rows: u32,
    cols: u32,
}

impl GridSize {
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        let ok = |n: u32| (GRID_MIN..=GRID_MAX).contains(&n);
        if !ok(rows) || !ok(cols) {
            return Err(Error::InvalidGridSize { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(self) -> usize {
        self.rows as usize
    }

    pub fn cols(self) -> usize {
        self.cols as usize
    }

    pub fn piece_count(self) -> usize {
        self.rows() * self.cols()
    }

    /// Row-major piece index.
    pub fn piece_index(self, row: usize, col: usize) -> usize {
        row * self.cols() + col
    }
}

impl<'de> Deserialize<'de> for GridSize {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            rows: u32,
            cols: u32,
        }
        let raw = Raw::deserialize(deserializer)?;
        GridSize::new(raw.rows, raw.cols).map_err(serde::de::Error::custom)
    }
}

/// Placement of a grid over an image of `width x height` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridLayout {
    grid: GridSize,
    width: f64,
    height: f64,
    snap_to_pixels: bool,
}

impl GridLayout {
    pub fn new(grid: GridSize, width: f64, height: f64, snap_to_pixels: bool) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(Error::InvalidImageSize { width, height });
        }
        Ok(Self {
            grid,
            width,
            height,
            snap_to_pixels,
        })
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Nominal (unrounded) cell width.
    pub fn cell_width(&self) -> f64 {
        self.width / self.grid.cols() as f64
    }

    /// Nominal (unrounded) cell height.
    pub fn cell_height(&self) -> f64 {
        self.height / self.grid.rows() as f64
    }

    /// Largest transverse knob excursion any edge may make. Derived from the nominal cell so
    /// every edge of the grid shares the same bound.
    pub fn max_excursion(&self) -> f64 {
        0.5 * self.cell_width().min(self.cell_height())
    }

    /// X coordinate of the vertical grid line `col` (`0..=cols`).
    pub fn column_x(&self, col: usize) -> f64 {
        if col >= self.grid.cols() {
            return self.width;
        }
        self.snap(col as f64 * self.cell_width())
    }

    /// Y coordinate of the horizontal grid line `row` (`0..=rows`).
    pub fn row_y(&self, row: usize) -> f64 {
        if row >= self.grid.rows() {
            return self.height;
        }
        self.snap(row as f64 * self.cell_height())
    }

    pub fn corner(&self, row: usize, col: usize) -> Point {
        point(self.column_x(col), self.row_y(row))
    }

    /// Cell rectangle before knob overflow.
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let x = self.column_x(col);
        let y = self.row_y(row);
        rect(x, y, self.column_x(col + 1) - x, self.row_y(row + 1) - y)
    }

    fn snap(&self, v: f64) -> f64 {
        if self.snap_to_pixels { v.round() } else { v }
    }
}

impl<'de> Deserialize<'de> for GridLayout {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            grid: GridSize,
            width: f64,
            height: f64,
            snap_to_pixels: bool,
        }
        let raw = Raw::deserialize(deserializer)?;
        GridLayout::new(raw.grid, raw.width, raw.height, raw.snap_to_pixels)
            .map_err(serde::de::Error::custom)
    }
}
