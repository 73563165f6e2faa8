//! Closed piece outlines stitched from four synthesized edges.

use serde::{Deserialize, Serialize};

use crate::edge::EdgeGrids;
use crate::error::Result;
use crate::geom::Rect;
use crate::grid::GridLayout;
use crate::path::{Path, SubPath};
use crate::synth::Synthesizer;

/// One grid cell's outline. `bounds` is the cell before knob overflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub row: usize,
    pub col: usize,
    /// Row-major index, `row * cols + col`.
    pub index: usize,
    pub bounds: Rect,
    pub path: Path,
}

impl Piece {
    /// Cell bounds grown by `margin` on every side, so a crop keeps the knobs.
    pub fn export_bounds(&self, margin: f64) -> Rect {
        self.bounds.inflate(margin, margin)
    }
}

/// Closed outline of cell `(row, col)`: top and right edges forward, bottom and left edges
/// mirrored and walked backwards. The path ends exactly on its start corner.
///
/// Fails with [`crate::Error::EdgeGridMismatch`] when the grids lack a slot the cell needs.
pub fn assemble(
    row: usize,
    col: usize,
    layout: &GridLayout,
    edges: &EdgeGrids,
    synth: &Synthesizer,
) -> Result<Path> {
    let top = *edges.horizontal.require(row, col)?;
    let right = *edges.vertical.require(row, col + 1)?;
    let bottom = edges.horizontal.require(row + 1, col)?.mirror_of();
    let left = edges.vertical.require(row, col)?.mirror_of();

    let top_left = layout.corner(row, col);
    let top_right = layout.corner(row, col + 1);
    let bottom_right = layout.corner(row + 1, col + 1);
    let bottom_left = layout.corner(row + 1, col);

    let mut outline = SubPath::new(top_left);
    synth.synthesize(&mut outline, top_left, top_right, &top);
    synth.synthesize(&mut outline, top_right, bottom_right, &right);
    synth.synthesize(&mut outline, bottom_right, bottom_left, &bottom);
    synth.synthesize(&mut outline, bottom_left, top_left, &left);
    outline.close();

    let mut path = Path::new();
    path.push(outline);
    Ok(path)
}

/// Every piece of the layout in row-major order. All or nothing: the first missing slot
/// aborts the whole assembly.
pub fn assemble_pieces(
    layout: &GridLayout,
    edges: &EdgeGrids,
    synth: &Synthesizer,
) -> Result<Vec<Piece>> {
    let grid = layout.grid();
    let mut pieces = Vec::with_capacity(grid.piece_count());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            pieces.push(Piece {
                row,
                col,
                index: grid.piece_index(row, col),
                bounds: layout.cell_rect(row, col),
                path: assemble(row, col, layout, edges, synth)?,
            });
        }
    }
    Ok(pieces)
}
