//! The full cut pattern: every interior edge drawn once, forward.

use crate::edge::{EdgeGrids, EdgeProperty};
use crate::error::Result;
use crate::geom::Point;
use crate::grid::GridLayout;
use crate::path::Path;
use crate::synth::Synthesizer;

/// One open sub-path per interior edge: horizontal edges row by row, then vertical edges.
/// Border edges are left to the image frame.
pub fn build_overlay(layout: &GridLayout, edges: &EdgeGrids, synth: &Synthesizer) -> Result<Path> {
    let mut overlay = Path::new();
    for_each_interior_edge(layout, edges, |from, to, edge| {
        overlay.push(synth.edge_path(from, to, edge));
    })?;
    Ok(overlay)
}

/// Interior edges whose knob and swell had to be scaled into the layout's excursion bound.
pub fn clamped_edge_count(
    layout: &GridLayout,
    edges: &EdgeGrids,
    synth: &Synthesizer,
) -> Result<usize> {
    let mut clamped = 0;
    for_each_interior_edge(layout, edges, |from, to, edge| {
        if !edge.is_flat() && synth.excursion(edge, (to - from).length()).clamped {
            clamped += 1;
        }
    })?;
    Ok(clamped)
}

fn for_each_interior_edge(
    layout: &GridLayout,
    edges: &EdgeGrids,
    mut visit: impl FnMut(Point, Point, &EdgeProperty),
) -> Result<()> {
    let grid = layout.grid();
    let (rows, cols) = (grid.rows(), grid.cols());
    for row in 1..rows {
        for col in 0..cols {
            let edge = edges.horizontal.require(row, col)?;
            visit(layout.corner(row, col), layout.corner(row, col + 1), edge);
        }
    }
    for row in 0..rows {
        for col in 1..cols {
            let edge = edges.vertical.require(row, col)?;
            visit(layout.corner(row, col), layout.corner(row + 1, col), edge);
        }
    }
    Ok(())
}
