#![forbid(unsafe_code)]

//! Deterministic jigsaw cut geometry.
//!
//! `jigcut` slices a `width x height` pixel rectangle into a grid of interlocking pieces. Every
//! interior grid line gets a knob shaped by one of nine strategies; per-edge variation comes from
//! a seeded coordinate hash, so the same grid and strategy always produce the same cuts. The
//! crate is headless: it emits vector paths (see [`Path::to_svg_data`]) and leaves decoding,
//! rasterization and export to the caller.
//!
//! ```
//! use jigcut::{CutParams, GridSize, Strategy};
//!
//! let grid = GridSize::new(4, 4)?;
//! let puzzle = jigcut::cut(800.0, 600.0, grid, Strategy::Standart, &CutParams::default())?;
//! assert_eq!(puzzle.pieces.len(), 16);
//! # Ok::<(), jigcut::Error>(())
//! ```

pub mod edge;
pub mod error;
pub mod geom;
pub mod grid;
pub mod hash;
pub mod overlay;
pub mod params;
pub mod path;
pub mod piece;
pub mod stats;
pub mod strategy;
pub mod synth;

use serde::{Deserialize, Serialize};

pub use edge::{EdgeGrid, EdgeGrids, EdgeProperty, KnobType, Orientation, Shape, Traversal};
pub use error::{Error, Result};
pub use grid::{GridLayout, GridSize};
pub use hash::{hash, hash_range};
pub use overlay::build_overlay;
pub use params::CutParams;
pub use path::{Path, Segment, SubPath};
pub use piece::{Piece, assemble, assemble_pieces};
pub use stats::CutStats;
pub use strategy::Strategy;
pub use synth::{Excursion, Synthesizer};

/// A fully generated puzzle: edge grids, the cut overlay and one closed outline per cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    pub grid: GridSize,
    pub strategy: Strategy,
    /// Parameters after range clamping.
    pub params: CutParams,
    pub layout: GridLayout,
    pub edges: EdgeGrids,
    pub overlay: Path,
    pub pieces: Vec<Piece>,
}

impl Puzzle {
    /// Padding an exporter adds around each piece so knobs are not cropped:
    /// `max(cellWidth, cellHeight) * knobDepth * 2.5 + 10`.
    pub fn export_margin(&self) -> f64 {
        let cell = self.layout.cell_width().max(self.layout.cell_height());
        cell * self.params.knob_depth * 2.5 + 10.0
    }

    pub fn stats(&self) -> CutStats {
        CutStats::collect(self.grid, self.strategy, &self.edges)
    }

    pub fn piece(&self, row: usize, col: usize) -> Option<&Piece> {
        if row >= self.grid.rows() || col >= self.grid.cols() {
            return None;
        }
        self.pieces.get(self.grid.piece_index(row, col))
    }
}

/// Headless cut entry point.
///
/// Out-of-range tunables are clamped rather than rejected; call [`CutParams::validate`] first
/// for a strict check. Either every piece is produced or an error is returned.
pub fn cut(
    width: f64,
    height: f64,
    grid: GridSize,
    strategy: Strategy,
    params: &CutParams,
) -> Result<Puzzle> {
    let params = params.clamped();
    let layout = GridLayout::new(grid, width, height, params.snap_to_pixels)?;
    let edges = EdgeGrids::generate(grid, strategy);
    let synth = Synthesizer::for_layout(strategy, params, &layout);

    let clamped = overlay::clamped_edge_count(&layout, &edges, &synth)?;
    if clamped > 0 {
        tracing::warn!(
            clamped,
            strategy = strategy.tag(),
            max_excursion = layout.max_excursion(),
            "knob depth and swell clamped to the cell excursion bound"
        );
    }

    let overlay = build_overlay(&layout, &edges, &synth)?;
    let pieces = assemble_pieces(&layout, &edges, &synth)?;
    tracing::debug!(
        pieces = pieces.len(),
        overlay_subpaths = overlay.subpaths.len(),
        "assembled puzzle"
    );

    Ok(Puzzle {
        grid,
        strategy,
        params,
        layout,
        edges,
        overlay,
        pieces,
    })
}
