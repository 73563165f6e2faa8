use serde::{Deserialize, Serialize};

use crate::edge::EdgeGrids;
use crate::grid::GridSize;
use crate::strategy::Strategy;

/// Summary figures shown next to a generated puzzle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutStats {
    pub total_pieces: usize,
    pub strategy_label: String,
    /// Spread of interior depth multipliers, `(max - min) * 100`. Zero without interior knobs.
    pub knob_variety: f64,
}

impl CutStats {
    pub fn collect(grid: GridSize, strategy: Strategy, edges: &EdgeGrids) -> Self {
        let (min, max) = edges
            .horizontal
            .interior()
            .chain(edges.vertical.interior())
            .filter(|(_, _, edge)| !edge.is_flat())
            .map(|(_, _, edge)| edge.depth_multiplier)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        let knob_variety = if min <= max { (max - min) * 100.0 } else { 0.0 };
        Self {
            total_pieces: grid.piece_count(),
            strategy_label: strategy.display_name().to_string(),
            knob_variety,
        }
    }
}
