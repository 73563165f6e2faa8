//! Per-edge shape parameters and the seeded generator that fills both edge grids.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::GridSize;
use crate::hash::{hash, hash_range, slot};
use crate::strategy::Strategy;

const HORIZONTAL_SEED: i32 = 100;
const VERTICAL_SEED: i32 = 200;

const DIRECTION_SALT: i32 = 1;
const DEPTH_SALT: i32 = 2;
const OFFSET_SALT: i32 = 3;
const WAVINESS_SALT: i32 = 4;
const STRIP_FLAT_SALT: i32 = 5;
const KNOB_TYPE_SALT: i32 = 6;

/// Strip edges whose flattening hash falls at or below this value stay straight.
const STRIP_KNOB_THRESHOLD: f64 = 0.3;

/// Knob direction relative to the traversal direction of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Shape {
    Negative,
    Flat,
    Positive,
}

impl Shape {
    pub fn negated(self) -> Self {
        match self {
            Shape::Negative => Shape::Positive,
            Shape::Flat => Shape::Flat,
            Shape::Positive => Shape::Negative,
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Shape::Negative => -1.0,
            Shape::Flat => 0.0,
            Shape::Positive => 1.0,
        }
    }
}

impl From<Shape> for i8 {
    fn from(value: Shape) -> Self {
        match value {
            Shape::Negative => -1,
            Shape::Flat => 0,
            Shape::Positive => 1,
        }
    }
}

impl TryFrom<i8> for Shape {
    type Error = String;

    fn try_from(value: i8) -> std::result::Result<Self, Self::Error> {
        match value {
            -1 => Ok(Shape::Negative),
            0 => Ok(Shape::Flat),
            1 => Ok(Shape::Positive),
            other => Err(format!("edge shape must be -1, 0 or 1, got {other}")),
        }
    }
}

/// Educa knob variants, selected per edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KnobType {
    /// Single cubic bezier.
    Classic,
    /// Egg shape from two cubics.
    Oval,
    /// Chain of four quadratics with uneven depth.
    Irregular,
    /// Two lobes separated by a shallow notch.
    DoubleLobe,
}

impl KnobType {
    pub const ALL: [KnobType; 4] = [
        KnobType::Classic,
        KnobType::Oval,
        KnobType::Irregular,
        KnobType::DoubleLobe,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }
}

/// Which way an edge is walked relative to its canonical orientation (left to right for
/// horizontal edges, top to bottom for vertical ones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Traversal {
    #[default]
    Forward,
    Reverse,
}

impl Traversal {
    pub fn flipped(self) -> Self {
        match self {
            Traversal::Forward => Traversal::Reverse,
            Traversal::Reverse => Traversal::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// Shape parameters of one edge slot. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeProperty {
    pub shape: Shape,
    pub depth_multiplier: f64,
    pub offset_multiplier: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waviness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knob_type: Option<KnobType>,
    #[serde(default)]
    pub traversal: Traversal,
}

impl EdgeProperty {
    /// Straight edge with neutral multipliers (image border).
    pub const FLAT: EdgeProperty = EdgeProperty {
        shape: Shape::Flat,
        depth_multiplier: 1.0,
        offset_multiplier: 1.0,
        waviness: None,
        knob_type: None,
        traversal: Traversal::Forward,
    };

    pub fn is_flat(&self) -> bool {
        self.shape == Shape::Flat
    }

    /// The same edge seen from the neighbouring piece: the knob direction is negated and the
    /// edge is walked the other way. Synthesizing `mirror_of()` from `Q` to `P` traces exactly
    /// the curve synthesized from `P` to `Q`, backwards.
    pub fn mirror_of(&self) -> Self {
        Self {
            shape: self.shape.negated(),
            traversal: self.traversal.flipped(),
            ..*self
        }
    }
}

/// Closed ranges (`[min, max)` in practice) of the multipliers a strategy generates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplierRanges {
    pub depth: (f64, f64),
    /// `None` means the offset multiplier is fixed at 1.0.
    pub offset: Option<(f64, f64)>,
    pub waviness: Option<(f64, f64)>,
}

pub fn multiplier_ranges(strategy: Strategy) -> MultiplierRanges {
    let ranges = |depth, offset, waviness| MultiplierRanges {
        depth,
        offset,
        waviness,
    };
    match strategy {
        Strategy::Standart => ranges((0.8, 1.2), Some((0.9, 1.1)), None),
        Strategy::Ribbon => ranges((0.9, 1.1), None, None),
        Strategy::Random => ranges((0.5, 2.0), Some((0.6, 1.4)), None),
        Strategy::Ravensburger => ranges((0.8, 1.8), Some((0.7, 1.3)), None),
        Strategy::Victorian => ranges((0.8, 1.8), Some((0.7, 1.3)), Some((0.5, 1.5))),
        Strategy::Strip => ranges((0.6, 1.0), None, None),
        Strategy::Flow => ranges((0.7, 1.5), Some((0.8, 1.2)), Some((1.0, 2.0))),
        Strategy::Laser => ranges((0.95, 1.05), None, None),
        Strategy::Educa => ranges((0.6, 1.6), Some((0.7, 1.3)), None),
    }
}

/// Row-major grid of edge properties for one orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeGrid {
    orientation: Orientation,
    rows: usize,
    cols: usize,
    slots: Vec<EdgeProperty>,
}

impl EdgeGrid {
    fn filled(orientation: Orientation, rows: usize, cols: usize) -> Self {
        Self {
            orientation,
            rows,
            cols,
            slots: vec![EdgeProperty::FLAT; rows * cols],
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&EdgeProperty> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.slots.get(row * self.cols + col)
    }

    /// Like [`EdgeGrid::get`], but a missing slot is a contract violation reported as an error.
    pub fn require(&self, row: usize, col: usize) -> Result<&EdgeProperty> {
        self.get(row, col).ok_or(Error::EdgeGridMismatch {
            orientation: self.orientation,
            row,
            col,
        })
    }

    /// Whether `(row, col)` lies on the image border.
    pub fn is_boundary(&self, row: usize, col: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => row == 0 || row + 1 == self.rows,
            Orientation::Vertical => col == 0 || col + 1 == self.cols,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &EdgeProperty)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, edge)| (i / self.cols, i % self.cols, edge))
    }

    /// Interior slots only, in row-major order.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize, &EdgeProperty)> + '_ {
        self.iter()
            .filter(|&(row, col, _)| !self.is_boundary(row, col))
    }

    fn set(&mut self, row: usize, col: usize, edge: EdgeProperty) {
        let idx = row * self.cols + col;
        self.slots[idx] = edge;
    }
}

/// Horizontal (`(rows + 1) x cols`) and vertical (`rows x (cols + 1)`) edge grids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeGrids {
    pub horizontal: EdgeGrid,
    pub vertical: EdgeGrid,
}

impl EdgeGrids {
    /// Builds both grids for `grid` under `strategy`. Pure: the same inputs always produce
    /// bit-identical grids.
    pub fn generate(grid: GridSize, strategy: Strategy) -> Self {
        let (rows, cols) = (grid.rows(), grid.cols());
        let mut horizontal = EdgeGrid::filled(Orientation::Horizontal, rows + 1, cols);
        let mut vertical = EdgeGrid::filled(Orientation::Vertical, rows, cols + 1);

        for row in 1..rows {
            for col in 0..cols {
                horizontal.set(row, col, interior_edge(row, col, HORIZONTAL_SEED, strategy));
            }
        }
        for row in 0..rows {
            for col in 1..cols {
                vertical.set(row, col, interior_edge(row, col, VERTICAL_SEED, strategy));
            }
        }

        let grids = Self {
            horizontal,
            vertical,
        };
        tracing::debug!(
            rows,
            cols,
            strategy = strategy.tag(),
            interior = grids.interior_count(),
            flattened = grids.flattened_interior_count(),
            "generated edge grids"
        );
        grids
    }

    pub fn grid(&self, orientation: Orientation) -> &EdgeGrid {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    pub fn interior_count(&self) -> usize {
        self.horizontal.interior().count() + self.vertical.interior().count()
    }

    /// Interior edges without a knob (only the strip strategy produces these).
    pub fn flattened_interior_count(&self) -> usize {
        self.horizontal
            .interior()
            .chain(self.vertical.interior())
            .filter(|(_, _, edge)| edge.is_flat())
            .count()
    }
}

fn interior_edge(row: usize, col: usize, base: i32, strategy: Strategy) -> EdgeProperty {
    let (r, c) = (slot(row), slot(col));
    let direction = if hash(r, c, base + DIRECTION_SALT) > 0.5 {
        Shape::Positive
    } else {
        Shape::Negative
    };
    let ranges = multiplier_ranges(strategy);
    let sample = |salt: i32, (min, max): (f64, f64)| hash_range(r, c, base + salt, min, max);

    let shape = match strategy {
        Strategy::Strip if hash(r, c, base + STRIP_FLAT_SALT) <= STRIP_KNOB_THRESHOLD => {
            Shape::Flat
        }
        _ => direction,
    };
    let knob_type = match strategy {
        Strategy::Educa => {
            let index = (hash(r, c, base + KNOB_TYPE_SALT) * KnobType::ALL.len() as f64) as usize;
            Some(KnobType::from_index(index))
        }
        _ => None,
    };

    EdgeProperty {
        shape,
        depth_multiplier: sample(DEPTH_SALT, ranges.depth),
        offset_multiplier: ranges.offset.map_or(1.0, |range| sample(OFFSET_SALT, range)),
        waviness: ranges.waviness.map(|range| sample(WAVINESS_SALT, range)),
        knob_type,
        traversal: Traversal::Forward,
    }
}
