use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::strategy::Strategy;

pub const KNOB_DEPTH_RANGE: (f64, f64) = (0.05, 0.35);
pub const FLAT_RATIO_RANGE: (f64, f64) = (0.1, 0.4);
pub const CURVE_SWELL_RANGE: (f64, f64) = (0.0, 0.3);
pub const ORGANIC_JITTER_RANGE: (f64, f64) = (0.0, 0.1);
pub const KNOB_WIDTH_RANGE: (f64, f64) = (0.5, 2.0);

/// Tunables shared by every strategy. Per-edge multipliers scale these.
///
/// JSON keys are camelCase (`knobDepth`, `flatRatio`, ...); missing keys take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CutParams {
    /// Base knob depth as a fraction of the edge length.
    pub knob_depth: f64,
    /// Fraction of the edge reserved for the straight connectors before and after the knob.
    pub flat_ratio: f64,
    /// Bulge of the S-curve connectors.
    pub curve_swell: f64,
    /// Coordinate-seeded wobble on long connectors (standart only).
    pub organic_jitter: f64,
    /// Multiplier on the knob's transverse excursion.
    pub knob_width: f64,
    /// Round cell corners to whole pixels.
    pub snap_to_pixels: bool,
}

impl Default for CutParams {
    fn default() -> Self {
        Self {
            knob_depth: 0.20,
            flat_ratio: 0.30,
            curve_swell: 0.05,
            organic_jitter: 0.015,
            knob_width: 1.0,
            snap_to_pixels: true,
        }
    }
}

impl CutParams {
    /// Recommended tunables for a strategy. Standart and educa use the defaults.
    pub fn preset(strategy: Strategy) -> Self {
        let tuned = |knob_depth, flat_ratio, curve_swell, organic_jitter, knob_width| Self {
            knob_depth,
            flat_ratio,
            curve_swell,
            organic_jitter,
            knob_width,
            ..Self::default()
        };
        match strategy {
            Strategy::Standart | Strategy::Educa => Self::default(),
            Strategy::Ribbon => tuned(0.12, 0.30, 0.01, 0.0, 0.8),
            Strategy::Random => tuned(0.28, 0.15, 0.14, 0.05, 1.4),
            Strategy::Ravensburger => tuned(0.20, 0.22, 0.04, 0.008, 1.0),
            Strategy::Victorian => tuned(0.30, 0.12, 0.20, 0.07, 1.5),
            Strategy::Strip => tuned(0.06, 0.38, 0.00, 0.0, 0.6),
            Strategy::Flow => tuned(0.22, 0.18, 0.25, 0.06, 1.3),
            Strategy::Laser => tuned(0.18, 0.25, 0.02, 0.0, 1.0),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Strict check: every tunable must be finite and inside its documented range.
    pub fn validate(&self) -> Result<()> {
        for (name, value, (min, max)) in self.fields() {
            if !value.is_finite() || value < min || value > max {
                return Err(Error::InvalidParam {
                    name,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Lenient variant of [`CutParams::validate`]: clamps every tunable into range.
    /// Non-finite values are replaced by the default.
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        let clamp = |value: f64, fallback: f64, (min, max): (f64, f64)| {
            if value.is_finite() {
                value.clamp(min, max)
            } else {
                fallback
            }
        };
        Self {
            knob_depth: clamp(self.knob_depth, defaults.knob_depth, KNOB_DEPTH_RANGE),
            flat_ratio: clamp(self.flat_ratio, defaults.flat_ratio, FLAT_RATIO_RANGE),
            curve_swell: clamp(self.curve_swell, defaults.curve_swell, CURVE_SWELL_RANGE),
            organic_jitter: clamp(
                self.organic_jitter,
                defaults.organic_jitter,
                ORGANIC_JITTER_RANGE,
            ),
            knob_width: clamp(self.knob_width, defaults.knob_width, KNOB_WIDTH_RANGE),
            snap_to_pixels: self.snap_to_pixels,
        }
    }

    fn fields(&self) -> [(&'static str, f64, (f64, f64)); 5] {
        [
            ("knobDepth", self.knob_depth, KNOB_DEPTH_RANGE),
            ("flatRatio", self.flat_ratio, FLAT_RATIO_RANGE),
            ("curveSwell", self.curve_swell, CURVE_SWELL_RANGE),
            ("organicJitter", self.organic_jitter, ORGANIC_JITTER_RANGE),
            ("knobWidth", self.knob_width, KNOB_WIDTH_RANGE),
        ]
    }
}
