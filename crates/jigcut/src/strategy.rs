use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A named family of knob-shape algorithms.
///
/// Tags are lowercase (`"standart"`, `"ravensburger"`, ...). Deserializing an unknown tag falls
/// back to [`Strategy::Standart`] instead of failing; use [`str::parse`] for a strict parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Strategy {
    /// Three-phase S-curve, knob bezier, S-curve.
    #[default]
    Standart,
    /// Straight connectors around a single symmetric half-circle knob.
    Ribbon,
    /// Off-centre knob with asymmetric lobes and wavy connectors.
    Random,
    /// Flat, neck, rounded balloon, neck, flat.
    Ravensburger,
    /// Eight wavy sub-segments with a deep sine-weighted knob in the middle.
    Victorian,
    /// Very shallow wide arc; some edges stay flat.
    Strip,
    /// Cubic S-curves at both ends around a two-lobe knob.
    Flow,
    /// Straight segments only: a right-angled trapezoid knob.
    Laser,
    /// Entry S-curve, one of four knob types, exit S-curve.
    Educa,
}

impl Strategy {
    pub const ALL: [Strategy; 9] = [
        Strategy::Standart,
        Strategy::Ribbon,
        Strategy::Random,
        Strategy::Ravensburger,
        Strategy::Victorian,
        Strategy::Strip,
        Strategy::Flow,
        Strategy::Laser,
        Strategy::Educa,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Strategy::Standart => "standart",
            Strategy::Ribbon => "ribbon",
            Strategy::Random => "random",
            Strategy::Ravensburger => "ravensburger",
            Strategy::Victorian => "victorian",
            Strategy::Strip => "strip",
            Strategy::Flow => "flow",
            Strategy::Laser => "laser",
            Strategy::Educa => "educa",
        }
    }

    /// Human-readable name shown next to puzzle statistics.
    pub fn display_name(self) -> &'static str {
        match self {
            Strategy::Standart => "Standard",
            Strategy::Ribbon => "Ribbon Grid",
            Strategy::Random => "Free Asymmetric",
            Strategy::Ravensburger => "Softclick",
            Strategy::Victorian => "Handmade Wavy",
            Strategy::Strip => "Flat Kids",
            Strategy::Flow => "Flowing S-Curve",
            Strategy::Laser => "Angular Geometric",
            Strategy::Educa => "Four Styles Mixed",
        }
    }

    /// Lenient parse: unknown tags fall back to [`Strategy::Standart`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.parse() {
            Ok(strategy) => strategy,
            Err(_) => {
                tracing::warn!(tag, "unknown cut strategy, falling back to standart");
                Strategy::Standart
            }
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.tag() == tag)
            .ok_or(Error::UnknownStrategy { tag })
    }
}

impl From<String> for Strategy {
    fn from(value: String) -> Self {
        Strategy::from_tag(&value)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
