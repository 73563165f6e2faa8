//! Edge curve synthesis: turns an edge property and two endpoints into path segments.
//!
//! Every strategy draws its knob profile in a local frame spanned by the (unnormalized) edge
//! delta and the unit normal. Two transverse terms move control points off the edge line: the
//! knob (`depth`, reaching `peak_factor` times it) and the connector swell or waves (reaching
//! `swell_reach`). Their sum is kept within the layout's excursion bound by scaling both.

mod educa;
mod flow;
mod laser;
mod random;
mod ravensburger;
mod ribbon;
mod standart;
mod strip;
mod victorian;

use crate::edge::{EdgeProperty, KnobType, Traversal};
use crate::geom::{Point, Vector, unit_normal};
use crate::grid::GridLayout;
use crate::params::CutParams;
use crate::path::SubPath;
use crate::strategy::Strategy;

/// Local coordinate frame of one edge.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EdgeFrame {
    pub from: Point,
    pub to: Point,
    /// `to - from`, not normalized.
    pub delta: Vector,
    pub len: f64,
    /// Unit normal, `(-dy, dx) / len`.
    pub normal: Vector,
    /// `+1.0` or `-1.0`.
    pub dir: f64,
    /// Signed knob scale in pixels.
    pub depth: f64,
    /// Factor in `[0, 1]` applied to every swell and wave term.
    pub swell_scale: f64,
}

impl EdgeFrame {
    /// Point at parameter `t` along the straight edge.
    pub fn at(&self, t: f64) -> Point {
        self.from + self.delta * t
    }

    /// Point at parameter `t`, pushed `offset` pixels along the normal.
    pub fn at_off(&self, t: f64, offset: f64) -> Point {
        self.at(t) + self.normal * offset
    }
}

/// Strategy-bound curve synthesizer. Cheap to copy; holds no mutable state.
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer {
    strategy: Strategy,
    params: CutParams,
    max_excursion: f64,
}

impl Synthesizer {
    pub fn new(strategy: Strategy, params: CutParams, max_excursion: f64) -> Self {
        Self {
            strategy,
            params,
            max_excursion,
        }
    }

    /// Synthesizer whose excursion bound comes from the layout's nominal cell.
    pub fn for_layout(strategy: Strategy, params: CutParams, layout: &GridLayout) -> Self {
        Self::new(strategy, params, layout.max_excursion())
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn params(&self) -> &CutParams {
        &self.params
    }

    pub fn max_excursion(&self) -> f64 {
        self.max_excursion
    }

    /// Appends the segments of `edge` drawn from `from` to `to` onto `sub`, whose pen must
    /// already sit at `from`. The last appended segment ends exactly at `to`.
    ///
    /// Flat edges and zero-length edges produce one straight line. A [`Traversal::Reverse`]
    /// property is drawn as its forward counterpart from `to` to `from`, then reversed, so a
    /// shared edge and its mirror trace the same curve.
    pub fn synthesize(&self, sub: &mut SubPath, from: Point, to: Point, edge: &EdgeProperty) {
        if edge.traversal == Traversal::Reverse {
            let canonical = self.edge_path(to, from, &edge.mirror_of());
            sub.segments.extend(canonical.reversed().segments);
            return;
        }

        let delta = to - from;
        let normal = match unit_normal(delta) {
            Some(normal) if !edge.is_flat() => normal,
            _ => {
                sub.line_to(to);
                return;
            }
        };
        let len = delta.length();

        let reach = self.excursion(edge, len);
        let frame = EdgeFrame {
            from,
            to,
            delta,
            len,
            normal,
            dir: edge.shape.sign(),
            depth: reach.depth,
            swell_scale: reach.swell_scale,
        };
        tracing::trace!(
            strategy = self.strategy.tag(),
            len,
            depth = reach.depth,
            swell_scale = reach.swell_scale,
            clamped = reach.clamped,
            "synthesize edge"
        );

        let params = &self.params;
        match self.strategy {
            Strategy::Standart => standart::draw(sub, &frame, params),
            Strategy::Ribbon => ribbon::draw(sub, &frame, params),
            Strategy::Random => random::draw(sub, &frame, edge, params),
            Strategy::Ravensburger => ravensburger::draw(sub, &frame, params),
            Strategy::Victorian => victorian::draw(sub, &frame, edge, params),
            Strategy::Strip => strip::draw(sub, &frame),
            Strategy::Flow => flow::draw(sub, &frame, edge, params),
            Strategy::Laser => laser::draw(sub, &frame, params),
            Strategy::Educa => educa::draw(sub, &frame, edge, params),
        }
    }

    /// A fresh sub-path starting at `from` holding just this edge.
    pub fn edge_path(&self, from: Point, to: Point, edge: &EdgeProperty) -> SubPath {
        let mut sub = SubPath::new(from);
        self.synthesize(&mut sub, from, to, edge);
        sub
    }

    /// Knob depth and swell scale for an edge of length `len`.
    ///
    /// When the knob peak plus the swell reach would leave the excursion bound, both are scaled
    /// down by the same factor so the profile keeps its proportions.
    pub fn excursion(&self, edge: &EdgeProperty, len: f64) -> Excursion {
        let p = &self.params;
        let raw = p.knob_depth * edge.depth_multiplier * len * edge.shape.sign() * p.knob_width;
        let total = raw.abs() * peak_factor(self.strategy, edge)
            + swell_reach(self.strategy, edge, p, len);
        if total > self.max_excursion {
            let scale = self.max_excursion / total;
            Excursion {
                depth: raw * scale,
                swell_scale: scale,
                clamped: true,
            }
        } else {
            Excursion {
                depth: raw,
                swell_scale: 1.0,
                clamped: false,
            }
        }
    }
}

/// Transverse budget of one edge, see [`Synthesizer::excursion`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Excursion {
    /// Signed knob depth in pixels.
    pub depth: f64,
    /// Factor in `[0, 1]` applied to the swell and wave terms.
    pub swell_scale: f64,
    /// Whether the bound scaled anything down.
    pub clamped: bool,
}

/// Largest multiple of the knob depth any control point of the profile reaches along the
/// normal.
pub fn peak_factor(strategy: Strategy, edge: &EdgeProperty) -> f64 {
    match strategy {
        Strategy::Standart => 1.0,
        Strategy::Ribbon => 2.0,
        Strategy::Random => 2.2,
        Strategy::Ravensburger => 1.5,
        Strategy::Victorian => 2.5,
        Strategy::Strip => 1.5,
        Strategy::Flow => 2.0,
        Strategy::Laser => 1.8,
        Strategy::Educa => match edge.knob_type.unwrap_or(KnobType::Classic) {
            KnobType::Classic => 1.5,
            KnobType::Oval => 2.2,
            KnobType::Irregular => 2.88,
            KnobType::DoubleLobe => 1.3,
        },
    }
}

/// Largest transverse offset, in pixels, that a profile's swell and wave terms give any control
/// point at full scale. Knob-only profiles have none.
pub fn swell_reach(strategy: Strategy, edge: &EdgeProperty, params: &CutParams, len: f64) -> f64 {
    let swell = params.curve_swell;
    match strategy {
        // Both connectors span `flat_ratio` of the edge; jitter adds up to its own share.
        Strategy::Standart => params.flat_ratio * len * (swell + params.organic_jitter),
        Strategy::Random => random::SWELL_REACH * swell * len,
        Strategy::Victorian => {
            let waviness = edge.waviness.unwrap_or(victorian::DEFAULT_WAVINESS);
            victorian::WAVE_REACH * waviness * swell * len
        }
        Strategy::Flow => {
            let waviness = edge.waviness.unwrap_or(flow::DEFAULT_WAVINESS);
            flow::WAVE_REACH * waviness * swell * len
        }
        Strategy::Educa => educa::SWELL_REACH * swell * len,
        Strategy::Ribbon | Strategy::Ravensburger | Strategy::Strip | Strategy::Laser => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::Synthesizer;
    use crate::edge::{EdgeProperty, Shape, Traversal};
    use crate::geom::point;
    use crate::params::CutParams;
    use crate::path::Segment;
    use crate::strategy::Strategy;

    fn knob(shape: Shape) -> EdgeProperty {
        EdgeProperty {
            shape,
            depth_multiplier: 1.0,
            offset_multiplier: 1.0,
            ..EdgeProperty::FLAT
        }
    }

    #[test]
    fn zero_length_edges_become_a_single_line() {
        let synth = Synthesizer::new(Strategy::Flow, CutParams::default(), 50.0);
        let p = point(5.0, 5.0);
        let sub = synth.edge_path(p, p, &knob(Shape::Positive));
        assert_eq!(sub.segments, vec![Segment::Line { to: p }]);
    }

    #[test]
    fn flat_edges_become_a_single_line_in_both_traversals() {
        let synth = Synthesizer::new(Strategy::Victorian, CutParams::default(), 50.0);
        let (a, b) = (point(0.0, 0.0), point(100.0, 0.0));
        let fwd = synth.edge_path(a, b, &EdgeProperty::FLAT);
        assert_eq!(fwd.segments, vec![Segment::Line { to: b }]);
        let rev = synth.edge_path(b, a, &EdgeProperty::FLAT.mirror_of());
        assert_eq!(rev.segments, vec![Segment::Line { to: a }]);
    }

    #[test]
    fn knob_and_waves_share_the_excursion_bound() {
        let params = CutParams {
            knob_depth: 0.35,
            knob_width: 2.0,
            ..CutParams::default()
        };
        let synth = Synthesizer::new(Strategy::Victorian, params, 10.0);
        let reach = synth.excursion(&knob(Shape::Negative), 100.0);
        assert!(reach.clamped);
        assert!(reach.depth < 0.0);
        // 0.04 * waviness 1.0 * swell 0.05 * 100 px of waves ride on top of the knob.
        let used = reach.depth.abs() * 2.5 + 0.2 * reach.swell_scale;
        assert!((used - 10.0).abs() < 1e-9, "{used}");

        let reach = synth.excursion(&knob(Shape::Positive), 1.0);
        assert!(!reach.clamped);
        assert_eq!(reach.swell_scale, 1.0);
        assert!((reach.depth - 0.7).abs() < 1e-12);
    }

    #[test]
    fn swell_alone_is_scaled_into_the_bound() {
        let params = CutParams {
            knob_depth: 0.0,
            curve_swell: 0.3,
            ..CutParams::default()
        };
        let synth = Synthesizer::new(Strategy::Random, params, 50.0);
        // 0.5 * 0.3 * 2000 px = 300 px of raw swell.
        let reach = synth.excursion(&knob(Shape::Positive), 2000.0);
        assert!(reach.clamped);
        assert_eq!(reach.depth, 0.0);
        assert!((reach.swell_scale - 50.0 / 300.0).abs() < 1e-12);
    }

    #[test]
    fn reverse_traversal_ends_exactly_at_the_target() {
        let synth = Synthesizer::new(Strategy::Standart, CutParams::default(), 40.0);
        let (a, b) = (point(13.0, 7.0), point(113.0, 7.0));
        let edge = EdgeProperty {
            traversal: Traversal::Reverse,
            ..knob(Shape::Positive)
        };
        let sub = synth.edge_path(b, a, &edge);
        assert_eq!(sub.end_point(), a);
    }
}
