//! Off-centre knob built from two asymmetric quadratic lobes, with wavy connectors.
//!
//! The offset multiplier (0.6..1.4) moves the knob centre between 0.3 and 0.7 of the edge.

use super::EdgeFrame;
use crate::edge::EdgeProperty;
use crate::geom::lerp;
use crate::params::CutParams;
use crate::path::SubPath;

/// Connector swell per unit of `curve_swell` and edge length.
pub(super) const SWELL_REACH: f64 = 0.5;

pub(super) fn draw(sub: &mut SubPath, f: &EdgeFrame, edge: &EdgeProperty, params: &CutParams) {
    let d = f.depth;
    let center = 0.3 + (edge.offset_multiplier - 0.6) * 0.5;
    let neck = params.flat_ratio * 0.6;
    let p1 = f.at(center - neck);
    let p2 = f.at(center + neck);
    let peak = f.at_off(center, d * 2.2);
    let swell = params.curve_swell * f.len * f.dir * SWELL_REACH * f.swell_scale;

    sub.quad_to(f.at((center - neck) * 0.5) - f.normal * swell, p1);
    sub.quad_to(p1 + f.normal * (d * 1.8) - f.delta * 0.05, peak);
    sub.quad_to(p2 + f.normal * (d * 1.8) + f.delta * 0.05, p2);
    sub.quad_to(lerp(p2, f.to, 0.5) + f.normal * swell, f.to);
}
