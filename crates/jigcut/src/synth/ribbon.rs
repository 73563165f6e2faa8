//! Straight connectors around one symmetric quadratic knob.

use super::EdgeFrame;
use crate::geom::lerp;
use crate::params::CutParams;
use crate::path::SubPath;

pub(super) fn draw(sub: &mut SubPath, f: &EdgeFrame, params: &CutParams) {
    let flat = params.flat_ratio;
    let p1 = f.at(flat);
    let p2 = f.at(1.0 - flat);

    sub.line_to(p1);
    sub.quad_to(lerp(p1, p2, 0.5) + f.normal * (f.depth * 2.0), p2);
    sub.line_to(f.to);
}
