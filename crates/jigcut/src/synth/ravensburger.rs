//! Flat, neck, rounded balloon, neck, flat.

use super::EdgeFrame;
use crate::params::CutParams;
use crate::path::SubPath;

const CENTER: f64 = 0.5;

pub(super) fn draw(sub: &mut SubPath, f: &EdgeFrame, params: &CutParams) {
    let d = f.depth;
    let n = f.normal;
    let neck = params.flat_ratio * 0.7;
    let p1 = f.at(CENTER - neck);
    let p2 = f.at(CENTER + neck);

    let n1 = p1 + f.delta * 0.02 + n * (d * 0.15);
    let n2 = p2 - f.delta * 0.02 + n * (d * 0.15);
    let peak = f.at_off(CENTER, d * 1.5);

    sub.line_to(p1);
    sub.line_to(n1);
    sub.cubic_to(n1 + n * (d * 1.2) - f.delta * 0.06, peak - f.delta * 0.05, peak);
    sub.cubic_to(peak + f.delta * 0.05, n2 + n * (d * 1.2) + f.delta * 0.06, n2);
    sub.line_to(p2);
    sub.line_to(f.to);
}
