//! Straight lines only: a right-angled trapezoid knob.

use super::EdgeFrame;
use crate::params::CutParams;
use crate::path::SubPath;

pub(super) fn draw(sub: &mut SubPath, f: &EdgeFrame, params: &CutParams) {
    let neck = params.flat_ratio * 0.5;
    let rise = f.depth * 1.8;

    sub.line_to(f.at(0.5 - neck));
    sub.line_to(f.at_off(0.5 - neck, rise));
    sub.line_to(f.at_off(0.5 + neck, rise));
    sub.line_to(f.at(0.5 + neck));
    sub.line_to(f.to);
}
