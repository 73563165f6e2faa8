//! One very shallow, wide quadratic arc between straight runs.

use super::EdgeFrame;
use crate::path::SubPath;

pub(super) fn draw(sub: &mut SubPath, f: &EdgeFrame) {
    sub.line_to(f.at(0.2));
    sub.quad_to(f.at_off(0.5, f.depth * 1.5), f.at(0.8));
    sub.line_to(f.to);
}
