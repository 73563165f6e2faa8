//! Entry S-curve, one of four knob types, exit S-curve.

use super::EdgeFrame;
use crate::edge::{EdgeProperty, KnobType};
use crate::geom::{Point, lerp};
use crate::params::CutParams;
use crate::path::SubPath;

const IRREGULAR_STEPS: usize = 4;
pub(super) const SWELL_REACH: f64 = 0.06;

pub(super) fn draw(sub: &mut SubPath, f: &EdgeFrame, edge: &EdgeProperty, params: &CutParams) {
    let flat = params.flat_ratio;
    let n = f.normal;
    let p1 = f.at(flat);
    let p2 = f.at(1.0 - flat);
    let sw = params.curve_swell * f.len * f.dir * SWELL_REACH * f.swell_scale;

    sub.cubic_to(f.at_off(flat * 0.3, sw), f.at_off(flat * 0.7, -sw), p1);

    match edge.knob_type.unwrap_or(KnobType::Classic) {
        KnobType::Classic => classic(sub, f, p1, p2),
        KnobType::Oval => oval(sub, f, p1, p2),
        KnobType::Irregular => irregular(sub, f, p1, p2),
        KnobType::DoubleLobe => double_lobe(sub, f, p1, p2),
    }

    sub.cubic_to(
        lerp(p2, f.to, 0.3) - n * sw,
        lerp(p2, f.to, 0.7) + n * sw,
        f.to,
    );
}

fn classic(sub: &mut SubPath, f: &EdgeFrame, p1: Point, p2: Point) {
    let lift = f.normal * (f.depth * 1.5);
    sub.cubic_to(p1 + lift, p2 + lift, p2);
}

fn oval(sub: &mut SubPath, f: &EdgeFrame, p1: Point, p2: Point) {
    let (n, d) = (f.normal, f.depth);
    let mid = lerp(p1, p2, 0.5) + n * (d * 2.2);
    sub.cubic_to(p1 + n * (d * 0.8), mid - f.delta * 0.06, mid);
    sub.cubic_to(mid + f.delta * 0.06, p2 + n * (d * 0.8), p2);
}

/// Quadratic chain whose per-step depth wobbles with the knob's start coordinate.
fn irregular(sub: &mut SubPath, f: &EdgeFrame, p1: Point, p2: Point) {
    let steps = IRREGULAR_STEPS as f64;
    for i in 0..IRREGULAR_STEPS {
        let k = i as f64;
        let depth = f.depth * (1.0 + (k * 2.1 + p1.x * 0.01).sin() * 0.6);
        let ctrl = lerp(p1, p2, (k + 0.5) / steps) + f.normal * (depth * 1.8);
        let end = if i + 1 == IRREGULAR_STEPS {
            p2
        } else {
            lerp(p1, p2, (k + 1.0) / steps)
        };
        sub.quad_to(ctrl, end);
    }
}

fn double_lobe(sub: &mut SubPath, f: &EdgeFrame, p1: Point, p2: Point) {
    let (n, d) = (f.normal, f.depth);
    let m = lerp(p1, p2, 0.5);
    let dm = p2 - p1;
    let lift = n * (d * 1.3);
    sub.cubic_to(p1 + lift, m - dm * 0.1 + lift, m);
    sub.quad_to(m + n * (d * 0.2), m + dm * 0.05);
    sub.cubic_to(m + dm * 0.1 + lift, p2 + lift, p2);
}
