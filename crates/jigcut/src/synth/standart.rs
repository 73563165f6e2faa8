//! Three-phase profile: S-curve connector, single cubic knob, S-curve connector.

use super::EdgeFrame;
use crate::geom::{Point, unit_normal};
use crate::hash::hash_range;
use crate::params::CutParams;
use crate::path::SubPath;

/// Connectors longer than this fraction of the edge get organic jitter.
const JITTER_MIN_SHARE: f64 = 0.3;
/// Jitter samples a coarse lattice so neighbouring control points move together.
const JITTER_CELL: f64 = 0.15;
const JITTER_SEED_X: i32 = 100;
const JITTER_SEED_Y: i32 = 200;

pub(super) fn draw(sub: &mut SubPath, f: &EdgeFrame, params: &CutParams) {
    let flat = params.flat_ratio;
    let p1 = f.at(flat);
    let p2 = f.at(1.0 - flat);

    s_curve(sub, f, params, f.from, p1);
    sub.cubic_to(p1 + f.normal * f.depth, p2 + f.normal * f.depth, p2);
    s_curve(sub, f, params, p2, f.to);
}

fn s_curve(sub: &mut SubPath, f: &EdgeFrame, params: &CutParams, start: Point, end: Point) {
    let cd = end - start;
    let Some(cn) = unit_normal(cd) else {
        return;
    };
    let clen = cd.length();
    let swell = clen * params.curve_swell * f.dir * f.swell_scale;
    let mut c1 = start + cd * 0.25 + cn * swell;
    let mut c2 = start + cd * 0.75 - cn * swell;

    if clen > f.len * JITTER_MIN_SHARE && params.organic_jitter > 0.0 {
        let amount = clen * params.organic_jitter * f.swell_scale;
        c1 = jitter(c1, cn.x, cn.y, amount);
        c2 = jitter(c2, cn.x, cn.y, amount);
    }
    sub.cubic_to(c1, c2, end);
}

/// Moves `p` along the connector normal by a coordinate-seeded amount in `[-amount, amount)`.
fn jitter(p: Point, nx: f64, ny: f64, amount: f64) -> Point {
    let (cx, cy) = ((p.x * JITTER_CELL).floor() as i32, (p.y * JITTER_CELL).floor() as i32);
    let jx = hash_range(cx, cy, JITTER_SEED_X, -1.0, 1.0);
    let jy = hash_range(cx, cy, JITTER_SEED_Y, -1.0, 1.0);
    Point::new(p.x + nx * jx * amount, p.y + ny * jy * amount)
}
