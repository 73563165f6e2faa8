//! Eight quadratic sub-segments: small sine waves along the edge and a deep sine-weighted knob
//! around the middle.

use std::f64::consts::PI;

use super::EdgeFrame;
use crate::edge::EdgeProperty;
use crate::params::CutParams;
use crate::path::SubPath;

const SEGMENTS: usize = 8;
pub(super) const DEFAULT_WAVINESS: f64 = 1.0;
/// Wave amplitude away from the knob; the waves riding on the knob use `KNOB_WAVE`.
pub(super) const WAVE_REACH: f64 = 0.04;
const KNOB_WAVE: f64 = 0.03;

pub(super) fn draw(sub: &mut SubPath, f: &EdgeFrame, edge: &EdgeProperty, params: &CutParams) {
    let flat = params.flat_ratio;
    let wav = edge.waviness.unwrap_or(DEFAULT_WAVINESS) * params.curve_swell * f.swell_scale;
    let (knob_start, knob_end) = (0.5 - flat, 0.5 + flat);

    for i in 0..SEGMENTS {
        let t1 = i as f64 / SEGMENTS as f64;
        let t2 = (i + 1) as f64 / SEGMENTS as f64;
        let tmid = (t1 + t2) / 2.0;
        let end = if i + 1 == SEGMENTS { f.to } else { f.at(t2) };

        let offset = if tmid > knob_start && tmid < knob_end {
            let knob_t = (tmid - knob_start) / (flat * 2.0);
            let knob = (knob_t * PI).sin() * f.depth * 2.5;
            knob + (i as f64 * 2.3).sin() * wav * f.len * KNOB_WAVE
        } else {
            (i as f64 * 3.7 + t1 * 12.0).sin() * wav * f.len * WAVE_REACH * f.dir
        };
        sub.quad_to(f.at_off(tmid, offset), end);
    }
}
