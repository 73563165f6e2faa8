//! Cubic S-curves at both ends around a two-lobe cubic knob. The entry wave is larger than the
//! exit wave.

use super::EdgeFrame;
use crate::edge::EdgeProperty;
use crate::geom::lerp;
use crate::params::CutParams;
use crate::path::SubPath;

pub(super) const DEFAULT_WAVINESS: f64 = 1.5;
/// Entry wave amplitude; the exit wave uses `EXIT_WAVE`.
pub(super) const WAVE_REACH: f64 = 0.12;
const EXIT_WAVE: f64 = 0.10;

pub(super) fn draw(sub: &mut SubPath, f: &EdgeFrame, edge: &EdgeProperty, params: &CutParams) {
    let flat = params.flat_ratio;
    let n = f.normal;
    let wav = edge.waviness.unwrap_or(DEFAULT_WAVINESS) * params.curve_swell * f.swell_scale;

    let p1 = f.at(flat);
    let sw1 = wav * f.len * WAVE_REACH * f.dir;
    sub.cubic_to(
        f.at_off(flat * 0.4, sw1),
        f.at_off(flat * 0.7, -sw1 * 0.5),
        p1,
    );

    let p2 = f.at(1.0 - flat);
    let lift = f.depth * 2.0;
    let peak = f.at_off(0.5, lift);
    sub.cubic_to(p1 + n * (lift * 0.8), peak - f.delta * 0.08, peak);
    sub.cubic_to(peak + f.delta * 0.08, p2 + n * (lift * 0.8), p2);

    let sw2 = wav * f.len * EXIT_WAVE * f.dir;
    sub.cubic_to(
        lerp(p2, f.to, 0.3) - n * sw2,
        lerp(p2, f.to, 0.7) + n * (sw2 * 0.5),
        f.to,
    );
}
