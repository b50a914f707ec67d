//! Planform math: the wing seen from above.
//!
//! Spanwise distance `y` runs from the root (0) to the tip (half-span);
//! chordwise `x` runs aft from the root leading edge. With linear sweep and
//! linear taper every spar line is straight, so its slope is constant along
//! the span.

use crate::spec::WingSpec;

/// Smallest cosine used when widening spar notches; caps widening at 5x
pub const MIN_NOTCH_COSINE: f64 = 0.2;

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.max(lo).min(hi)
}

/// Local chord at parametric station `t` (0 = root, 1 = tip)
pub fn chord_at(spec: &WingSpec, t: f64) -> f64 {
    lerp(spec.root_chord, spec.tip_chord, t)
}

/// Leading-edge offset at parametric station `t`
pub fn leading_edge_at(spec: &WingSpec, t: f64) -> f64 {
    spec.sweep_le * t
}

/// dx/dy of the spar line at chord fraction `x_frac`
pub fn spar_slope(spec: &WingSpec, x_frac: f64) -> f64 {
    let half_span = spec.half_span();
    let d_le_dy = spec.sweep_le / half_span;
    let d_chord_dy = (spec.tip_chord - spec.root_chord) / half_span;
    d_le_dy + x_frac * d_chord_dy
}

/// Planform angle of the spar line from the spanwise axis, in radians
pub fn spar_angle(spec: &WingSpec, x_frac: f64) -> f64 {
    spar_slope(spec, x_frac).atan()
}

/// Factor a square notch grows by so an angled spar still passes through.
///
/// This is `1 / cos(angle)` with the cosine floored at [`MIN_NOTCH_COSINE`];
/// a tunable approximation rather than an exact projection.
pub fn notch_widen_factor(spec: &WingSpec, x_frac: f64) -> f64 {
    1.0 / spar_angle(spec, x_frac).cos().max(MIN_NOTCH_COSINE)
}

/// Root and tip x positions of the spar line
pub fn spar_endpoints(spec: &WingSpec, x_frac: f64) -> (f64, f64) {
    let root = x_frac * spec.root_chord;
    let tip = spec.sweep_le + x_frac * spec.tip_chord;
    (root, tip)
}

/// True length of the spar line from root to tip in the planform
pub fn spar_length(spec: &WingSpec, x_frac: f64) -> f64 {
    let (root, tip) = spar_endpoints(spec, x_frac);
    spec.half_span().hypot(tip - root)
}
