//! Cubic Hermite interpolation between two kinematic states.

/// Interpolate position and velocity on a Hermite curve.
///
/// The curve starts at `(x0, v0)` and ends at `(x1, v1)` after `duration`
/// seconds; `t` is the elapsed time within that span. Returns the
/// interpolated `(position, velocity)` pair.
///
/// Useful for blending externally-timed setpoints where a full trapezoidal
/// solve is not wanted. `duration` must be positive; `t` is expected within
/// `[0, duration]` (the curve extrapolates outside it).
pub fn interpolate_cubic(x0: f64, v0: f64, x1: f64, v1: f64, t: f64, duration: f64) -> (f64, f64) {
    // Normalize time to [0, 1]
    let f = t / duration;
    let f2 = f * f;
    let f3 = f * f2;

    let x = (2.0 * f3 - 3.0 * f2 + 1.0) * x0
        + (f3 - 2.0 * f2 + f) * (v0 * duration)
        + (-2.0 * f3 + 3.0 * f2) * x1
        + (f3 - f2) * (v1 * duration);

    let v = (6.0 * f2 - 6.0 * f) * x0 / duration
        + (3.0 * f2 - 4.0 * f + 1.0) * v0
        + (-6.0 * f2 + 6.0 * f) * x1 / duration
        + (3.0 * f2 - 2.0 * f) * v1;

    (x, v)
}
