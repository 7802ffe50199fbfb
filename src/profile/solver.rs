//! Closed-form trapezoidal segment solving for a fixed time budget.
//!
//! Given a displacement, boundary velocities and an acceleration bound, the
//! solver finds the cruise velocity that spans the displacement in exactly
//! the requested duration. The solve is performed on a mirrored, ramp-ordered
//! copy of the inputs so only three cases remain, distinguished by where the
//! displacement falls relative to the ramp-only bounds.

use libm::{fabs, sqrt};
use log::warn;

use crate::joint::JointLimits;

use super::segment::Segment;

/// Outcome of one case arm of the cruise-velocity solve.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CruiseSolution {
    /// Closed-form cruise velocity.
    Exact { vc: f64 },
    /// Discriminant fell below zero; cruise clamped to the boundary solution.
    Clamped { vc: f64 },
    /// Displacement is shorter than the ramps allow: stop, then leave with a
    /// re-solved exit velocity so the total displacement matches.
    StopAndGo {
        exit_velocity: f64,
        stop_time_over_budget: bool,
    },
}

// Ramp time between the boundary velocities and the remaining cruise budget.
#[inline]
fn ramp_split(v0: f64, v1: f64, a: f64, t_c: f64) -> (f64, f64) {
    let k = (v1 - v0) / a;
    (k, t_c - k)
}

// Displacement bounds (lower, upper): the distance covered if the whole
// non-ramp budget were spent at v0 or at v1, plus the ramp's own share.
#[inline]
fn displacement_bounds(v0: f64, v1: f64, a: f64, t_c: f64) -> (f64, f64) {
    let (k, l) = ramp_split(v0, v1, a, t_c);
    let ramp = k * (v0 + v1) / 2.0;
    (l * v0 + ramp, l * v1 + ramp)
}

// x_diff > upper: cruise above v1.
//   x_diff = upper + (vc - v1) * (l - (vc - v1) / a)
// solved for vc; a negative discriminant means the budget cannot cover the
// displacement at all and the sqrt is clamped to zero.
fn solve_above_upper(x_diff: f64, v0: f64, v1: f64, a: f64, t_c: f64) -> CruiseSolution {
    let (_, l) = ramp_split(v0, v1, a, t_c);
    let (_, upper) = displacement_bounds(v0, v1, a, t_c);

    let excess = x_diff - upper;
    let disc = l * l - 4.0 * excess / a;
    let vc = v1 + 0.5 * a * (l - sqrt(disc.max(0.0)));

    if disc < 0.0 {
        CruiseSolution::Clamped { vc }
    } else {
        CruiseSolution::Exact { vc }
    }
}

// lower < x_diff <= upper: the cruise velocity lies between the boundary
// velocities and the relation is linear.
fn solve_within_bounds(x_diff: f64, v0: f64, v1: f64, a: f64, t_c: f64) -> CruiseSolution {
    let (_, l) = ramp_split(v0, v1, a, t_c);
    let (lower, _) = displacement_bounds(v0, v1, a, t_c);

    // l == 0 collapses the region to a single point; the whole budget is one
    // ramp and any vc between the boundaries is consistent.
    if fabs(l) < 1e-12 {
        return CruiseSolution::Exact { vc: v1 };
    }

    CruiseSolution::Exact {
        vc: v0 + (x_diff - lower) / l,
    }
}

// x_diff <= lower: cruise below v0, possibly through a direction reversal.
fn solve_below_lower(x_diff: f64, v0: f64, v1: f64, a: f64, t_c: f64) -> CruiseSolution {
    let (_, l) = ramp_split(v0, v1, a, t_c);
    let (lower, _) = displacement_bounds(v0, v1, a, t_c);

    let shortfall = lower - x_diff;
    let disc = l * l - 4.0 * shortfall / a;

    if disc < 0.0 {
        // Cannot dip low enough within the budget: come to a stop, then
        // re-solve the exit velocity from the distance that remains after
        // stopping. The exit is also capped by the acceleration budget left
        // once the stop is done.
        let stop_time = fabs(v0) / a;
        let stop_displacement = stop_time * v0 / 2.0;
        let remaining = (x_diff - stop_displacement).max(0.0);

        CruiseSolution::StopAndGo {
            exit_velocity: f64::min((t_c - stop_time) * a, sqrt(2.0 * a * remaining)),
            stop_time_over_budget: stop_time > t_c,
        }
    } else {
        CruiseSolution::Exact {
            vc: v0 - 0.5 * a * (l - sqrt(disc)),
        }
    }
}

/// Solve the trapezoidal profile reaching `x1` from `x0` in exactly `t_c`
/// seconds, entering at `v0` and leaving at `v1`, under the joint's
/// acceleration bound.
///
/// For feasible inputs the returned profile is continuous in velocity and
/// integrates to exactly `x1 - x0` over `[0, t_c]`. Infeasible inputs (time
/// budget too small for the boundary conditions) are clamped to the nearest
/// solvable profile and logged; the exit velocity of the returned segment may
/// then differ from the requested `v1`.
pub fn generate_segment(
    x0: f64,
    x1: f64,
    limits: &JointLimits,
    v0: f64,
    v1: f64,
    t_c: f64,
) -> Segment {
    let a = limits.max_acceleration;

    // Mirror so the solve always works on a non-negative displacement. The
    // boundary velocities swap roles and flip sign with the time reversal.
    let mirrored = x1 < x0;
    let (mut sv0, mut sv1) = if mirrored { (-v1, -v0) } else { (v0, v1) };
    let x_diff = if mirrored { x0 - x1 } else { x1 - x0 };

    // The ramp math is symmetric in the two boundary velocities; order them.
    if sv0 > sv1 {
        core::mem::swap(&mut sv0, &mut sv1);
    }

    let (lower, upper) = displacement_bounds(sv0, sv1, a, t_c);

    let solution = if x_diff > upper {
        solve_above_upper(x_diff, sv0, sv1, a, t_c)
    } else if x_diff > lower {
        solve_within_bounds(x_diff, sv0, sv1, a, t_c)
    } else {
        solve_below_lower(x_diff, sv0, sv1, a, t_c)
    };

    let mut exit_velocity = v1;
    let vc = match solution {
        CruiseSolution::Exact { vc } => vc,
        CruiseSolution::Clamped { vc } => {
            warn!(
                "cruise discriminant below zero: displacement {} unreachable within {}s, clamping",
                x_diff, t_c
            );
            vc
        }
        CruiseSolution::StopAndGo {
            exit_velocity: exit,
            stop_time_over_budget,
        } => {
            if stop_time_over_budget {
                warn!(
                    "stopping from {} exceeds segment budget {}s, tracking will degrade",
                    sv0, t_c
                );
            }
            exit_velocity = if mirrored { -exit } else { exit };
            0.0
        }
    };

    let vc = if mirrored { -vc } else { vc };

    Segment {
        v0,
        v1: exit_velocity,
        vc,
        t_a: fabs(vc - v0) / a,
        t_b: t_c - fabs(exit_velocity - vc) / a,
        t_c,
        acceleration: a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(max_velocity: f64, max_acceleration: f64) -> JointLimits {
        JointLimits::new(max_velocity, max_acceleration)
    }

    // Trapezoidal rule over the profile, fine enough for 1e-4 displacement
    // accuracy on these spans.
    fn integrate(seg: &Segment) -> f64 {
        let steps = 20_000;
        let dt = seg.t_c / steps as f64;
        let mut x = 0.0;
        for i in 0..steps {
            let t0 = i as f64 * dt;
            let t1 = t0 + dt;
            x += 0.5 * (seg.velocity_at(t0) + seg.velocity_at(t1)) * dt;
        }
        x
    }

    #[test]
    fn test_rest_to_rest_trapezoid() {
        // 0 -> 2 in 3s at a = 1: ramp 1s, cruise at 1.0 for 1s, ramp 1s
        let seg = generate_segment(0.0, 2.0, &limits(1.0, 1.0), 0.0, 0.0, 3.0);

        assert!((seg.vc - 1.0).abs() < 1e-9);
        assert!((seg.t_a - 1.0).abs() < 1e-9);
        assert!((seg.t_b - 2.0).abs() < 1e-9);
        assert!((integrate(&seg) - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_rest_to_rest_mirrored() {
        let seg = generate_segment(2.0, 0.0, &limits(1.0, 1.0), 0.0, 0.0, 3.0);

        assert!((seg.vc + 1.0).abs() < 1e-9);
        assert!((seg.t_a - 1.0).abs() < 1e-9);
        assert!((seg.t_b - 2.0).abs() < 1e-9);
        assert!((integrate(&seg) + 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_triangular_profile() {
        // 0 -> 1 in exactly the triangular minimum: peak hits 1.0 at t = 1
        let seg = generate_segment(0.0, 1.0, &limits(1.0, 1.0), 0.0, 0.0, 2.0);

        assert!((seg.vc - 1.0).abs() < 1e-9);
        assert!((seg.t_a - seg.t_b).abs() < 1e-9);
        assert!((integrate(&seg) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_cruise_between_boundary_velocities() {
        // Entering at 0.5 and leaving at 1.0; displacement sits in the linear
        // region, cruise lands between the two.
        let seg = generate_segment(0.0, 1.5, &limits(2.0, 1.0), 0.5, 1.0, 2.0);

        assert!((seg.vc - 0.75).abs() < 1e-9);
        assert!((seg.t_a - 0.25).abs() < 1e-9);
        assert!((seg.t_b - 1.75).abs() < 1e-9);
        assert!((integrate(&seg) - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_flying_arrival_keeps_cruise() {
        // Already at the speed the displacement needs: cruise then brake
        let seg = generate_segment(0.0, 1.0, &limits(2.0, 1.0), 1.0, 0.0, 1.5);

        assert!((seg.vc - 1.0).abs() < 1e-9);
        assert!(seg.t_a.abs() < 1e-9);
        assert!((seg.t_b - 0.5).abs() < 1e-9);
        assert!((integrate(&seg) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_overshoot_and_return() {
        // Too fast for a close target: the profile dips negative to come back
        let seg = generate_segment(0.0, 0.1, &limits(2.0, 1.0), 1.0, 0.0, 3.0);

        assert!(seg.vc < 0.0);
        assert!((integrate(&seg) - 0.1).abs() < 1e-4);
        assert!(seg.t_a >= 0.0 && seg.t_a <= seg.t_b && seg.t_b <= seg.t_c);
    }

    #[test]
    fn test_budget_too_small_clamps_cruise() {
        // 10 units in 2s at a = 1 is unreachable; cruise clamps to the
        // zero-discriminant solution instead of going non-finite
        let seg = generate_segment(0.0, 10.0, &limits(1.0, 1.0), 0.0, 0.0, 2.0);

        assert!((seg.vc - 1.0).abs() < 1e-9);
        assert!(seg.vc.is_finite());
        assert!(seg.t_a >= 0.0 && seg.t_a <= seg.t_b && seg.t_b <= seg.t_c);
    }

    #[test]
    fn test_stop_and_go_resolves_exit() {
        // Entry velocity forces an overshoot that the budget cannot unwind;
        // the solver stops the joint and re-solves the exit velocity
        let seg = generate_segment(0.0, 0.05, &limits(2.0, 1.0), 1.0, 0.5, 1.0);

        assert_eq!(seg.vc, 0.0);
        assert!(seg.v1.is_finite());
        assert!(seg.v1 >= 0.0);
    }

    #[test]
    fn test_zero_length_segment() {
        let seg = generate_segment(1.0, 1.0, &limits(1.0, 1.0), 0.0, 0.0, 0.0);

        assert_eq!(seg.vc, 0.0);
        assert_eq!(seg.t_a, 0.0);
        assert_eq!(seg.t_c, 0.0);
        assert_eq!(seg.velocity_at(0.5), 0.0);
    }

    #[test]
    fn test_exact_ramp_budget() {
        // t_c equals the direct ramp time: the profile is one ramp, no cruise
        let seg = generate_segment(0.0, 0.5, &limits(2.0, 1.0), 0.0, 1.0, 1.0);

        assert!((integrate(&seg) - 0.5).abs() < 1e-4);
        assert!(seg.t_a <= seg.t_b + 1e-9);
    }
}
