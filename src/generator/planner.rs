//! Sub-goal planning: boundary velocities and the synchronized duration for
//! one waypoint, then one solved segment per involved joint.

use heapless::Vec;
use libm::{fabs, sqrt};
use log::warn;

use crate::joint::{JointLimits, JointRegistry, MAX_JOINTS};
use crate::profile::generate_segment;

use super::active::ActiveGoal;
use super::goal::TrajectoryGoal;

/// Resolved boundary conditions of one joint for the current waypoint.
#[derive(Debug, Clone, Copy)]
struct JointPlan {
    x0: f64,
    x1: f64,
    v0: f64,
    v1: f64,
}

/// Velocity to carry through an intermediate waypoint.
///
/// Zero unless the travel direction `x0 -> x1` continues into `x1 -> x2`.
/// For a through-waypoint the magnitude is capped three ways: the joint's
/// velocity limit, the velocity reachable from `x0` under full acceleration,
/// and the velocity from which `x2` can still be reached with a full stop.
pub(crate) fn cruise_velocity(x0: f64, x1: f64, x2: f64, v0: f64, limits: &JointLimits) -> f64 {
    if (x0 < x1) != (x1 < x2) {
        return 0.0;
    }

    let a = limits.max_acceleration;
    let reachable = sqrt(2.0 * a * fabs(x1 - x0) + v0 * v0);
    let stoppable = sqrt(2.0 * a * fabs(x2 - x1));
    let magnitude = limits.max_velocity.min(reachable).min(stoppable);

    if x2 < x1 {
        -magnitude
    } else {
        magnitude
    }
}

/// Minimum feasible duration for one joint to cover `x0 -> x1` between the
/// boundary velocities.
///
/// Uses the triangular peak estimate `v_middle`; when that exceeds the
/// velocity limit the profile is a trapezoid with a cruise phase at the
/// limit. Floored by the time needed just to stop from `v0`.
pub(crate) fn min_duration(x0: f64, x1: f64, v0: f64, v1: f64, limits: &JointLimits) -> f64 {
    let a = limits.max_acceleration;

    // Work in travel direction so the boundary velocities carry their sign
    // relative to the motion.
    let (v0, v1) = if x1 < x0 { (-v0, -v1) } else { (v0, v1) };

    let x_diff = fabs(x1 - x0);
    let v_middle = sqrt(a * x_diff + (v0 * v0 + v1 * v1) / 2.0);

    let duration = if v_middle > limits.max_velocity {
        let max_vel = limits.max_velocity;

        let x_acc = (max_vel * max_vel - v0 * v0) / (2.0 * a);
        let x_dec = (max_vel * max_vel - v1 * v1) / (2.0 * a);
        let x_rest = x_diff - x_acc - x_dec;

        let t_acc = fabs(max_vel - v0) / a;
        let t_dec = fabs(max_vel - v1) / a;

        t_acc + x_rest / max_vel + t_dec
    } else {
        fabs(v_middle - v0) / a + fabs(v_middle - v1) / a
    };

    duration.max(fabs(v0) / a)
}

// Explicit segment duration: only when this waypoint and its predecessor are
// both scheduled, and the delta is positive.
fn explicit_duration(goal: &TrajectoryGoal, idx: usize) -> Option<f64> {
    if idx == 0 {
        return None;
    }
    let current = goal.points[idx].time_from_start?;
    let previous = goal.points[idx - 1].time_from_start?;

    let delta = current - previous;
    if delta <= 0.0 {
        warn!(
            "waypoint {} scheduled at {} not after its predecessor at {}, computing duration instead",
            idx, current, previous
        );
        return None;
    }
    Some(delta)
}

/// Plan the waypoint at `idx`: resolve boundary conditions per joint, pick
/// the shared duration, and solve every joint's segment against it.
pub(crate) fn plan_sub_goal(joints: &JointRegistry, active: &mut ActiveGoal, idx: usize) {
    let num = active.num_involved();
    let waypoint = &active.goal.points[idx];
    let explicit_velocities = waypoint.velocities.len() == num;
    let next_point = active.goal.points.get(idx + 1);

    let mut plans: Vec<JointPlan, MAX_JOINTS> = Vec::new();
    for i in 0..num {
        let handle = active.mapping[i];
        let state = joints.state(handle);
        let limits = joints.limits(handle);

        let x0 = state.position;
        let target = waypoint.positions[i];
        let x1 = limits.clamp_position(target);
        if x1 != target {
            warn!(
                "target {} for joint '{}' outside [{}, {}], clamping",
                target,
                joints.name(handle),
                limits.min_position,
                limits.max_position
            );
        }

        let v0 = state.velocity;
        let v1 = if explicit_velocities {
            waypoint.velocities[i]
        } else if let Some(next) = next_point {
            let x2 = limits.clamp_position(next.positions[i]);
            cruise_velocity(x0, x1, x2, v0, limits)
        } else {
            // Final waypoint: come to rest
            0.0
        };

        let _ = plans.push(JointPlan { x0, x1, v0, v1 });
    }

    // Shared duration: scheduled delta, or the slowest joint's minimum so
    // every joint arrives together.
    let t_end = match explicit_duration(&active.goal, idx) {
        Some(duration) => duration,
        None => {
            let mut t_end = 0.0_f64;
            for (i, plan) in plans.iter().enumerate() {
                let limits = joints.limits(active.mapping[i]);
                t_end = t_end.max(min_duration(plan.x0, plan.x1, plan.v0, plan.v1, limits));
            }
            t_end
        }
    };

    active.t_end = t_end;
    active.segments.clear();
    active.targets.clear();
    for (i, plan) in plans.iter().enumerate() {
        let limits = joints.limits(active.mapping[i]);
        let _ = active
            .segments
            .push(generate_segment(plan.x0, plan.x1, limits, plan.v0, plan.v1, t_end));
        let _ = active.targets.push(plan.x1);
    }
}
