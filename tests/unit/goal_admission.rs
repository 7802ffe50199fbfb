//! Unit tests for goal construction and admission.

use joint_motion::{
    AdmissionError, Error, GoalError, JointLimits, ReferenceGenerator, TrajectoryGoal,
    MAX_JOINTS,
};

fn measured_generator(names: &[&str]) -> ReferenceGenerator {
    let mut generator = ReferenceGenerator::new();
    for name in names {
        generator.init_joint(name, JointLimits::new(1.0, 1.0)).unwrap();
        generator.set_joint_state(name, 0.0, 0.0);
    }
    generator
}

/// Test that the builder caps the joint list at the registry capacity.
#[test]
fn test_builder_rejects_too_many_joints() {
    let mut builder = TrajectoryGoal::builder();
    for i in 0..=MAX_JOINTS {
        let name = format!("joint_{}", i);
        builder = builder.joint(&name);
    }

    assert!(matches!(
        builder.build(),
        Err(Error::Goal(GoalError::TooManyJoints))
    ));
}

/// Test that a wrong-length velocity list is not an admission error; it is
/// treated as unspecified and the goal still runs to rest.
#[test]
fn test_velocity_arity_mismatch_tolerated() {
    let mut generator = measured_generator(&["j1"]);

    let goal = TrajectoryGoal::builder()
        .joint("j1")
        .waypoint_with_velocities(&[1.0], &[0.5, 0.2])
        .build()
        .unwrap();
    generator.set_goal(goal).expect("velocities ignored, goal accepted");

    let mut references = heapless::Vec::new();
    let mut ticks = 0u32;
    while generator.calculate_references(0.01, &mut references) {
        ticks += 1;
        assert!(ticks < 1000, "goal did not complete");
    }

    let j1 = generator.joint_handle("j1").unwrap();
    let state = generator.joint_state(j1);
    assert!((state.position - 1.0).abs() < 0.01);
    // Final waypoint without usable velocities: comes to rest
    assert!(state.velocity.abs() < 0.01);
}

/// Test that position arity is checked against the joint list per waypoint.
#[test]
fn test_position_arity_mismatch_rejected() {
    let mut generator = measured_generator(&["j1", "j2"]);

    let goal = TrajectoryGoal::builder()
        .joints(&["j1", "j2"])
        .waypoint(&[0.5, 0.5])
        .waypoint(&[1.0])
        .build()
        .unwrap();

    let err = generator.set_goal(goal).unwrap_err();
    match err {
        Error::Goal(GoalError::Rejected { reasons }) => {
            assert_eq!(reasons.len(), 1);
            assert!(matches!(
                reasons[0],
                AdmissionError::WaypointArityMismatch {
                    waypoint: 1,
                    expected: 2,
                    actual: 1
                }
            ));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

/// Test that cancellation requests pass the same admission checks.
#[test]
fn test_cancel_with_unknown_joint_rejected() {
    let mut generator = measured_generator(&["j1"]);

    let result = generator.set_goal(TrajectoryGoal::cancel(&["ghost"]).unwrap());
    match result {
        Err(Error::Goal(GoalError::Rejected { reasons })) => {
            assert!(matches!(reasons[0], AdmissionError::UnknownJoint(_)));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

/// Test that a cancel naming no joints still clears the active goal. The
/// joints it leaves claimed stay unavailable until their next measurement.
#[test]
fn test_empty_cancel_clears_goal_without_releasing() {
    let mut generator = measured_generator(&["j1"]);

    let goal = TrajectoryGoal::builder()
        .joint("j1")
        .waypoint(&[1.0])
        .build()
        .unwrap();
    generator.set_goal(goal).unwrap();

    generator
        .set_goal(TrajectoryGoal::builder().build().unwrap())
        .unwrap();

    let j1 = generator.joint_handle("j1").unwrap();
    assert!(!generator.has_active_goal());
    assert!(!generator.is_idle(j1));

    // The next measurement makes the joint eligible again
    generator.set_joint_state("j1", 0.0, 0.0);
    assert!(generator.is_idle(j1));
}

/// Test the fully specified waypoint path: the schedule of the first
/// waypoint is ignored (segment durations come from deltas between
/// consecutive scheduled waypoints), the second delta governs its segment,
/// and the explicit boundary velocity flows through planning.
#[test]
fn test_scheduled_waypoint_with_explicit_velocity() {
    let mut generator = measured_generator(&["j1"]);

    let goal = TrajectoryGoal::builder()
        .joint("j1")
        .waypoint_full(&[0.5], &[0.5], 1.0)
        .waypoint_full(&[1.5], &[0.0], 3.0)
        .build()
        .unwrap();
    generator.set_goal(goal).unwrap();

    let mut references = heapless::Vec::new();
    generator.calculate_references(0.01, &mut references);
    let first = generator.progress().unwrap();
    assert_eq!(first.current_waypoint, Some(0));
    // No previous scheduled waypoint, so the first segment runs at the
    // shortest feasible duration instead of the requested 1.0s
    assert!((1.05..1.15).contains(&first.segment_duration));

    let mut second_duration = None;
    let mut ticks = 0u32;
    while generator.calculate_references(0.01, &mut references) {
        ticks += 1;
        assert!(ticks < 1000, "goal did not complete");
        let progress = generator.progress().unwrap();
        if progress.current_waypoint == Some(1) && second_duration.is_none() {
            second_duration = Some(progress.segment_duration);
        }
    }

    // Delta between the scheduled waypoints, 3.0 - 1.0
    assert_eq!(second_duration, Some(2.0));

    let j1 = generator.joint_handle("j1").unwrap();
    let state = generator.joint_state(j1);
    assert!((state.position - 1.5).abs() < 0.01);
    assert!(state.velocity.abs() < 0.01);
}
