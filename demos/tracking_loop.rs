//! Tracking loop example.
//!
//! Demonstrates the full goal lifecycle against an in-memory plant:
//! - registering joints and feeding initial measurements
//! - submitting a multi-waypoint goal for two joints
//! - ticking the generator at a fixed control rate
//! - superseding a running goal after a fresh measurement
//!
//! Run with: `cargo run --example tracking_loop`

use joint_motion::{JointLimits, ReferenceGenerator, TrajectoryGoal};

const DT: f64 = 0.01;

fn main() {
    env_logger::init();

    println!("=== Tracking Loop Example ===\n");

    let mut generator = ReferenceGenerator::new();
    generator
        .init_joint(
            "shoulder_pan",
            JointLimits::new(1.5, 3.0).with_position_range(-2.1, 2.1),
        )
        .expect("register shoulder_pan");
    generator
        .init_joint(
            "elbow",
            JointLimits::new(2.0, 4.0).with_position_range(0.0, 2.3),
        )
        .expect("register elbow");

    // One measurement per joint before the first goal
    generator.set_joint_state("shoulder_pan", 0.0, 0.0);
    generator.set_joint_state("elbow", 0.1, 0.0);

    let goal = TrajectoryGoal::builder()
        .joints(&["shoulder_pan", "elbow"])
        .waypoint(&[1.0, 0.8])
        .waypoint(&[-0.5, 1.6])
        .build()
        .expect("well-formed goal");
    generator.set_goal(goal).expect("goal admitted");

    let shoulder = generator.joint_handle("shoulder_pan").unwrap();
    let elbow = generator.joint_handle("elbow").unwrap();

    println!("Executing a 2-waypoint goal at {} Hz:", 1.0 / DT);

    let mut references = heapless::Vec::new();
    let mut tick = 0u32;
    while generator.calculate_references(DT, &mut references) {
        tick += 1;
        if tick % 50 == 0 {
            let progress = generator.progress().expect("goal active");
            println!(
                "  t={:6.2}s  waypoint {}/{}  shoulder_pan={:+.3}  elbow={:+.3}",
                tick as f64 * DT,
                progress.current_waypoint.map_or(0, |i| i + 1),
                progress.num_waypoints,
                references[shoulder.index()],
                references[elbow.index()],
            );
        }
    }

    println!("\nGoal complete after {} ticks:", tick);
    println!(
        "  shoulder_pan = {:+.4}",
        generator.joint_state(shoulder).position
    );
    println!(
        "  elbow        = {:+.4}",
        generator.joint_state(elbow).position
    );

    // A fresh measurement re-idles a joint, so a new goal can replace the
    // one still executing.
    println!("\nStarting a long move, then superseding it mid-flight...");
    let long_move = TrajectoryGoal::builder()
        .joint("shoulder_pan")
        .waypoint(&[2.0])
        .build()
        .expect("well-formed goal");
    generator.set_goal(long_move).expect("goal admitted");

    for _ in 0..100 {
        generator.calculate_references(DT, &mut references);
    }
    let measured = generator.joint_state(shoulder).position;
    let measured_velocity = generator.joint_state(shoulder).velocity;
    println!("  tracked shoulder_pan at {:+.3} after 1s", measured);

    generator.set_joint_state("shoulder_pan", measured, measured_velocity);
    let home = TrajectoryGoal::builder()
        .joint("shoulder_pan")
        .waypoint(&[0.0])
        .build()
        .expect("well-formed goal");
    generator.set_goal(home).expect("replacement admitted");

    tick = 0;
    while generator.calculate_references(DT, &mut references) {
        tick += 1;
    }
    println!(
        "  back home at {:+.4} after {} more ticks",
        generator.joint_state(shoulder).position,
        tick
    );
}
