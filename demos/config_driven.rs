//! Example: Configuration-driven reference generation.
//!
//! This example demonstrates how to:
//! - Parse joint and control-loop configuration from TOML
//! - Build a generator with one joint per config entry
//! - Run a goal at the configured tick rate
//!
//! Run with: `cargo run --example config_driven`

use joint_motion::{parse_config, ReferenceGenerator, Result, TrajectoryGoal};

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Configuration-Driven Example ===\n");

    let toml_content = r#"
[control]
tick_rate_hz = 250.0

[joints.shoulder_pan]
max_velocity = 1.5
max_acceleration = 3.0
min_position = -2.1
max_position = 2.1

[joints.elbow]
max_velocity = 2.0
max_acceleration = 4.0
min_position = 0.0
max_position = 2.3

# Position range omitted: unbounded
[joints.wrist_roll]
max_velocity = 3.0
max_acceleration = 6.0
"#;

    let config = parse_config(toml_content)?;
    let dt = config.control.tick_period();

    println!("Joint Configuration:");
    for name in config.joint_names() {
        let joint = config.joint(name).expect("name from iterator");
        println!(
            "  {:12}  vel {:4.1}  acc {:4.1}  range [{}, {}]",
            name, joint.max_velocity, joint.max_acceleration, joint.min_position, joint.max_position
        );
    }
    println!(
        "  control loop at {} Hz (dt = {}s)\n",
        config.control.tick_rate_hz, dt
    );

    let mut generator = ReferenceGenerator::from_config(&config)?;
    for name in config.joint_names() {
        generator.set_joint_state(name, 0.0, 0.0);
    }

    // The elbow target sits beyond its configured bound; the planner clamps
    // it to 2.3 and logs a warning (RUST_LOG=warn to see it).
    let goal = TrajectoryGoal::builder()
        .joints(&["shoulder_pan", "elbow"])
        .waypoint(&[1.2, 3.0])
        .build()?;
    generator.set_goal(goal)?;

    println!("Moving to pose:");
    let mut references = heapless::Vec::new();
    let mut ticks = 0u32;
    while generator.calculate_references(dt, &mut references) {
        ticks += 1;
    }
    println!("  done after {} ticks ({:.2}s)", ticks, ticks as f64 * dt);

    for name in config.joint_names() {
        let handle = generator.joint_handle(name).expect("registered from config");
        println!(
            "  {:12}  = {:+.4}",
            name,
            generator.joint_state(handle).position
        );
    }

    Ok(())
}
