//! Headless diagnostic: sweep wind speeds and report where the ball ends up.
//!
//! Run with: cargo run -p sim --example hover_diagnostic

use sim::constants::GRAVITY;
use sim::{BernoulliSimulation, Domain};

fn main() {
    let domain = Domain::default();

    println!("speed  lift(N)  weight(N)  final_y  final_vy");
    for speed in [0, 5, 10, 20, 30, 40, 50] {
        let mut sim = BernoulliSimulation::with_seed(domain, 42);
        sim.set_wind_speed(speed as f32);

        for _ in 0..1800 {
            sim.update(1.0 / 60.0);
        }

        let ball = sim.ball_state();
        let forces = sim.forces();
        println!(
            "{:>5} {:>8.2} {:>10.2} {:>8.1} {:>9.2}",
            speed,
            forces.lift,
            forces.mass * GRAVITY,
            ball.position.y,
            ball.velocity.y,
        );
    }

    let ground = domain.ground_y(30.0);
    println!("\nground level for r=30: {ground:.1}");
}
