//! Integration tests for the Bernoulli lift simulation.
//! Run with: cargo test -p sim
//!
//! These verify the core contract:
//! - P1: sub-threshold wind produces thrust-only lift
//! - P2: negated wind speed equals a 180° angle rotation
//! - P3: near-band particles flow tangentially around the ball
//! - P4: the ball never leaves the domain
//! - P5: drag freezes physics
//! - P6: the particle pool stays bounded

use glam::{Vec2, Vec3};
use sim::forces;
use sim::{BernoulliSimulation, Domain, ParticleField, ViewPlane, WindState};

const DT: f32 = 1.0 / 60.0;

/// P1: below the minimum wind threshold, lift is exactly the external
/// thrust and the drag forces vanish, regardless of angle.
#[test]
fn sub_threshold_wind_gives_thrust_only() {
    for speed in [0.0, 0.1, 0.3, -0.4] {
        for angle in [0.0, 90.0, 200.0, 315.0] {
            let wind = WindState {
                speed,
                angle_deg: angle,
                vertical: 0.0,
                vertical_thrust: -42.0,
                side_force_coeff: 0.9,
            };
            let f = forces::evaluate(&wind, 50.0);
            assert_eq!(f.lift, -42.0, "speed={speed} angle={angle}");
            assert_eq!(f.side, 0.0);
            assert_eq!(f.front, 0.0);
            assert_eq!(f.pressure_diff, 0.0);
        }
    }

    // Exactly at the threshold (inclusive): still thrust-only.
    let wind = WindState {
        speed: 0.5,
        angle_deg: 0.0,
        vertical: 0.0,
        vertical_thrust: 7.0,
        side_force_coeff: 0.5,
    };
    let f = sim::forces::evaluate(&wind, 50.0);
    assert_eq!(f.lift, 7.0);
    assert_eq!(f.side, 0.0);
}

/// P2: flipping the sign of the speed is the same wind as rotating the
/// angle by 180°.
#[test]
fn negated_speed_equals_rotated_angle() {
    for (speed, angle) in [(25.0, 123.0), (10.0, 0.0), (48.0, 271.5)] {
        let negated = WindState {
            speed: -speed,
            angle_deg: angle,
            vertical: 5.0,
            ..WindState::default()
        };
        let rotated = WindState {
            speed,
            angle_deg: (angle + 180.0).rem_euclid(360.0),
            vertical: 5.0,
            ..WindState::default()
        };
        let a = forces::evaluate(&negated, 40.0);
        let b = forces::evaluate(&rotated, 40.0);
        assert!((a.lift - b.lift).abs() < 1e-3);
        assert!((a.side - b.side).abs() < 1e-3);
        assert!((a.front - b.front).abs() < 1e-3);
    }
}

/// Golden value regression: speed 20 m/s, angle 0, minimum radius.
///
/// Pressure difference = ½·1.225·((20·1.4)² − (20·0.8)²) = 323.4 Pa,
/// area = π·0.2² m², lift coefficient 0.5 ⇒ lift ≈ 20.32 N.
#[test]
fn golden_lift_at_reference_conditions() {
    let wind = WindState {
        speed: 20.0,
        angle_deg: 0.0,
        vertical: 0.0,
        vertical_thrust: 0.0,
        side_force_coeff: 0.2,
    };
    let f = forces::evaluate(&wind, 20.0);

    let expected = 323.4 * std::f32::consts::PI * 0.04 * 0.5;
    assert!(f.lift > 0.0);
    assert!((f.lift - expected).abs() < 0.05, "lift = {}", f.lift);
    assert!((f.lift - 20.32).abs() < 0.05);

    // Deterministic for identical inputs.
    let again = forces::evaluate(&wind, 20.0);
    assert_eq!(f.lift, again.lift);
    assert_eq!(f.mass, again.mass);
}

/// P4: under extreme forcing the ball stays inside the domain, and at a
/// boundary its velocity never points out of the domain.
#[test]
fn ball_never_leaves_the_domain() {
    let domain = Domain::default();
    let mut sim = BernoulliSimulation::with_seed(domain, 4);
    sim.set_wind_speed(50.0);
    sim.set_wind_vertical(-20.0);
    sim.set_vertical_thrust(1000.0);
    sim.set_side_force_coefficient(1.0);

    for tick in 0..3000 {
        if tick == 1000 {
            sim.set_vertical_thrust(-1000.0);
            sim.set_wind_angle_deg(200.0);
        }
        sim.update(DT);

        let ball = sim.ball_state();
        let r = ball.radius;
        let eps = 1e-3;
        assert!(ball.position.y <= domain.ground_y(r) + eps, "tick {tick}");
        assert!(ball.position.y >= domain.ceiling_y(r) - eps, "tick {tick}");
        assert!(ball.position.x >= domain.left_wall(r) - eps);
        assert!(ball.position.x <= domain.right_wall(r) + eps);
        assert!(ball.position.z >= domain.depth_min() - eps);
        assert!(ball.position.z <= domain.depth_max() + eps);

        // Post-bounce velocity always points back into the domain.
        if (ball.position.y - domain.ground_y(r)).abs() < eps {
            assert!(ball.velocity.y <= 0.0);
        }
        if (ball.position.y - domain.ceiling_y(r)).abs() < eps {
            assert!(ball.velocity.y >= 0.0);
        }
    }
}

/// P3: a particle in the near band ends the tick with a velocity
/// perpendicular to its radius vector (XY plane tangential flow).
#[test]
fn near_band_particles_move_tangentially() {
    let wind = WindState {
        speed: 20.0,
        ..WindState::default()
    };
    let ball_pos = Vec3::ZERO;
    let radius = 30.0;

    for angle_deg in [0.0_f32, 45.0, 130.0, 250.0, 340.0] {
        let rad = angle_deg.to_radians();
        let offset = Vec3::new(rad.cos(), rad.sin(), 0.0) * (radius + 10.0);

        let mut field = ParticleField::with_seed(1, 5);
        field.particles[0].position = ball_pos + offset;
        field.update(DT, &wind, ball_pos, radius);

        let v = field.particles[0].velocity;
        let dot = v.x * offset.x + v.y * offset.y;
        let scale = v.length() * offset.length();
        assert!(scale > 0.0, "tangential velocity must be nonzero");
        assert!(
            dot.abs() < 1e-3 * scale,
            "angle {angle_deg}: dot = {dot}, v = {v:?}"
        );
    }
}

/// Streamline curvature: inside the outer influence band (but outside the
/// near band) particles get a vertical nudge that pushes them away from
/// the ball's vertical center, on top of the ambient wind.
#[test]
fn influence_band_curves_streamlines_away_from_ball() {
    let wind = WindState {
        speed: 20.0,
        vertical: 0.0,
        ..WindState::default()
    };
    let ball_pos = Vec3::ZERO;
    let radius = 30.0;
    let ambient_vy = wind.vertical * 0.3;

    // Above the ball (y grows down, dy > 0): nudged further down.
    let mut field = ParticleField::with_seed(1, 13);
    field.particles[0].position = ball_pos + Vec3::new(0.0, radius + 50.0, 0.0);
    field.update(DT, &wind, ball_pos, radius);
    assert!(
        field.particles[0].velocity.y > ambient_vy,
        "dy > 0 must push away: vy = {}",
        field.particles[0].velocity.y
    );

    // Below the ball (dy < 0): nudged further up.
    let mut field = ParticleField::with_seed(1, 13);
    field.particles[0].position = ball_pos - Vec3::new(0.0, radius + 50.0, 0.0);
    field.update(DT, &wind, ball_pos, radius);
    assert!(
        field.particles[0].velocity.y < ambient_vy,
        "dy < 0 must push away: vy = {}",
        field.particles[0].velocity.y
    );

    // Outside the band the velocity is the plain 0.3-scaled wind.
    let mut field = ParticleField::with_seed(1, 13);
    field.particles[0].position = ball_pos + Vec3::new(0.0, radius + 200.0, 0.0);
    field.update(DT, &wind, ball_pos, radius);
    assert_eq!(field.particles[0].velocity.y, ambient_vy);
}

/// P5: starting a drag zeroes the velocity and update() leaves the dragged
/// ball untouched even under large forces.
#[test]
fn drag_freezes_ball_physics() {
    let mut sim = BernoulliSimulation::with_seed(Domain::default(), 6);
    sim.set_vertical_thrust(1000.0);
    sim.set_wind_speed(50.0);
    for _ in 0..30 {
        sim.update(DT);
    }

    let grab = Vec2::new(sim.ball.position.x, sim.ball.position.y);
    sim.begin_drag(ViewPlane::Xy, grab);
    assert_eq!(sim.ball_state().velocity, Vec3::ZERO);
    assert!(sim.is_dragging());

    let held = sim.ball_state();
    for _ in 0..100 {
        sim.update(DT);
    }
    assert_eq!(sim.ball_state().position, held.position);
    assert_eq!(sim.ball_state().velocity, Vec3::ZERO);

    // Dragging moves the ball directly, clamped into the domain.
    sim.update_drag(Vec2::new(-500.0, -500.0));
    let r = sim.ball_state().radius;
    assert_eq!(sim.ball_state().position.x, sim.domain.left_wall(r));

    sim.end_drag();
    assert!(!sim.is_dragging());
}

/// P6: the particle pool never grows past its initial population, and
/// never empties, across many ticks and wind changes.
#[test]
fn particle_pool_stays_bounded() {
    let mut sim = BernoulliSimulation::with_seed(Domain::default(), 8);
    let initial = sim.particles().len();

    for tick in 0..5000 {
        if tick % 500 == 0 {
            sim.set_wind_angle_deg(tick as f32 * 0.7);
            sim.set_wind_speed(if tick % 1000 == 0 { 50.0 } else { -30.0 });
        }
        sim.update(DT);

        let n = sim.particles().len();
        assert!(n <= initial, "pool grew to {n} at tick {tick}");
        assert!(n > 0, "pool died out at tick {tick}");
    }
}

/// Snapshot surface sanity: mass matches the cube law and the particle
/// iterator restarts each query.
#[test]
fn query_surface_snapshots() {
    let mut sim = BernoulliSimulation::with_seed(Domain::default(), 10);
    sim.set_ball_radius(40.0);
    let m1 = sim.ball_state().mass;
    sim.set_ball_radius(80.0);
    let m2 = sim.ball_state().mass;
    assert!((m2 / m1 - 8.0).abs() < 1e-3);

    sim.update(DT);
    let a = sim.particles().len();
    let b = sim.particles().len();
    assert_eq!(a, b);
}
