//! Tracer particle field: massless points that visualize the wind flow
//! around the ball and regenerate from the upwind side.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::wind::WindState;

/// Default live particle count.
pub const DEFAULT_PARTICLE_COUNT: usize = 300;

/// Fraction of the ambient wind a particle follows.
const WIND_FOLLOW: f32 = 0.3;

/// Vertical streamline nudge gain inside the influence band.
const STREAMLINE_GAIN: f32 = 0.1;

/// Width of the near band (px) in which flow is redirected tangentially.
const NEAR_MARGIN: f32 = 20.0;

/// Width of the outer band (px) in which streamlines curve away.
const STREAM_BAND: f32 = 100.0;

/// Position integration gain (tuned for pixel-space visuals).
const PARTICLE_GAIN: f32 = 60.0;

/// Half-extents of the live-particle bounding box.
const BOUNDS: Vec3 = Vec3::new(800.0, 600.0, 400.0);

/// Half-extents of the randomized spawn volume.
const SPAWN: Vec3 = Vec3::new(400.0, 300.0, 200.0);

/// Per-tick cap on replacement spawns, so die-offs refill gradually.
const MAX_RESPAWN_PER_TICK: usize = 5;

/// A single tracer particle in the view-centered frame.
#[derive(Clone, Copy, Debug)]
pub struct FlowParticle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Remaining life in ticks, counts down to 0.
    pub life: u8,
    /// Display size in pixels (cosmetic).
    pub size: f32,
    /// Palette index for the renderer (cosmetic).
    pub color_tag: u8,
}

impl FlowParticle {
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}

/// Pool of tracer particles with an injected, seedable random source.
pub struct ParticleField {
    pub particles: Vec<FlowParticle>,
    rng: StdRng,
}

impl ParticleField {
    /// Field seeded from system entropy.
    pub fn new(count: usize) -> Self {
        Self::from_rng(count, StdRng::from_entropy())
    }

    /// Deterministic field for tests and reproducible runs.
    pub fn with_seed(count: usize, seed: u64) -> Self {
        Self::from_rng(count, StdRng::seed_from_u64(seed))
    }

    fn from_rng(count: usize, mut rng: StdRng) -> Self {
        let particles = (0..count).map(|_| spawn(&mut rng)).collect();
        Self { particles, rng }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every live particle, then replace expired ones at a bounded
    /// rate. `ball_pos` must already be in the field (view-centered) frame.
    pub fn update(&mut self, dt: f32, wind: &WindState, ball_pos: Vec3, ball_radius: f32) {
        let wind_v = wind.velocity();
        let (speed, _) = wind.effective();
        let (dir_x, dir_z) = wind.horizontal_dir();

        for p in &mut self.particles {
            let delta = p.position - ball_pos;
            let distance = delta.length();

            if distance > ball_radius + NEAR_MARGIN {
                // Far field: follow the ambient wind.
                p.velocity = wind_v * WIND_FOLLOW;

                // Streamline curvature: push away from the ball's vertical
                // center as the particle approaches.
                if distance < ball_radius + STREAM_BAND {
                    let influence = (ball_radius + STREAM_BAND - distance) / STREAM_BAND;
                    let away = if delta.y > 0.0 { 1.0 } else { -1.0 };
                    p.velocity.y += away * influence * speed * STREAMLINE_GAIN;
                }
            } else if distance > ball_radius {
                // Near band: redirect tangentially in the XY plane.
                let tangent = delta.y.atan2(delta.x) + std::f32::consts::FRAC_PI_2;
                p.velocity.x = tangent.cos() * speed * WIND_FOLLOW;
                p.velocity.y = tangent.sin() * speed * WIND_FOLLOW;
            }
            // Inside the radius the particle keeps its last velocity
            // (accepted approximation, no hard collision).

            p.position += p.velocity * dt * PARTICLE_GAIN;

            if p.position.x.abs() > BOUNDS.x
                || p.position.y.abs() > BOUNDS.y
                || p.position.z.abs() > BOUNDS.z
            {
                reset_upwind(p, &mut self.rng, dir_x, dir_z);
            }

            p.life = p.life.saturating_sub(1);
        }

        self.replace_dead();
    }

    /// Spawn up to MAX_RESPAWN_PER_TICK replacements for expired particles,
    /// then prune the expired ones.
    fn replace_dead(&mut self) {
        let dead = self.particles.iter().filter(|p| !p.is_alive()).count();
        for _ in 0..dead.min(MAX_RESPAWN_PER_TICK) {
            let p = spawn(&mut self.rng);
            self.particles.push(p);
        }
        self.particles.retain(|p| p.is_alive());
    }
}

/// Fresh particle at a random point of the spawn volume.
fn spawn(rng: &mut StdRng) -> FlowParticle {
    FlowParticle {
        position: Vec3::new(
            rng.gen_range(-SPAWN.x..SPAWN.x),
            rng.gen_range(-SPAWN.y..SPAWN.y),
            rng.gen_range(-SPAWN.z..SPAWN.z),
        ),
        velocity: Vec3::ZERO,
        life: rng.gen_range(200..=255),
        size: rng.gen_range(1.0..3.0),
        color_tag: rng.gen_range(0..3),
    }
}

/// Re-enter an out-of-bounds particle from the side the wind blows from,
/// so the field keeps filling from upwind.
fn reset_upwind(p: &mut FlowParticle, rng: &mut StdRng, dir_x: f32, dir_z: f32) {
    p.position.x = if dir_x > 0.0 {
        rng.gen_range(-BOUNDS.x..-600.0)
    } else if dir_x < 0.0 {
        rng.gen_range(600.0..BOUNDS.x)
    } else {
        rng.gen_range(-BOUNDS.x..BOUNDS.x)
    };

    p.position.z = if dir_z > 0.0 {
        rng.gen_range(-BOUNDS.z..-200.0)
    } else if dir_z < 0.0 {
        rng.gen_range(200.0..BOUNDS.z)
    } else {
        rng.gen_range(-BOUNDS.z..BOUNDS.z)
    };

    p.position.y = rng.gen_range(-300.0..300.0);
    p.life = rng.gen_range(200..=255);
}
