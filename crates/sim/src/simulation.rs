//! Simulation context: owns the wind, ball and particle field, advances
//! them once per tick, and exposes the control/query surface for the UI.

use glam::{Vec2, Vec3};

use crate::ball::Ball;
use crate::constants::MAX_TIMESTEP;
use crate::domain::Domain;
use crate::field::{ParticleField, DEFAULT_PARTICLE_COUNT};
use crate::forces::{self, ForceResult};
use crate::wind::WindState;

/// Which view panel a drag happens in. Xy drives x and y, Zx drives x and z.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewPlane {
    Xy,
    Zx,
}

/// Active drag: pointer offset from the ball center, in plane coordinates,
/// so the ball does not jump to the pointer on grab.
#[derive(Clone, Copy, Debug)]
struct DragState {
    plane: ViewPlane,
    offset: Vec2,
}

/// Read-only ball snapshot for the renderer.
#[derive(Clone, Copy, Debug)]
pub struct BallState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
    pub mass: f32,
}

/// The complete simulation state, advanced by [`update`](Self::update).
///
/// Single-threaded by design: one tick integrates the ball, then the
/// particle field, and every tick is atomic - no partial state is ever
/// observable from outside.
pub struct BernoulliSimulation {
    pub wind: WindState,
    pub ball: Ball,
    pub field: ParticleField,
    pub domain: Domain,
    forces: ForceResult,
    drag: Option<DragState>,
    /// Cosmetic flag read by the renderer; no effect on simulation state.
    pub show_wind_vectors: bool,
}

impl BernoulliSimulation {
    pub fn new(domain: Domain) -> Self {
        Self::build(domain, ParticleField::new(DEFAULT_PARTICLE_COUNT))
    }

    /// Deterministic simulation for tests and reproducible runs.
    pub fn with_seed(domain: Domain, seed: u64) -> Self {
        Self::build(domain, ParticleField::with_seed(DEFAULT_PARTICLE_COUNT, seed))
    }

    fn build(domain: Domain, field: ParticleField) -> Self {
        let wind = WindState::default();
        let ball = Ball::new(&domain);
        let forces = forces::evaluate(&wind, ball.radius);
        Self {
            wind,
            ball,
            field,
            domain,
            forces,
            drag: None,
            show_wind_vectors: true,
        }
    }

    /// Advance one tick. `dt` is clamped to [`MAX_TIMESTEP`] so long frame
    /// stalls cannot destabilize the integration.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.min(MAX_TIMESTEP);

        if self.drag.is_none() {
            self.forces = self.ball.update(dt, &self.wind, &self.domain);
        } else {
            // Motion is frozen while dragging, but the force readout stays live.
            self.forces = forces::evaluate(&self.wind, self.ball.radius);
        }

        let ball_in_field = self.domain.to_field_frame(self.ball.position);
        self.field
            .update(dt, &self.wind, ball_in_field, self.ball.radius);
    }

    // --- control surface ------------------------------------------------

    pub fn set_wind_speed(&mut self, speed: f32) {
        self.wind.speed = speed;
    }

    pub fn set_wind_angle_deg(&mut self, deg: f32) {
        self.wind.set_angle_deg(deg);
    }

    pub fn set_wind_vertical(&mut self, vertical: f32) {
        self.wind.vertical = vertical;
    }

    pub fn set_vertical_thrust(&mut self, thrust: f32) {
        self.wind.vertical_thrust = thrust.clamp(-1000.0, 1000.0);
    }

    pub fn set_side_force_coefficient(&mut self, coeff: f32) {
        self.wind.side_force_coeff = coeff.clamp(0.0, 1.0);
    }

    pub fn set_ball_radius(&mut self, radius: f32) {
        self.ball.set_radius(radius);
    }

    pub fn toggle_wind_vectors(&mut self) {
        self.show_wind_vectors = !self.show_wind_vectors;
    }

    /// Start dragging the ball in the given plane. Freezes physics and
    /// zeroes the velocity; the pointer is in plane coordinates
    /// (Xy: view x/y, Zx: view x / world z).
    pub fn begin_drag(&mut self, plane: ViewPlane, pointer: Vec2) {
        let ball_in_plane = match plane {
            ViewPlane::Xy => Vec2::new(self.ball.position.x, self.ball.position.y),
            ViewPlane::Zx => Vec2::new(self.ball.position.x, self.ball.position.z),
        };
        self.drag = Some(DragState {
            plane,
            offset: pointer - ball_in_plane,
        });
        self.ball.velocity = Vec3::ZERO;
        log::debug!("drag start in {:?} at {:?}", plane, pointer);
    }

    /// Move the dragged ball, clamped into the domain. No-op without an
    /// active drag.
    pub fn update_drag(&mut self, pointer: Vec2) {
        let Some(drag) = self.drag else { return };
        let target = pointer - drag.offset;
        let r = self.ball.radius;
        match drag.plane {
            ViewPlane::Xy => {
                self.ball.position.x = target
                    .x
                    .clamp(self.domain.left_wall(r), self.domain.right_wall(r));
                self.ball.position.y = target.y.clamp(r, self.domain.view_height - r);
            }
            ViewPlane::Zx => {
                self.ball.position.x = target
                    .x
                    .clamp(self.domain.left_wall(r), self.domain.right_wall(r));
                self.ball.position.z = target
                    .y
                    .clamp(self.domain.depth_min(), self.domain.depth_max());
            }
        }
    }

    /// Release the ball; physics resumes next tick from zero velocity.
    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            log::debug!("drag end at {:?}", self.ball.position);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_plane(&self) -> Option<ViewPlane> {
        self.drag.map(|d| d.plane)
    }

    // --- query surface --------------------------------------------------

    pub fn ball_state(&self) -> BallState {
        BallState {
            position: self.ball.position,
            velocity: self.ball.velocity,
            radius: self.ball.radius,
            mass: forces::ball_mass(self.ball.radius),
        }
    }

    /// Forces computed on the most recent tick.
    pub fn forces(&self) -> ForceResult {
        self.forces
    }

    pub fn particles(&self) -> &[crate::field::FlowParticle] {
        &self.field.particles
    }
}
