//! Rigid ball: force integration, damping and boundary collisions.

use glam::Vec3;

use crate::constants::*;
use crate::domain::Domain;
use crate::forces::{self, ForceResult};
use crate::wind::WindState;

/// Speed threshold (px/s) below which a ball touching a boundary settles
/// instead of bouncing, to avoid infinite micro-bounces.
const SETTLE_SPEED: f32 = 2.0;

/// Velocity kept after a bounce (energy-losing restitution).
const RESTITUTION: f32 = 0.3;

/// Ambient velocity damping applied every tick.
const AMBIENT_DAMPING: f32 = 0.98;

/// Strong damping applied when the ball hovers just above its resting
/// height with little vertical speed.
const GROUND_DAMPING: f32 = 0.9;

/// Distance from the resting height (px) that counts as "near ground".
const GROUND_SNAP_DIST: f32 = 10.0;

/// Vertical speed (px/s) below which the near-ground damping kicks in.
const GROUND_SLOW_SPEED: f32 = 5.0;

/// The simulated rigid body.
///
/// Position and velocity are in view coordinates (y grows down). Mass is
/// not stored: it is derived from the radius on every force evaluation.
#[derive(Clone, Copy, Debug)]
pub struct Ball {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Radius in pixels, kept within [BALL_RADIUS_MIN, BALL_RADIUS_MAX].
    pub radius: f32,
}

impl Ball {
    /// Create a ball resting near the ground of the given domain.
    pub fn new(domain: &Domain) -> Self {
        Self {
            position: domain.spawn_point(),
            velocity: Vec3::ZERO,
            radius: 30.0,
        }
    }

    /// Set the radius, clamped to the configured bounds.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.clamp(BALL_RADIUS_MIN, BALL_RADIUS_MAX);
    }

    /// Advance one tick under the force model, gravity and damping, then
    /// resolve boundary collisions. Returns the evaluated forces.
    ///
    /// The caller is responsible for skipping this while the ball is under
    /// manual drag control.
    pub fn update(&mut self, dt: f32, wind: &WindState, domain: &Domain) -> ForceResult {
        let forces = forces::evaluate(wind, self.radius);
        let mass = forces.mass;

        // Primary gravity on the vertical axis, small coupling onto depth.
        let weight_y = mass * GRAVITY;
        let weight_z = mass * GRAVITY * DEPTH_GRAVITY_COUPLING;

        let net = Vec3::new(
            forces.side,
            forces.lift - weight_y,
            forces.front - weight_z,
        );
        let accel = if mass > 0.0 { net / mass } else { Vec3::ZERO };

        self.velocity += accel * dt * VELOCITY_GAIN;
        self.position += self.velocity * dt;

        // Strong damping when settling on the ground, weak damping always.
        let ground = domain.ground_y(self.radius);
        if (self.position.y - ground).abs() < GROUND_SNAP_DIST
            && self.velocity.y.abs() < GROUND_SLOW_SPEED
        {
            self.velocity *= GROUND_DAMPING;
        } else {
            self.velocity *= AMBIENT_DAMPING;
        }

        self.resolve_boundaries(domain);
        forces
    }

    /// Clamp the ball into the domain, settling or bouncing on each axis
    /// independently.
    pub fn resolve_boundaries(&mut self, domain: &Domain) {
        // Vertical: ground below, ceiling above.
        let ground = domain.ground_y(self.radius);
        let ceiling = domain.ceiling_y(self.radius);
        if self.position.y >= ground {
            self.position.y = ground;
            self.velocity.y = settle_or_bounce(self.velocity.y, -1.0);
        } else if self.position.y <= ceiling {
            self.position.y = ceiling;
            self.velocity.y = settle_or_bounce(self.velocity.y, 1.0);
        }

        // Lateral walls.
        let left = domain.left_wall(self.radius);
        let right = domain.right_wall(self.radius);
        if self.position.x <= left {
            self.position.x = left;
            self.velocity.x = settle_or_bounce(self.velocity.x, 1.0);
        } else if self.position.x >= right {
            self.position.x = right;
            self.velocity.x = settle_or_bounce(self.velocity.x, -1.0);
        }

        // Depth walls.
        if self.position.z >= domain.depth_max() {
            self.position.z = domain.depth_max();
            self.velocity.z = settle_or_bounce(self.velocity.z, -1.0);
        } else if self.position.z <= domain.depth_min() {
            self.position.z = domain.depth_min();
            self.velocity.z = settle_or_bounce(self.velocity.z, 1.0);
        }

        // The depth axis has a second resting plane inside the walls, so
        // the ball can come to rest before reaching the far depth bound.
        if self.position.z >= domain.depth_ground() {
            self.position.z = domain.depth_ground();
            self.velocity.z = settle_or_bounce(self.velocity.z, -1.0);
        }
    }
}

/// Settle (zero) a boundary-normal velocity when it is slow, otherwise
/// reflect it back into the domain with restitution. `into_domain` is the
/// sign of the inward direction on this axis.
fn settle_or_bounce(v: f32, into_domain: f32) -> f32 {
    if v.abs() < SETTLE_SPEED {
        0.0
    } else {
        into_domain * v.abs() * RESTITUTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_contact_settles_fast_contact_bounces() {
        assert_eq!(settle_or_bounce(1.5, -1.0), 0.0);
        assert_eq!(settle_or_bounce(-1.9, 1.0), 0.0);
        let bounced = settle_or_bounce(10.0, -1.0);
        assert!((bounced + 3.0).abs() < 1e-6);
        let bounced_up = settle_or_bounce(-8.0, 1.0);
        assert!((bounced_up - 2.4).abs() < 1e-6);
    }

    #[test]
    fn depth_ground_is_a_second_resting_plane() {
        let domain = Domain::default();
        let mut ball = Ball::new(&domain);
        ball.position.z = domain.depth_max() - 1.0;
        ball.velocity.z = 1.0;
        ball.resolve_boundaries(&domain);
        // Past the inner depth-ground plane the ball is pulled back onto it.
        assert!(ball.position.z <= domain.depth_ground() + 1e-4);
        assert_eq!(ball.velocity.z, 0.0);
    }

    #[test]
    fn radius_clamps_to_bounds() {
        let domain = Domain::default();
        let mut ball = Ball::new(&domain);
        ball.set_radius(5.0);
        assert_eq!(ball.radius, BALL_RADIUS_MIN);
        ball.set_radius(500.0);
        assert_eq!(ball.radius, BALL_RADIUS_MAX);
        ball.set_radius(42.0);
        assert_eq!(ball.radius, 42.0);
    }
}
