//! Analytic force model: Bernoulli-style lift plus linear drag side forces.
//!
//! The Bernoulli analogy used here: the flow over one side of the ball is
//! assumed faster than over the other (fixed multipliers), so its local
//! pressure is lower, and the pressure difference over the cross section
//! produces lift. This is a parameterized approximation for visual
//! plausibility, not a fluid-dynamics solve.

use crate::constants::*;
use crate::wind::WindState;

/// Instantaneous force model output. Transient - recomputed every
/// evaluation, never integrated.
#[derive(Clone, Copy, Debug)]
pub struct ForceResult {
    /// Vertical aerodynamic force plus external thrust, Newtons.
    pub lift: f32,
    /// Lateral (x axis) drag force, Newtons.
    pub side: f32,
    /// Depth (z axis) drag force, Newtons.
    pub front: f32,
    /// Ball mass derived from the current radius, kg.
    pub mass: f32,
    /// Local pressure over the fast side, Pa.
    pub top_pressure: f32,
    /// Local pressure under the slow side, Pa.
    pub bottom_pressure: f32,
    /// bottom_pressure - top_pressure, Pa. Zero below the wind threshold.
    pub pressure_diff: f32,
}

impl Default for ForceResult {
    fn default() -> Self {
        Self {
            lift: 0.0,
            side: 0.0,
            front: 0.0,
            mass: 0.0,
            top_pressure: ATMOSPHERIC_PRESSURE,
            bottom_pressure: ATMOSPHERIC_PRESSURE,
            pressure_diff: 0.0,
        }
    }
}

/// Ball mass in kg for a radius given in pixels: sphere volume at the
/// assumed material density. Always recomputed from the radius.
pub fn ball_mass(radius: f32) -> f32 {
    let radius_m = radius / PIXELS_PER_METER;
    (4.0 / 3.0) * std::f32::consts::PI * radius_m.powi(3) * BALL_DENSITY
}

/// Evaluate the force model for the given wind state and ball radius.
///
/// Pure function: deterministic for identical inputs and safe to call
/// multiple times per tick. Thrust and the side-force coefficient travel
/// inside [`WindState`].
pub fn evaluate(wind: &WindState, radius: f32) -> ForceResult {
    let wind_v = wind.velocity();
    let relative_speed = wind_v.length();

    let radius_m = radius / PIXELS_PER_METER;
    let area = std::f32::consts::PI * radius_m * radius_m;
    let mass = ball_mass(radius);

    if relative_speed <= MIN_WIND_SPEED {
        // Flow angle is ill-defined near zero wind: only manual thrust,
        // pressures collapse to ambient.
        return ForceResult {
            lift: wind.vertical_thrust,
            mass,
            ..ForceResult::default()
        };
    }

    // Asymmetric flow speeds over the two sides of the ball.
    let fast_velocity = relative_speed * FAST_SIDE_FACTOR;
    let slow_velocity = relative_speed * SLOW_SIDE_FACTOR;

    // More incidence (vertical wind component relative to the horizontal
    // direction) gives a higher lift coefficient.
    let (_, angle) = wind.effective();
    let incidence = angle.to_radians().sin().abs() * INCIDENCE_LIFT_GAIN;
    let lift_coeff = BASE_LIFT_COEFF * (1.0 + incidence);

    // Bernoulli: pressure = ambient - ½ρv².
    let top_pressure = ATMOSPHERIC_PRESSURE - 0.5 * AIR_DENSITY * fast_velocity * fast_velocity;
    let bottom_pressure = ATMOSPHERIC_PRESSURE - 0.5 * AIR_DENSITY * slow_velocity * slow_velocity;
    let pressure_diff = bottom_pressure - top_pressure;

    let lift = pressure_diff * area * lift_coeff + wind.vertical_thrust;
    let side = wind_v.x * AIR_DENSITY * area * wind.side_force_coeff;
    let front = wind_v.z * AIR_DENSITY * area * wind.side_force_coeff;

    ForceResult {
        lift,
        side,
        front,
        mass,
        top_pressure,
        bottom_pressure,
        pressure_diff,
    }
}
