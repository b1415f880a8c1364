//! Unified physics constants for the Bernoulli simulation.
//!
//! All simulation modules should use these constants instead of defining
//! their own. This prevents drift between subsystems and makes tuning easier.

/// Air density in kg/m³ (sea level, 15°C).
pub const AIR_DENSITY: f32 = 1.225;

/// Gravity acceleration in m/s².
pub const GRAVITY: f32 = 9.81;

/// Atmospheric pressure in Pa. Surface pressures are reported relative
/// to this baseline.
pub const ATMOSPHERIC_PRESSURE: f32 = 101_325.0;

/// Assumed ball material density in kg/m³ (light foam ball).
///
/// Mass is always derived from this and the current radius - it is never
/// stored or integrated separately.
pub const BALL_DENSITY: f32 = 500.0;

/// Pixels per meter. The ball radius lives in pixel space; aerodynamic
/// formulas convert through this scale.
pub const PIXELS_PER_METER: f32 = 100.0;

/// Minimum relative wind speed (m/s) for any aerodynamic response.
///
/// Below this the flow angle is ill-defined, so lift collapses to the
/// external thrust and side/front forces to zero.
pub const MIN_WIND_SPEED: f32 = 0.5;

/// Flow speedup multiplier over the fast (low pressure) side of the ball.
pub const FAST_SIDE_FACTOR: f32 = 1.4;

/// Flow slowdown multiplier under the slow (high pressure) side.
pub const SLOW_SIDE_FACTOR: f32 = 0.8;

/// Base lift coefficient for a sphere.
pub const BASE_LIFT_COEFF: f32 = 0.5;

/// Extra lift coefficient gain at full wind incidence (|sin angle| = 1).
pub const INCIDENCE_LIFT_GAIN: f32 = 0.3;

/// Fraction of full gravity that couples onto the depth axis.
///
/// Models a slight tilt bias of the domain, not true 3-axis gravity.
pub const DEPTH_GRAVITY_COUPLING: f32 = 0.05;

/// Velocity integration gain, pixels·s/m.
///
/// Tuned so the visual motion matches the pixel-space domain;
/// deliberately not a unit-correct value.
pub const VELOCITY_GAIN: f32 = 50.0;

/// Maximum timestep in seconds. Long frame stalls are clamped to this
/// to keep the explicit Euler integration stable.
pub const MAX_TIMESTEP: f32 = 0.1;

/// Smallest selectable ball radius in pixels.
pub const BALL_RADIUS_MIN: f32 = 20.0;

/// Largest selectable ball radius in pixels.
pub const BALL_RADIUS_MAX: f32 = 80.0;
