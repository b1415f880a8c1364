//! Bernoulli Lift - Simulation Library
//!
//! Interactive simulation of Bernoulli-effect lift on a sphere in a
//! configurable wind field:
//! - Analytic force model (pressure difference over the fast/slow side)
//! - Rigid ball with gravity, damping and boundary bounces
//! - Tracer particle field that visualizes flow around the ball
//!
//! This crate is framework-agnostic - it handles simulation only.
//! Use the `viewer` crate for rendering with Macroquad.

pub mod ball;
pub mod constants;
pub mod domain;
pub mod field;
pub mod forces;
pub mod simulation;
pub mod wind;

pub use ball::Ball;
pub use domain::Domain;
pub use field::{FlowParticle, ParticleField};
pub use forces::ForceResult;
pub use simulation::{BallState, BernoulliSimulation, ViewPlane};
pub use wind::WindState;
