//! Domain geometry: the axis-aligned box the ball lives in and the
//! mapping between view coordinates and the particle field frame.

use glam::Vec3;

/// Margin between the domain edge and the ball's resting surfaces, pixels.
const EDGE_MARGIN: f32 = 50.0;

/// Simulation domain sized after one view panel.
///
/// The ball moves in view coordinates (origin top-left, y down); tracer
/// particles live in a frame centered on the view. Boundaries on the
/// vertical and lateral axes depend on the ball radius so the ball surface,
/// not its center, touches the wall.
#[derive(Clone, Copy, Debug)]
pub struct Domain {
    pub view_width: f32,
    pub view_height: f32,
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            view_width: 525.0,
            view_height: 800.0,
        }
    }
}

impl Domain {
    /// Resting ground height for a ball of the given radius (y grows down).
    pub fn ground_y(&self, radius: f32) -> f32 {
        self.view_height - radius - EDGE_MARGIN
    }

    /// Ceiling height for a ball of the given radius.
    pub fn ceiling_y(&self, radius: f32) -> f32 {
        radius + EDGE_MARGIN
    }

    pub fn left_wall(&self, radius: f32) -> f32 {
        radius
    }

    pub fn right_wall(&self, radius: f32) -> f32 {
        self.view_width - radius
    }

    /// Symmetric depth bounds (z axis).
    pub fn depth_min(&self) -> f32 {
        -self.view_height / 3.0
    }

    pub fn depth_max(&self) -> f32 {
        self.view_height / 3.0
    }

    /// Second resting plane on the depth axis, inside [depth_min, depth_max].
    pub fn depth_ground(&self) -> f32 {
        self.view_height / 4.0
    }

    /// Initial ball position: horizontally centered, near the ground.
    pub fn spawn_point(&self) -> Vec3 {
        Vec3::new(self.view_width / 2.0, self.view_height - 100.0, 0.0)
    }

    /// Map a view-frame position (ball space) into the view-centered frame
    /// the particle field uses.
    pub fn to_field_frame(&self, view_pos: Vec3) -> Vec3 {
        Vec3::new(
            view_pos.x - self.view_width / 2.0,
            view_pos.y - self.view_height / 2.0,
            view_pos.z,
        )
    }
}
