//! Ambient wind state and vector resolution.

use glam::Vec3;

/// Externally controlled wind environment.
///
/// Axis convention: x is lateral (screen left/right), y is vertical with
/// positive pointing down (screen convention), z is depth.
#[derive(Clone, Copy, Debug)]
pub struct WindState {
    /// Horizontal wind speed in m/s. A negative value means "wind from the
    /// other side": it is folded into a positive speed with the angle
    /// rotated 180° before any use.
    pub speed: f32,
    /// Direction of the horizontal wind component in degrees, kept in [0, 360).
    pub angle_deg: f32,
    /// Independent vertical wind component in m/s.
    pub vertical: f32,
    /// Externally injected auxiliary lift in Newtons, independent of wind.
    pub vertical_thrust: f32,
    /// Drag-to-sideforce conversion factor in [0, 1].
    pub side_force_coeff: f32,
}

impl Default for WindState {
    fn default() -> Self {
        Self {
            speed: 20.0,
            angle_deg: 0.0,
            vertical: 0.0,
            vertical_thrust: 0.0,
            side_force_coeff: 0.2,
        }
    }
}

impl WindState {
    /// Set the wind direction, normalizing to [0, 360).
    pub fn set_angle_deg(&mut self, deg: f32) {
        self.angle_deg = deg.rem_euclid(360.0);
    }

    /// Effective (speed, angle_deg) after folding a negative speed into a
    /// 180° rotation. The returned speed is always >= 0.
    pub fn effective(&self) -> (f32, f32) {
        if self.speed < 0.0 {
            (-self.speed, (self.angle_deg + 180.0).rem_euclid(360.0))
        } else {
            (self.speed, self.angle_deg)
        }
    }

    /// Unit direction of the horizontal wind component (x, z).
    pub fn horizontal_dir(&self) -> (f32, f32) {
        let (_, angle) = self.effective();
        let rad = angle.to_radians();
        (rad.cos(), rad.sin())
    }

    /// Resolve the wind into a 3-axis vector:
    /// x/z from speed and angle, y from the vertical component.
    pub fn velocity(&self) -> Vec3 {
        let (speed, angle) = self.effective();
        let rad = angle.to_radians();
        Vec3::new(speed * rad.cos(), self.vertical, speed * rad.sin())
    }
}
