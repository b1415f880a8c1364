//! Minimal immediate-mode sliders for the control column.

use macroquad::prelude::*;
use sim::BernoulliSimulation;

const TRACK_HEIGHT: f32 = 16.0;
const ROW_HEIGHT: f32 = 48.0;

struct Slider {
    label: &'static str,
    min: f32,
    max: f32,
    value: f32,
    dragging: bool,
}

impl Slider {
    fn new(label: &'static str, min: f32, max: f32, value: f32) -> Self {
        Self {
            label,
            min,
            max,
            value,
            dragging: false,
        }
    }

    /// Draw the slider and absorb mouse input. Returns true when the value
    /// changed this frame.
    fn update_and_draw(&mut self, x: f32, y: f32, width: f32) -> bool {
        let (mx, my) = mouse_position();
        let over_track =
            mx >= x && mx <= x + width && my >= y - 5.0 && my <= y + TRACK_HEIGHT + 5.0;

        if is_mouse_button_pressed(MouseButton::Left) && over_track {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }

        let mut changed = false;
        if self.dragging {
            let ratio = ((mx - x) / width).clamp(0.0, 1.0);
            let value = self.min + ratio * (self.max - self.min);
            if value != self.value {
                self.value = value;
                changed = true;
            }
        }

        // Track, handle, label.
        draw_rectangle(x, y, width, TRACK_HEIGHT, LIGHTGRAY);
        draw_rectangle_lines(x, y, width, TRACK_HEIGHT, 1.0, BLACK);
        let ratio = (self.value - self.min) / (self.max - self.min);
        let handle_x = x + ratio * width;
        draw_rectangle(handle_x - 4.0, y - 4.0, 8.0, TRACK_HEIGHT + 8.0, BLACK);
        draw_text(
            &format!("{}: {:.1}", self.label, self.value),
            x,
            y - 8.0,
            16.0,
            BLACK,
        );

        changed
    }
}

/// The six control sliders, kept in sync with the simulation's control
/// surface.
pub struct ControlPanel {
    wind_speed: Slider,
    wind_angle: Slider,
    wind_vertical: Slider,
    ball_radius: Slider,
    thrust: Slider,
    side_coeff: Slider,
}

impl ControlPanel {
    pub fn new(sim: &BernoulliSimulation) -> Self {
        Self {
            wind_speed: Slider::new("wind speed (m/s)", -50.0, 50.0, sim.wind.speed),
            wind_angle: Slider::new("wind angle (deg)", 0.0, 360.0, sim.wind.angle_deg),
            wind_vertical: Slider::new("vertical wind (m/s)", -20.0, 20.0, sim.wind.vertical),
            ball_radius: Slider::new("ball radius", 20.0, 80.0, sim.ball_state().radius),
            thrust: Slider::new("thrust (N)", -1000.0, 1000.0, sim.wind.vertical_thrust),
            side_coeff: Slider::new("side force coeff", 0.0, 1.0, sim.wind.side_force_coeff),
        }
    }

    /// Draw all sliders and push any edits into the simulation.
    pub fn sync(&mut self, sim: &mut BernoulliSimulation, x: f32, y: f32, width: f32) {
        let mut row = y;

        if self.wind_speed.update_and_draw(x, row, width) {
            sim.set_wind_speed(self.wind_speed.value);
        }
        row += ROW_HEIGHT;
        if self.wind_angle.update_and_draw(x, row, width) {
            sim.set_wind_angle_deg(self.wind_angle.value);
        }
        row += ROW_HEIGHT;
        if self.wind_vertical.update_and_draw(x, row, width) {
            sim.set_wind_vertical(self.wind_vertical.value);
        }
        row += ROW_HEIGHT;
        if self.ball_radius.update_and_draw(x, row, width) {
            sim.set_ball_radius(self.ball_radius.value);
        }
        row += ROW_HEIGHT;
        if self.thrust.update_and_draw(x, row, width) {
            sim.set_vertical_thrust(self.thrust.value);
        }
        row += ROW_HEIGHT;
        if self.side_coeff.update_and_draw(x, row, width) {
            sim.set_side_force_coefficient(self.side_coeff.value);
        }
    }
}
