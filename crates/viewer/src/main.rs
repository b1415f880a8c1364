//! Bernoulli Lift - dual-plane viewer
//!
//! Renders the simulation in two panels (XY on the left, XZ on the right)
//! with a control column in between. All physics lives in the `sim` crate;
//! this binary only maps pointer input onto the control surface and draws
//! the resulting state.

use ::glam::Vec2;
use macroquad::prelude::*;
use sim::{BernoulliSimulation, Domain, ViewPlane};

mod render;
mod ui;

/// Width of the control column between the two view panels.
const MIDDLE_WIDTH: f32 = 350.0;

fn window_conf() -> Conf {
    let domain = Domain::default();
    Conf {
        window_title: "Bernoulli Lift - Dual Plane View".to_owned(),
        window_width: (domain.view_width * 2.0 + MIDDLE_WIDTH) as i32,
        window_height: domain.view_height as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let domain = Domain::default();
    let mut sim = BernoulliSimulation::new(domain);
    let mut panel = ui::ControlPanel::new(&sim);

    log::info!(
        "viewer up: {}x{} per panel, {} particles",
        domain.view_width,
        domain.view_height,
        sim.particles().len()
    );

    loop {
        handle_input(&mut sim, &domain);
        sim.update(get_frame_time());

        clear_background(WHITE);
        render::draw_panels(&domain, MIDDLE_WIDTH);
        render::draw_particles(&sim, &domain, MIDDLE_WIDTH);
        render::draw_ball(&sim, &domain, MIDDLE_WIDTH);
        if sim.show_wind_vectors {
            render::draw_wind_vectors(&sim, &domain, MIDDLE_WIDTH);
        }
        panel.sync(&mut sim, domain.view_width + 20.0, 60.0, MIDDLE_WIDTH - 40.0);
        render::draw_physics_info(&sim, domain.view_width + 20.0, 400.0);
        render::draw_instructions(&domain);

        next_frame().await;
    }
}

/// Keyboard toggles and ball dragging in either panel.
fn handle_input(sim: &mut BernoulliSimulation, domain: &Domain) {
    if is_key_pressed(KeyCode::V) {
        sim.toggle_wind_vectors();
    }

    let (mx, my) = mouse_position();
    let ball = sim.ball_state();
    let zx_origin = domain.view_width + MIDDLE_WIDTH;

    if is_mouse_button_pressed(MouseButton::Left) {
        if mx < domain.view_width {
            // XY panel: view coordinates directly.
            let dx = mx - ball.position.x;
            let dy = my - ball.position.y;
            if dx * dx + dy * dy <= ball.radius * ball.radius {
                sim.begin_drag(ViewPlane::Xy, Vec2::new(mx, my));
            }
        } else if mx > zx_origin {
            // ZX panel: x horizontal, z vertical (screen y inverted).
            let px = mx - zx_origin;
            let pz = domain.view_height / 2.0 - my;
            let dx = px - ball.position.x;
            let dz = pz - ball.position.z;
            if dx * dx + dz * dz <= ball.radius * ball.radius {
                sim.begin_drag(ViewPlane::Zx, Vec2::new(px, pz));
            }
        }
    }

    if is_mouse_button_released(MouseButton::Left) {
        sim.end_drag();
    }

    if sim.is_dragging() && is_mouse_button_down(MouseButton::Left) {
        let pointer = match sim.drag_plane() {
            Some(ViewPlane::Zx) => {
                Vec2::new(mx - zx_origin, domain.view_height / 2.0 - my)
            }
            _ => Vec2::new(mx, my),
        };
        sim.update_drag(pointer);
    }
}
