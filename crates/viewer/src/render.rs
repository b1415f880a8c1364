//! Drawing helpers for the dual-plane view.

use macroquad::prelude::*;
use sim::constants::GRAVITY;
use sim::{BernoulliSimulation, Domain};

const PANEL_BG: Color = Color::new(0.68, 0.85, 0.90, 1.0);
const SHADOW: Color = Color::new(0.2, 0.2, 0.2, 1.0);

/// Cosmetic palette indexed by a particle's color tag.
const PARTICLE_PALETTE: [Color; 3] = [
    Color::new(1.0, 1.0, 1.0, 1.0),
    Color::new(0.68, 0.85, 0.90, 1.0),
    Color::new(0.78, 0.78, 1.0, 1.0),
];

/// Panel backgrounds, separators and labels.
pub fn draw_panels(domain: &Domain, middle: f32) {
    let vw = domain.view_width;
    let vh = domain.view_height;

    draw_rectangle(0.0, 0.0, vw, vh, PANEL_BG);
    draw_rectangle(vw + middle, 0.0, vw, vh, PANEL_BG);

    draw_line(vw, 0.0, vw, vh, 3.0, BLACK);
    draw_line(vw + middle, 0.0, vw + middle, vh, 3.0, BLACK);

    draw_text("XY plane", 10.0, 24.0, 24.0, BLACK);
    draw_text("XZ plane", vw + middle + 10.0, 24.0, 24.0, BLACK);

    // Ground lines, derived from the same geometry the physics uses.
    let ground = domain.ground_y(0.0);
    draw_line(0.0, ground, vw, ground, 2.0, DARKGRAY);
    let zx_ground = vh / 2.0 - domain.depth_ground();
    draw_line(vw + middle, zx_ground, vw + middle + vw, zx_ground, 2.0, DARKGRAY);
}

/// Tracer particles on both panels, alpha-faded by remaining life.
pub fn draw_particles(sim: &BernoulliSimulation, domain: &Domain, middle: f32) {
    let vw = domain.view_width;
    let vh = domain.view_height;

    for p in sim.particles() {
        let mut color = PARTICLE_PALETTE[(p.color_tag as usize) % PARTICLE_PALETTE.len()];
        color.a = p.life as f32 * 0.8 / 255.0;
        let size = p.size.max(1.0);

        // XY panel (view-centered frame back to screen).
        let sx = p.position.x + vw / 2.0;
        let sy = p.position.y + vh / 2.0;
        if (0.0..vw).contains(&sx) && (0.0..vh).contains(&sy) {
            draw_circle(sx, sy, size, color);
        }

        // XZ panel: x horizontal, z vertical (inverted).
        let zx = p.position.x + vw / 2.0;
        let zy = vh / 2.0 - p.position.z;
        if (0.0..vw).contains(&zx) && (0.0..vh).contains(&zy) {
            draw_circle(vw + middle + zx, zy, size, color);
        }
    }
}

/// Ball color encodes lift against weight: rising, balanced or falling.
fn ball_color(sim: &BernoulliSimulation) -> Color {
    let forces = sim.forces();
    let weight = forces.mass * GRAVITY;
    if forces.lift > weight * 1.1 {
        GREEN
    } else if forces.lift > weight * 0.9 {
        YELLOW
    } else {
        RED
    }
}

pub fn draw_ball(sim: &BernoulliSimulation, domain: &Domain, middle: f32) {
    let ball = sim.ball_state();
    let color = ball_color(sim);
    let r = ball.radius;

    // XY panel.
    draw_ball_at(ball.position.x, ball.position.y, r, color);

    // XZ panel.
    let zx = domain.view_width + middle + ball.position.x;
    let zy = domain.view_height / 2.0 - ball.position.z;
    draw_ball_at(zx, zy, r, color);
}

fn draw_ball_at(x: f32, y: f32, r: f32, color: Color) {
    draw_circle(x + 3.0, y + 3.0, r, SHADOW);
    draw_circle(x, y, r, color);
    draw_circle_lines(x, y, r, 2.0, BLACK);
    draw_circle(x - r / 3.0, y - r / 3.0, r / 4.0, WHITE);
}

/// Wind component arrows from each panel center: red X, green Y, blue Z.
pub fn draw_wind_vectors(sim: &BernoulliSimulation, domain: &Domain, middle: f32) {
    let wind_v = sim.wind.velocity();
    let scale = 3.0;

    let cx = domain.view_width / 2.0;
    let cy = domain.view_height / 2.0;

    // XY panel: horizontal x component, vertical wind (screen y inverted).
    if (wind_v.x * scale).abs() > 5.0 {
        arrow(cx, cy, cx + wind_v.x * scale, cy, RED);
        draw_text(&format!("wind x: {:.1} m/s", wind_v.x), cx + 10.0, cy - 40.0, 16.0, RED);
    }
    if (wind_v.y * scale).abs() > 5.0 {
        arrow(cx, cy, cx, cy - wind_v.y * scale, GREEN);
        draw_text(&format!("wind y: {:.1} m/s", sim.wind.vertical), cx + 10.0, cy - 20.0, 16.0, GREEN);
    }

    // XZ panel: x horizontal, z vertical.
    let zx_cx = domain.view_width + middle + cx;
    if (wind_v.x * scale).abs() > 5.0 {
        arrow(zx_cx, cy, zx_cx + wind_v.x * scale, cy, RED);
    }
    if (wind_v.z * scale).abs() > 5.0 {
        arrow(zx_cx, cy, zx_cx, cy - wind_v.z * scale, BLUE);
        draw_text(&format!("wind z: {:.1} m/s", wind_v.z), zx_cx + 10.0, cy - 20.0, 16.0, BLUE);
    }

    draw_text(
        &format!("total wind: {:.1} m/s", wind_v.length()),
        10.0,
        domain.view_height - 12.0,
        16.0,
        BLACK,
    );
}

/// Line with a small triangular head at the end point.
fn arrow(x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
    draw_line(x0, y0, x1, y1, 4.0, color);
    let dx = x1 - x0;
    let dy = y1 - y0;
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1.0 {
        return;
    }
    let (ux, uy) = (dx / len, dy / len);
    let (px, py) = (-uy, ux);
    let head = 10.0;
    draw_triangle(
        vec2(x1, y1),
        vec2(x1 - ux * head + px * head * 0.5, y1 - uy * head + py * head * 0.5),
        vec2(x1 - ux * head - px * head * 0.5, y1 - uy * head - py * head * 0.5),
        color,
    );
}

/// Force and pressure readout for the control column.
pub fn draw_physics_info(sim: &BernoulliSimulation, x: f32, y: f32) {
    let forces = sim.forces();
    let ball = sim.ball_state();

    let lines = [
        format!("top pressure: {:.1} Pa", forces.top_pressure),
        format!("bottom pressure: {:.1} Pa", forces.bottom_pressure),
        format!("pressure diff: {:.2} Pa", forces.pressure_diff),
        format!("lift: {:.2} N", forces.lift),
        format!("side: {:.2} N", forces.side),
        format!("front: {:.2} N", forces.front),
        format!("mass: {:.2} kg", ball.mass),
        format!("weight: {:.2} N", ball.mass * GRAVITY),
    ];

    for (i, line) in lines.iter().enumerate() {
        draw_text(line, x, y + i as f32 * 22.0, 18.0, BLACK);
    }
}

pub fn draw_instructions(domain: &Domain) {
    draw_text(
        "drag the ball in either panel - V toggles wind vectors",
        domain.view_width + 20.0,
        domain.view_height - 16.0,
        16.0,
        DARKGRAY,
    );
}
