use macroquad::prelude::*;
use bounce_engine as be;
use crate::draw_circle::draw_filled_circle;

/// Tessellation quality of the ball meshes
const CIRCLE_SEGMENTS: u32 = 50;

pub fn render_world(world: &be::World) {
    clear_background(BLACK);

    // Draw the simulation walls
    let he = world.bounds().half_extents;
    draw_rectangle_lines(-he.x, -he.y, he.x * 2., he.y * 2., 0.02, WHITE);

    // Draw bodies, oldest first, so the render order matches the
    // collision iteration order
    for (idx, body) in world.bodies().iter().enumerate() {
        let color = body.color();
        draw_filled_circle(
            body.pos,
            body.radius(),
            CIRCLE_SEGMENTS,
            Color::new(color.x, color.y, color.z, color.w),
        );

        if world.selected() == Some(idx) {
            draw_circle_lines(body.pos.x, body.pos.y, body.radius() + 0.01, 0.005, WHITE);
        }
    }
}
