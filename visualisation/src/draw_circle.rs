use macroquad::prelude::*;
use i_triangle::float::triangulatable::Triangulatable;

/// Polygon approximation of a circle around the origin, counter-clockwise,
/// first point on the +x axis.
pub fn circle_points(radius: f32, num_segments: u32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(num_segments as usize);
    let angle_step = 2.0 * std::f32::consts::PI / num_segments as f32;
    for i in 0..num_segments {
        let angle = angle_step * i as f32;
        points.push(Vec2::new(radius * angle.cos(), radius * angle.sin()));
    }
    points
}

/// Triangulates the polygon and draws it at the given position.
pub fn draw_polygon(pos: Vec2, points: &[Vec2], color: Color) {
    let triangulation = points.triangulate().to_triangulation();

    let mesh = Mesh {
        vertices: triangulation.points.iter().map(|point| {
            Vertex {
                position: Vec3::new(pos.x + point.x, pos.y + point.y, 0.0),
                uv: Vec2::default(),
                color: color.into(),
                normal: Vec4::ZERO,
            }
        }).collect(),
        indices: triangulation.indices,
        texture: None,
    };

    draw_mesh(&mesh);
}

/// Filled circle with a configurable tessellation quality. Tessellation
/// happens on every call, so radius changes from window resizes are
/// picked up for free.
pub fn draw_filled_circle(center: Vec2, radius: f32, num_segments: u32, color: Color) {
    draw_polygon(center, &circle_points(radius, num_segments), color);
}
