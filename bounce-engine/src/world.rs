use crate::{ default, Body, PointerSample, Viewport };
use crate::physics_utils::resolve_disk_collision;

use glam::Vec2;
use itertools::Itertools;
use log::{ debug, warn };

/// Timesteps below this floor would blow up the drag-velocity division, so
/// the drag velocity just keeps its previous value instead.
const MIN_DRAG_DT: f32 = 1e-6;

/// Start-of-run tuning for a [`World`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Acceleration applied to every body, in NDC units per second squared
    pub gravity: Vec2,
    /// Air drag coefficient, per second
    pub drag: f32,
    /// Default energy retention factor for wall bounces of newly authored
    /// bodies, in [0, 1]
    pub wall_damping: f32,
    /// Restitution of body-body impacts, 1 is perfectly elastic
    pub restitution: f32,
    /// Upper bound on the per-frame timestep, in seconds
    pub max_dt: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0., -9.8),
            drag: 2.5,
            wall_damping: 0.5,
            restitution: 1.,
            max_dt: 0.016,
        }
    }
}

/// Axis-aligned simulation walls, symmetric around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub half_extents: Vec2,
}

pub struct World {
    config: SimConfig,
    viewport: Viewport,
    bodies: Vec<Body>,
    selected: Option<usize>,
    drag_velocity: Vec2,
}

impl World {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            viewport: default(),
            bodies: default(),
            selected: None,
            drag_velocity: Vec2::ZERO,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SimConfig {
        &mut self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn push_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Index of the body currently held by the pointer, if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            half_extents: Vec2::new(self.viewport.aspect(), 1.),
        }
    }

    /// Updates the window dimensions the simulation lives in: the walls
    /// follow the new aspect ratio and every body's radius is re-derived
    /// from its authoring radius.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if !(width > 0.) || !(height > 0.) {
            warn!("ignoring degenerate viewport {width}x{height}");
            return;
        }
        if Viewport::new(width, height) == self.viewport {
            return;
        }

        self.viewport = Viewport::new(width, height);
        for body in &mut self.bodies {
            body.refresh_radius(height);
        }
        debug!("viewport set to {width}x{height}");
    }

    /// Selects the first body (in population order) whose center lies
    /// within its radius of the press position.
    pub fn pointer_pressed(&mut self, pixel: Vec2) {
        let ndc = self.viewport.ndc_from_pixels(pixel);
        self.selected = self.bodies.iter()
            .position(|body| body.pos.distance(ndc) <= body.radius());
        self.drag_velocity = Vec2::ZERO;
    }

    /// Throws the held body with the velocity of the drag gesture.
    pub fn pointer_released(&mut self) {
        if let Some(idx) = self.selected.take() {
            self.bodies[idx].vel = self.drag_velocity;
        }
    }

    /// Advances the simulation by one frame.
    ///
    /// `dt` is clamped to `[0, max_dt]` to bound integration error and
    /// collision over-penetration on slow frames. Order within the step:
    /// gravity, drag and wall resolution per body, then the pointer-drag
    /// override, then a single pass over all unordered pairs (`i < j`,
    /// stable population order), then position integration. A held body
    /// skips forces and integration so it sits exactly at the pointer.
    pub fn step(&mut self, dt: f32, pointer: &PointerSample) {
        let dt = dt.clamp(0., self.config.max_dt);
        let bounds = self.bounds();
        let held = if pointer.down { self.selected } else { None };

        for (idx, body) in self.bodies.iter_mut().enumerate() {
            if held == Some(idx) {
                continue;
            }
            body.apply_impulse(self.config.gravity * dt);
            body.apply_drag(self.config.drag, dt);
            body.resolve_bounds(bounds);
        }

        if let Some(idx) = held {
            let ndc = self.viewport.ndc_from_pixels(pointer.pixel);
            let last_ndc = self.viewport.ndc_from_pixels(pointer.last_pixel);

            let body = &mut self.bodies[idx];
            body.last_pos = body.pos;
            body.pos = ndc;

            if dt >= MIN_DRAG_DT {
                self.drag_velocity = (ndc - last_ndc) / dt;
            }
        }

        for [i, j] in (0..self.bodies.len()).array_combinations::<2>() {
            self.resolve_pair(i, j);
        }

        for (idx, body) in self.bodies.iter_mut().enumerate() {
            if held == Some(idx) {
                continue;
            }
            body.integrate(dt);
        }
    }

    fn resolve_pair(&mut self, i: usize, j: usize) {
        debug_assert!(i < j);
        let restitution = self.config.restitution;

        let (head, tail) = self.bodies.split_at_mut(j);
        let (a, b) = (&mut head[i], &mut tail[0]);

        let Some(impact) = resolve_disk_collision(
            a.pos, a.vel, a.mass(), a.radius(),
            b.pos, b.vel, b.mass(), b.radius(),
            restitution,
        ) else {
            return;
        };

        a.pos += impact.separation;
        b.pos -= impact.separation;
        a.vel = impact.vel1;
        b.vel = impact.vel2;
    }
}
