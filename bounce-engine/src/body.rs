use crate::Bounds;

use glam::f32::{ Vec2, Vec4 };
use thiserror::Error;

/// Viewport height (in pixels) that authoring-time radii are relative to.
/// See [`Body::refresh_radius`].
pub const REFERENCE_VIEWPORT_HEIGHT: f32 = 600.;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BodyError {
    #[error("body radius must be strictly positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("body mass must be strictly positive, got {0}")]
    NonPositiveMass(f32),

    #[error("wall damping must be within [0, 1], got {0}")]
    DampingOutOfRange(f32),
}

/// One circular rigid body, in normalized device coordinates
/// (`y` in [-1, 1], `x` in [-aspect, aspect]).
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    /// Position at the start of the last integration step
    pub last_pos: Vec2,
    pub vel: Vec2,
    radius: f32,
    base_radius: f32,
    mass: f32,
    damping: f32,
    color: Vec4,
}

impl Body {
    /// Fails when `radius` or `mass` is not strictly positive; the
    /// integrator and the collision resolver assume both.
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, mass: f32) -> Result<Self, BodyError> {
        if !(radius > 0.) {
            return Err(BodyError::NonPositiveRadius(radius));
        }
        if !(mass > 0.) {
            return Err(BodyError::NonPositiveMass(mass));
        }

        Ok(Self {
            pos,
            last_pos: pos,
            vel,
            radius,
            base_radius: radius,
            mass,
            damping: 0.5,
            color: Vec4::ONE,
        })
    }

    pub fn with_color(mut self, color: Vec4) -> Self {
        self.color = color;
        self
    }

    /// Energy retention factor on wall bounce, 1 keeps all of it.
    pub fn with_damping(mut self, damping: f32) -> Result<Self, BodyError> {
        if !(0. ..=1.).contains(&damping) {
            return Err(BodyError::DampingOutOfRange(damping));
        }
        self.damping = damping;
        Ok(self)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }

    pub fn color(&self) -> Vec4 {
        self.color
    }

    pub fn apply_impulse(&mut self, dv: Vec2) {
        self.vel += dv;
    }

    /// `drag * dt` must stay below 1 or the velocity flips sign;
    /// [`crate::World::step`] clamps the timestep so this holds.
    pub fn apply_drag(&mut self, drag: f32, dt: f32) {
        self.vel *= 1. - drag * dt;
    }

    /// Advances the position by one explicit Euler step, per axis with the
    /// same `dt`, recording the previous position.
    pub fn integrate(&mut self, dt: f32) {
        self.last_pos = self.pos;
        self.pos.x += self.vel.x * dt;
        self.pos.y += self.vel.y * dt;
    }

    /// Walls are checked in a fixed order (left, right, bottom, top) and
    /// every violated wall is corrected in the same call, so a body pushed
    /// into a corner gets both axes fixed at once. A fixed point once the
    /// constraints hold.
    pub fn resolve_bounds(&mut self, bounds: Bounds) {
        let he = bounds.half_extents;

        if self.pos.x - self.radius < -he.x {
            self.pos.x = -he.x + self.radius;
            self.vel.x = -self.vel.x * self.damping;
        }
        if self.pos.x + self.radius > he.x {
            self.pos.x = he.x - self.radius;
            self.vel.x = -self.vel.x * self.damping;
        }
        if self.pos.y - self.radius < -he.y {
            self.pos.y = -he.y + self.radius;
            self.vel.y = -self.vel.y * self.damping;
        }
        if self.pos.y + self.radius > he.y {
            self.pos.y = he.y - self.radius;
            self.vel.y = -self.vel.y * self.damping;
        }
    }

    /// The authoring radius is relative to [`REFERENCE_VIEWPORT_HEIGHT`],
    /// so the effective radius follows window resizes.
    pub fn refresh_radius(&mut self, viewport_height: f32) {
        debug_assert!(viewport_height > 0.);
        self.radius = self.base_radius * (viewport_height / REFERENCE_VIEWPORT_HEIGHT);
    }
}
