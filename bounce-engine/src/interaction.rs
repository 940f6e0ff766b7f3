use glam::Vec2;

/// Pixel dimensions of the window pointer coordinates are relative to.
/// Also the source of the simulation's aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 800., height: 600. }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Converts pixel coordinates (origin top-left, y down) to normalized
    /// device coordinates (origin center, y up, x scaled by the aspect
    /// ratio so that the visible range is [-aspect, aspect]).
    pub fn ndc_from_pixels(&self, pixel: Vec2) -> Vec2 {
        Vec2::new(
            (2. * pixel.x / self.width - 1.) * self.aspect(),
            1. - 2. * pixel.y / self.height,
        )
    }
}

/// One frame's worth of pointer state, sampled by the platform layer.
/// Positions are raw pixels; [`crate::World`] converts them itself.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub pixel: Vec2,
    /// Pointer position at the previous frame, for drag velocity
    pub last_pixel: Vec2,
    pub down: bool,
}
