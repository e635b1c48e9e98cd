// File: crates/skycast-core/src/types.rs
// Summary: Shared types and constants (surface size, chart padding).

/// Default chart surface width in viewBox units.
pub const WIDTH: f64 = 600.0;
/// Default chart surface height in viewBox units.
pub const HEIGHT: f64 = 200.0;

/// Vertical margin reserved above and below the curve so markers and labels
/// never touch the surface edge.
pub const Y_PADDING: f64 = 20.0;

/// Drawable surface size, in viewBox units.
/// Contract: both fields are positive; zero or negative extents are the
/// caller's responsibility.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
