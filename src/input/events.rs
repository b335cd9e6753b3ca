//! Pointer event types delivered to the drawing surface.

/// A 2D coordinate local to the drawing surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Clamps the point into `[0, width - 1] x [0, height - 1]`.
    ///
    /// Non-finite coordinates collapse to the nearest edge (NaN maps to 0).
    pub fn clamp_to(&self, width: i32, height: i32) -> Point {
        let clamp_axis = |value: f64, extent: i32| {
            let max = (extent - 1).max(0) as f64;
            if value.is_nan() {
                0.0
            } else {
                value.clamp(0.0, max)
            }
        };
        Point::new(clamp_axis(self.x, width), clamp_axis(self.y, height))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as f64, y as f64)
    }
}

/// Pointer events understood by the drawing surface.
///
/// Backends map their native button/motion/leave events onto these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at the given position
    Press(Point),
    /// Pointer moved while the button is held
    Move(Point),
    /// Primary button released
    Release,
    /// Pointer left the drawing surface
    Exit,
}
