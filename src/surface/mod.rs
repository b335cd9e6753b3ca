//! The drawing surface: a raster canvas plus the stroke state machine.
//!
//! [`DrawingSurface`] interprets press/move/release pointer events into pen,
//! eraser, rectangle, and circle strokes, and exports the canvas as PNG.

mod core;
mod error;
mod pointer;

pub use self::core::{
    DEFAULT_HEIGHT, DEFAULT_LINE_WIDTH, DEFAULT_WIDTH, DrawingState, DrawingSurface,
    SurfaceOptions,
};
pub use error::SurfaceError;
