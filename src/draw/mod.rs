//! Rendering primitives and the raster canvas (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: opaque RGB color with predefined palette constants
//! - [`Canvas`]: fixed-size raster surface mutated in place by every stroke
//! - Stroke functions for the pen, rectangle, and circle tools

pub mod canvas;
pub mod color;
pub mod render;

// Re-export commonly used types at module level
pub use canvas::{Canvas, Snapshot};
pub use color::Color;

pub use color::{BLACK, BLUE, CYAN, GREEN, MAGENTA, PRESETS, PURPLE, RED, WHITE, YELLOW};
