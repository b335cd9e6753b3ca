//! Raster drawing surface for the artboard gallery.
//!
//! Exposes the drawing surface alongside the supporting modules it relies on
//! (configuration, export, publishing, stroke scripts) so that front ends can
//! share one implementation of the stroke semantics.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod publish;
pub mod script;
pub mod surface;
pub mod ticker;
pub mod util;

pub use config::Config;
pub use surface::{DrawingSurface, SurfaceError, SurfaceOptions};
