//! Pointer input types and tool selection.
//!
//! Backends translate their native pointer events into [`PointerEvent`]s;
//! the [`Tool`] picks which draw operation a drag performs.

pub mod events;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Point, PointerEvent};
pub use tool::Tool;
