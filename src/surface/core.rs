//! Drawing surface state and tool settings.

use super::error::SurfaceError;
use crate::config::PreviewMode;
use crate::draw::{Canvas, Color, PURPLE, Snapshot, WHITE};
use crate::input::{Point, Tool};
use crate::util;
use log::{debug, info};

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: i32 = 1024;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: i32 = 576;
/// Default pen width in pixels.
pub const DEFAULT_LINE_WIDTH: i32 = 5;

/// Stroke session state machine.
///
/// A session exists exactly while the pointer button is held over the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// No pointer held - moves are ignored
    Idle,
    /// Pointer held down
    Drawing {
        /// Press position; fixed corner/center for rectangle and circle
        anchor: Point,
        /// Last recorded pointer position; start of the next pen/eraser segment
        last: Point,
    },
}

/// Construction parameters for a [`DrawingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceOptions {
    /// Canvas width in pixels (must be positive)
    pub width: i32,
    /// Canvas height in pixels (must be positive)
    pub height: i32,
    /// Fill color for new/cleared canvases and for the eraser
    pub background: Color,
    /// Initially selected tool
    pub tool: Tool,
    /// Initial stroke color
    pub color: Color,
    /// Initial stroke width in pixels (must be positive)
    pub line_width: i32,
    /// How rectangle/circle drags render on the raster
    pub preview_mode: PreviewMode,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: PURPLE,
            tool: Tool::Pen,
            color: WHITE,
            line_width: DEFAULT_LINE_WIDTH,
            preview_mode: PreviewMode::default(),
        }
    }
}

impl SurfaceOptions {
    /// Default options with a custom canvas size.
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

/// Raster drawing surface driven by pointer events.
///
/// Owns the canvas exclusively. Pointer handling lives in `pointer.rs`; this
/// file holds construction, tool settings, clearing, and export.
pub struct DrawingSurface {
    pub(super) canvas: Canvas,
    pub(super) state: DrawingState,
    pub(super) tool: Tool,
    pub(super) color: Color,
    pub(super) line_width: u32,
    pub(super) preview_mode: PreviewMode,
    /// Canvas contents at the start of a scratch-mode shape drag
    pub(super) preview_base: Option<Snapshot>,
}

impl DrawingSurface {
    /// Creates a surface filled with the configured background.
    ///
    /// # Errors
    /// - [`SurfaceError::InvalidConfiguration`] for a non-positive width,
    ///   height, or line width
    /// - [`SurfaceError::Backend`] if Cairo cannot allocate the canvas
    pub fn new(options: SurfaceOptions) -> Result<Self, SurfaceError> {
        if options.width <= 0 || options.height <= 0 {
            return Err(SurfaceError::InvalidConfiguration(format!(
                "surface dimensions must be positive, got {}x{}",
                options.width, options.height
            )));
        }
        let line_width = validate_line_width(options.line_width)?;

        let canvas = Canvas::new(options.width, options.height, options.background)
            .map_err(|err| SurfaceError::Backend(err.to_string()))?;

        debug!(
            "Created {}x{} drawing surface (background {}, preview {:?})",
            options.width,
            options.height,
            options.background.to_hex(),
            options.preview_mode
        );

        Ok(Self {
            canvas,
            state: DrawingState::Idle,
            tool: options.tool,
            color: options.color,
            line_width,
            preview_mode: options.preview_mode,
            preview_base: None,
        })
    }

    pub fn state(&self) -> DrawingState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn line_width(&self) -> u32 {
        self.line_width
    }

    pub fn background(&self) -> Color {
        self.canvas.background()
    }

    pub fn preview_mode(&self) -> PreviewMode {
        self.preview_mode
    }

    pub fn width(&self) -> i32 {
        self.canvas.width()
    }

    pub fn height(&self) -> i32 {
        self.canvas.height()
    }

    /// Selects the tool used by the next move.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool != self.tool {
            debug!("Tool changed: {} -> {}", self.tool, tool);
        }
        self.tool = tool;
    }

    /// Selects the stroke color. The eraser ignores it.
    pub fn set_color(&mut self, color: Color) {
        if color != self.color {
            debug!("Color changed to {}", util::color_to_name(&color));
        }
        self.color = color;
    }

    /// Sets the stroke width in pixels.
    ///
    /// # Errors
    /// Returns [`SurfaceError::InvalidConfiguration`] for zero or negative
    /// widths; the previous width is kept.
    pub fn set_line_width(&mut self, width: i32) -> Result<(), SurfaceError> {
        self.line_width = validate_line_width(width)?;
        Ok(())
    }

    pub fn set_preview_mode(&mut self, mode: PreviewMode) {
        self.preview_mode = mode;
        self.preview_base = None;
    }

    /// Resets the whole canvas to the background color.
    ///
    /// The stroke session (if any) survives; the next move keeps drawing.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.preview_base = None;
        info!("Canvas cleared");
    }

    /// Encodes the current canvas as PNG.
    ///
    /// The returned bytes are a copy; later draws do not affect them.
    pub fn export_image(&self) -> Result<Vec<u8>, SurfaceError> {
        let png = self.canvas.write_png()?;
        debug!(
            "Exported {}x{} canvas ({} bytes)",
            self.width(),
            self.height(),
            png.len()
        );
        Ok(png)
    }

    /// Reads one pixel as `[r, g, b]`; `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 3]> {
        self.canvas.pixel(x, y)
    }

    /// Reads all pixels in row-major order.
    pub fn pixels(&self) -> Vec<[u8; 3]> {
        self.canvas.pixels()
    }
}

fn validate_line_width(width: i32) -> Result<u32, SurfaceError> {
    if width <= 0 {
        return Err(SurfaceError::InvalidConfiguration(format!(
            "line width must be a positive integer, got {width}"
        )));
    }
    Ok(width as u32)
}
