use crate::config::PreviewMode;
use crate::input::{Point, PointerEvent, Tool};
use log::{debug, warn};

use super::{DrawingState, DrawingSurface};

impl DrawingSurface {
    /// Dispatches a pointer event to the matching handler.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press(point) => self.press(point),
            PointerEvent::Move(point) => self.move_to(point),
            PointerEvent::Release => self.release(),
            PointerEvent::Exit => self.exit(),
        }
    }

    /// Starts a stroke session at `point` (clamped to the canvas).
    ///
    /// A press while a session is already active is treated as an implicit
    /// release followed by a new press.
    pub fn press(&mut self, point: Point) {
        if self.is_drawing() {
            debug!("Press while drawing; restarting stroke session");
            self.release();
        }

        let point = point.clamp_to(self.width(), self.height());
        self.state = DrawingState::Drawing {
            anchor: point,
            last: point,
        };
        debug!("Stroke started at ({:.1}, {:.1})", point.x, point.y);
    }

    /// Applies the active tool between the session and `point`.
    ///
    /// Ignored while idle. Pen and eraser chain from the last position;
    /// rectangle and circle always measure from the press anchor.
    pub fn move_to(&mut self, point: Point) {
        let DrawingState::Drawing { anchor, last } = self.state else {
            return;
        };

        let point = point.clamp_to(self.width(), self.height());
        let width = self.line_width as f64;

        match self.tool {
            Tool::Pen => {
                self.preview_base = None;
                self.canvas.segment(last, point, self.color, width);
            }
            Tool::Eraser => {
                self.preview_base = None;
                self.canvas.erase(last, point, width);
            }
            Tool::Rectangle => {
                self.prepare_shape_preview();
                self.canvas.rect(anchor, point, self.color, width);
            }
            Tool::Circle => {
                self.prepare_shape_preview();
                let radius = anchor.distance_to(point);
                self.canvas.circle(anchor, radius, self.color, width);
            }
        }

        if self.tool.is_freehand() {
            self.state = DrawingState::Drawing {
                anchor,
                last: point,
            };
        }
    }

    /// Ends the stroke session. Idempotent.
    pub fn release(&mut self) {
        if self.is_drawing() {
            debug!("Stroke finished");
        }
        self.state = DrawingState::Idle;
        self.preview_base = None;
    }

    /// Pointer left the surface; same as [`release`](Self::release).
    pub fn exit(&mut self) {
        self.release();
    }

    /// In scratch mode, rewinds the canvas to how it looked when the current
    /// shape drag began (taking that snapshot on the first shape move).
    fn prepare_shape_preview(&mut self) {
        if self.preview_mode != PreviewMode::Scratch {
            return;
        }

        if let Some(base) = &self.preview_base {
            if let Err(err) = self.canvas.restore(base) {
                warn!("Failed to restore shape preview base: {err}");
            }
            return;
        }

        match self.canvas.snapshot() {
            Ok(snapshot) => self.preview_base = Some(snapshot),
            Err(err) => warn!("Failed to snapshot canvas for shape preview: {err}"),
        }
    }
}
