//! Stroke scripts: recorded pointer and tool events in TOML form.
//!
//! A script is a list of `[[step]]` tables replayed against a
//! [`DrawingSurface`]:
//!
//! ```toml
//! [[step]]
//! op = "tool"
//! tool = "circle"
//!
//! [[step]]
//! op = "press"
//! x = 200
//! y = 150
//!
//! [[step]]
//! op = "move"
//! x = 250
//! y = 150
//!
//! [[step]]
//! op = "release"
//! ```

pub mod replay;

pub use replay::{Pacing, replay_instant, replay_paced};

use crate::config::ColorSpec;
use crate::input::{Point, PointerEvent, Tool};
use crate::surface::DrawingSurface;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum ScriptStep {
    Press { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Release,
    Exit,
    Tool { tool: Tool },
    Color { color: ColorSpec },
    Width { width: i32 },
    Clear,
}

impl ScriptStep {
    /// The pointer event this step represents, if it is one.
    pub fn pointer_event(&self) -> Option<PointerEvent> {
        match self {
            ScriptStep::Press { x, y } => Some(PointerEvent::Press(Point::new(*x, *y))),
            ScriptStep::Move { x, y } => Some(PointerEvent::Move(Point::new(*x, *y))),
            ScriptStep::Release => Some(PointerEvent::Release),
            ScriptStep::Exit => Some(PointerEvent::Exit),
            _ => None,
        }
    }

    /// Applies the step to `surface`.
    ///
    /// Unknown colors and non-positive widths are logged and skipped; the
    /// surface keeps its previous setting.
    pub fn apply(&self, surface: &mut DrawingSurface) {
        if let Some(event) = self.pointer_event() {
            surface.handle_event(event);
            return;
        }

        match self {
            ScriptStep::Tool { tool } => surface.set_tool(*tool),
            ScriptStep::Color { color } => match color.try_to_color() {
                Some(color) => surface.set_color(color),
                None => warn!("Ignoring unknown color {:?}", color),
            },
            ScriptStep::Width { width } => {
                if let Err(err) = surface.set_line_width(*width) {
                    warn!("Ignoring width step: {err}");
                }
            }
            ScriptStep::Clear => surface.clear(),
            _ => {}
        }
    }
}

/// Errors that can occur while loading a stroke script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid stroke script: {0}")]
    Parse(#[from] toml::de::Error),
}

/// An ordered list of recorded steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokeScript {
    #[serde(default, rename = "step")]
    pub steps: Vec<ScriptStep>,
}

impl StrokeScript {
    pub fn from_toml_str(script: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(script)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::from_toml_str(&text)?;
        info!(
            "Loaded stroke script {} ({} steps)",
            path.display(),
            script.steps.len()
        );
        Ok(script)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
