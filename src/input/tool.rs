//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// The active tool determines which draw operation a pointer drag performs.
/// Config files and stroke scripts name tools case-insensitively and accept
/// the same aliases as [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand drawing - chains segments along the pointer path (default)
    #[default]
    Pen,
    /// Freehand erasing - paints the background color along the pointer path
    Eraser,
    /// Rectangle outline - from the press point to the pointer ("rect" and
    /// "square" are accepted too)
    Rectangle,
    /// Circle outline - centered at the press point, radius to the pointer
    Circle,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Pen, Tool::Eraser, Tool::Rectangle, Tool::Circle];

    /// Lowercase name as used in config files and stroke scripts.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Eraser => "eraser",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
        }
    }

    /// Whether each move extends the stroke from the previous pointer position.
    pub fn is_freehand(&self) -> bool {
        matches!(self, Tool::Pen | Tool::Eraser)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pen" => Ok(Tool::Pen),
            "eraser" => Ok(Tool::Eraser),
            "rectangle" | "rect" | "square" => Ok(Tool::Rectangle),
            "circle" => Ok(Tool::Circle),
            other => Err(format!("unknown tool '{other}'")),
        }
    }
}

impl<'de> Deserialize<'de> for Tool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("Pen".parse::<Tool>(), Ok(Tool::Pen));
        assert_eq!("square".parse::<Tool>(), Ok(Tool::Rectangle));
        assert_eq!(" rect ".parse::<Tool>(), Ok(Tool::Rectangle));
        assert!("lasso".parse::<Tool>().is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Holder {
        tool: Tool,
    }

    #[test]
    fn deserializes_names_case_insensitively() {
        for (text, expected) in [
            ("Circle", Tool::Circle),
            ("PEN", Tool::Pen),
            ("Rect", Tool::Rectangle),
            ("eraser", Tool::Eraser),
        ] {
            let holder: Holder = toml::from_str(&format!("tool = \"{text}\"")).unwrap();
            assert_eq!(holder.tool, expected);
        }

        let err = toml::from_str::<Holder>("tool = \"lasso\"").unwrap_err();
        assert!(err.to_string().contains("unknown tool"));
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for tool in Tool::ALL {
            assert_eq!(tool.name().parse::<Tool>(), Ok(tool));
        }
    }
}
