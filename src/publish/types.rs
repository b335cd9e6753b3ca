//! Data types for publishing artwork to the gallery.

use crate::surface::SurfaceError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Gallery category an artwork is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkCategory {
    Abstract,
    Graphic,
    Portrait,
    Landscape,
}

impl ArtworkCategory {
    pub const ALL: [ArtworkCategory; 4] = [
        ArtworkCategory::Abstract,
        ArtworkCategory::Graphic,
        ArtworkCategory::Portrait,
        ArtworkCategory::Landscape,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ArtworkCategory::Abstract => "abstract",
            ArtworkCategory::Graphic => "graphic",
            ArtworkCategory::Portrait => "portrait",
            ArtworkCategory::Landscape => "landscape",
        }
    }
}

impl fmt::Display for ArtworkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArtworkCategory {
    type Err = PublishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.name() == wanted)
            .ok_or_else(|| PublishError::InvalidDetails(format!("unknown category '{s}'")))
    }
}

/// Form fields the artist fills in before publishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkDetails {
    pub title: String,
    pub description: String,
    pub category: ArtworkCategory,
    /// Whether other users may leave reviews and feedback
    pub allow_reviews: bool,
}

impl ArtworkDetails {
    /// Title and description are required and may not be blank.
    pub fn validate(&self) -> Result<(), PublishError> {
        if self.title.trim().is_empty() {
            return Err(PublishError::InvalidDetails("title is required".into()));
        }
        if self.description.trim().is_empty() {
            return Err(PublishError::InvalidDetails(
                "description is required".into(),
            ));
        }
        Ok(())
    }
}

/// Everything handed to a [`Publisher`](super::Publisher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedArtwork {
    pub details: ArtworkDetails,
    /// PNG snapshot of the canvas
    pub image: Vec<u8>,
}

/// Result of a publish attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// No user is logged in; the caller should route to sign-in
    LoginRequired,
    /// Artwork handed to the publisher (fire-and-forget)
    Submitted { bytes: usize },
}

/// Errors that can occur while preparing a publish request.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Invalid artwork details: {0}")]
    InvalidDetails(String),

    #[error("Failed to export artwork: {0}")]
    Export(#[from] SurfaceError),
}
