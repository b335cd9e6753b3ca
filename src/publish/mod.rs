//! Publishing artwork to the gallery.
//!
//! The gallery backend and the session store live outside this crate. They are
//! reached through two small traits: [`AuthGate`] answers whether a user is
//! logged in, and [`Publisher`] receives the finished artwork with no response.

pub mod types;

pub use types::{
    ArtworkCategory, ArtworkDetails, PublishError, PublishOutcome, PublishedArtwork,
};

use crate::surface::DrawingSurface;
use log::{info, warn};

/// Reports whether a user session is active.
pub trait AuthGate {
    fn is_logged_in(&self) -> bool;
}

impl AuthGate for bool {
    fn is_logged_in(&self) -> bool {
        *self
    }
}

/// Receives published artwork. Fire-and-forget: no response contract.
pub trait Publisher {
    fn publish(&self, artwork: PublishedArtwork);
}

/// Publisher that only logs the submission.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPublisher;

impl Publisher for LogPublisher {
    fn publish(&self, artwork: PublishedArtwork) {
        info!(
            "Publishing artwork: title={:?} category={} allow_reviews={} ({} bytes)",
            artwork.details.title,
            artwork.details.category,
            artwork.details.allow_reviews,
            artwork.image.len()
        );
    }
}

/// Publishes the current canvas.
///
/// The auth gate is consulted first; without a logged-in user nothing is
/// exported and [`PublishOutcome::LoginRequired`] is returned.
///
/// # Errors
/// - [`PublishError::InvalidDetails`] if the title or description is blank
/// - [`PublishError::Export`] if the canvas cannot be encoded
pub fn publish_artwork(
    surface: &DrawingSurface,
    gate: &dyn AuthGate,
    publisher: &dyn Publisher,
    details: ArtworkDetails,
) -> Result<PublishOutcome, PublishError> {
    if !gate.is_logged_in() {
        warn!("Publish requested without a logged-in user");
        return Ok(PublishOutcome::LoginRequired);
    }

    details.validate()?;
    let image = surface.export_image()?;
    let bytes = image.len();

    publisher.publish(PublishedArtwork { details, image });
    Ok(PublishOutcome::Submitted { bytes })
}
