// File: crates/skycast-core/src/error.rs
// Summary: Render error type shared by dashboard surfaces.

use thiserror::Error;

/// Errors surfaced while writing a rendered dashboard to a presentation
/// surface. Geometry and view-model construction are pure and infallible;
/// only the output side can fail.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface rejected write to region '{region}': {reason}")]
    Surface { region: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
