//! Error types for cue-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid marker pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Marker pattern {pattern:?} does not match its canonical marker {marker:?}")]
    MarkerMismatch { pattern: String, marker: String },
}
