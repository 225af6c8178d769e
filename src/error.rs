// File: src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutfitError {
    /// A color value that cannot be resolved to an RGB triple.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Closet snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
