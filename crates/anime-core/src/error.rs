//! Error types for anime-core.
//!
//! Only construction and configuration can fail. The block-processing path and
//! every meter query are infallible.

use thiserror::Error;

/// Error type for anime-core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unsupported channel layout: {inputs} in / {outputs} out (mono or stereo only)")]
    UnsupportedLayout { inputs: usize, outputs: usize },
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
