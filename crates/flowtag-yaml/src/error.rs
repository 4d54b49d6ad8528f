//! Error types for manifest loading.

use flowtag_core::LayoutError;
use thiserror::Error;

/// Errors that can occur while loading a style manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest is not valid YAML or has unknown fields.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The manifest parsed but describes an unusable style.
    #[error("Style error: {0}")]
    Style(#[from] LayoutError),
}
