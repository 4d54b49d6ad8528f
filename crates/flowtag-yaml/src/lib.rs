//! YAML style manifests for FlowTag containers.

mod error;
mod manifest;

pub use error::ManifestError;
pub use manifest::{DisplayConfig, StyleManifest};
