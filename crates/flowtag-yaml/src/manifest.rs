//! Style manifest: display metrics plus attribute overrides.

use crate::error::ManifestError;
use flowtag_core::{DisplayMetrics, LayoutStyle, StyleAttributes};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Screen the manifest is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Pixels per dp
    pub density: f32,
    /// User font scale applied to sp values
    pub font_scale: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            font_scale: 1.0,
        }
    }
}

impl DisplayConfig {
    /// Metrics used for unit conversion.
    #[must_use]
    pub fn metrics(&self) -> DisplayMetrics {
        DisplayMetrics::new(self.density).with_font_scale(self.font_scale)
    }
}

/// A tag container style as written in YAML.
///
/// ```yaml
/// display:
///   density: 2.0
/// style:
///   horizontal_spacing: 10
///   text_size: 14
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleManifest {
    /// Display the style is resolved for
    pub display: DisplayConfig,
    /// Attribute overrides (dp / sp)
    pub style: StyleAttributes,
}

impl StyleManifest {
    /// Parse a manifest from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ManifestError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading style manifest");
        Self::from_yaml(&yaml)
    }

    /// Serialize manifest to YAML string.
    pub fn to_yaml(&self) -> Result<String, ManifestError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Resolve the attributes into a pixel style.
    pub fn resolve(&self) -> Result<LayoutStyle, ManifestError> {
        let style = self.style.resolve(&self.display.metrics())?;
        debug!(?style, density = self.display.density, "resolved style manifest");
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_YAML: &str = r"
display:
  density: 2.0
  font_scale: 1.5
style:
  horizontal_spacing: 10
  vertical_padding: 2.5
  text_size: 14
";

    #[test]
    fn test_parse_manifest() {
        let manifest = StyleManifest::from_yaml(EXAMPLE_YAML).unwrap();
        assert_eq!(manifest.display.density, 2.0);
        assert_eq!(manifest.display.font_scale, 1.5);
        assert_eq!(manifest.style.horizontal_spacing, Some(10.0));
        assert_eq!(manifest.style.vertical_spacing, None);
    }

    #[test]
    fn test_resolve_manifest() {
        let style = StyleManifest::from_yaml(EXAMPLE_YAML)
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(style.horizontal_spacing(), 20.0);
        assert_eq!(style.vertical_spacing(), 8.0);
        assert_eq!(style.vertical_padding(), 5.0);
        assert_eq!(style.text_size(), 42.0);
        assert_eq!(style.border_stroke_width(), 1.0);
    }

    #[test]
    fn test_empty_manifest_is_default_style() {
        let manifest = StyleManifest::from_yaml("{}").unwrap();
        assert_eq!(manifest, StyleManifest::default());
        assert_eq!(manifest.resolve().unwrap(), LayoutStyle::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = StyleManifest::from_yaml("style:\n  border_color: red\n");
        assert!(matches!(result, Err(ManifestError::Yaml(_))));
    }

    #[test]
    fn test_invalid_density_rejected() {
        let manifest = StyleManifest::from_yaml("display:\n  density: 0\n").unwrap();
        assert!(matches!(manifest.resolve(), Err(ManifestError::Style(_))));
    }

    #[test]
    fn test_roundtrip() {
        let manifest = StyleManifest::from_yaml(EXAMPLE_YAML).unwrap();
        let yaml = manifest.to_yaml().unwrap();
        let manifest2 = StyleManifest::from_yaml(&yaml).unwrap();
        assert_eq!(manifest, manifest2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = StyleManifest::load("/nonexistent/flowtag/style.yaml");
        assert!(matches!(result, Err(ManifestError::Io(_))));
    }
}
