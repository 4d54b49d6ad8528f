//! Integration tests for flowtag-yaml.
//!
//! These tests load style manifests and drive a tag container with the
//! resolved style.

use flowtag_core::{MeasureSpec, Rect, Size};
use flowtag_layout::{FixedTag, FlowTagLayout};
use flowtag_yaml::{ManifestError, StyleManifest};
use proptest::prelude::*;
use std::io::Write;

// =============================================================================
// Manifest Loading
// =============================================================================

const COMPACT_YAML: &str = r"
style:
  horizontal_spacing: 10
  vertical_spacing: 4
  horizontal_padding: 0
  vertical_padding: 0
";

#[test]
fn test_manifest_drives_container() {
    let style = StyleManifest::from_yaml(COMPACT_YAML)
        .unwrap()
        .resolve()
        .unwrap();
    let mut layout = FlowTagLayout::new(style);
    for _ in 0..3 {
        layout.add_tag(FixedTag::new(Size::new(50.0, 20.0)));
    }

    let size = layout
        .on_measure(MeasureSpec::Exact(140.0), MeasureSpec::Unspecified)
        .unwrap();
    let placements = layout.on_layout(Rect::from_size(size)).unwrap();

    assert_eq!(size, Size::new(140.0, 44.0));
    assert_eq!(placements[2].frame, Rect::new(0.0, 24.0, 50.0, 20.0));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("flowtag-style-{}.yaml", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"display:\n  density: 3.0\n").unwrap();
    }

    let style = StyleManifest::load(&path).unwrap().resolve().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(style.horizontal_spacing(), 24.0);
    assert_eq!(style.vertical_padding(), 9.0);
    assert_eq!(style.text_size(), 39.0);
}

#[test]
fn test_negative_override_is_style_error() {
    let manifest = StyleManifest::from_yaml("style:\n  vertical_spacing: -2\n").unwrap();
    let err = manifest.resolve().unwrap_err();
    assert!(matches!(err, ManifestError::Style(_)));
    assert!(err.to_string().contains("vertical_spacing"));
}

#[test]
fn test_malformed_yaml() {
    let result = StyleManifest::from_yaml("style: [1, 2");
    assert!(matches!(result, Err(ManifestError::Yaml(_))));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_spacing_scales_with_density(spacing in 0u16..32, density in 1u16..5) {
        let yaml = format!(
            "display:\n  density: {density}\nstyle:\n  horizontal_spacing: {spacing}\n"
        );
        let style = StyleManifest::from_yaml(&yaml).unwrap().resolve().unwrap();
        prop_assert_eq!(style.horizontal_spacing(), f32::from(spacing) * f32::from(density));
    }
}
