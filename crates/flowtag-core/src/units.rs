//! Density-independent unit conversion.

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// Screen density used to turn dp and sp values into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// Pixels per density-independent unit.
    pub density: f32,
    /// Pixels per scale-independent unit (density times the user font scale).
    pub scaled_density: f32,
}

impl DisplayMetrics {
    /// Baseline 160dpi screen, no font scaling.
    pub const BASELINE: Self = Self {
        density: 1.0,
        scaled_density: 1.0,
    };

    /// Metrics for a given density with no font scaling.
    #[must_use]
    pub const fn new(density: f32) -> Self {
        Self {
            density,
            scaled_density: density,
        }
    }

    /// Apply a user font scale on top of the density.
    #[must_use]
    pub fn with_font_scale(mut self, font_scale: f32) -> Self {
        self.scaled_density = self.density * font_scale;
        self
    }

    /// Convert density-independent units to pixels.
    #[must_use]
    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.density
    }

    /// Convert scale-independent units to pixels.
    #[must_use]
    pub fn sp_to_px(&self, sp: f32) -> f32 {
        sp * self.scaled_density
    }

    /// Both densities must be finite and positive.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (field, value) in [
            ("density", self.density),
            ("scaled_density", self.scaled_density),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidStyle { field, value });
            }
        }
        Ok(())
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::BASELINE
    }
}
