use serde::{Deserialize, Serialize};

use crate::core::GeometryConfig;
use crate::error::{RatingTrendError, RatingTrendResult};
use crate::render::StarIcon;

use super::ColorTable;

/// Intrinsic width reported when the host leaves the width unconstrained.
///
/// Hosts almost always constrain the width of a trend row, so this value only
/// matters for unbounded layouts; override it per widget when it does.
pub const DEFAULT_INTRINSIC_WIDTH: i32 = 20;

/// Public widget bootstrap configuration.
///
/// This type is serializable so host applications can keep widget styling in
/// declarative files instead of wiring every field by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingTrendConfig {
    #[serde(default)]
    pub geometry: GeometryConfig,
    #[serde(default)]
    pub colors: ColorTable,
    #[serde(default)]
    pub star_icon: StarIcon,
    #[serde(default = "default_intrinsic_width")]
    pub default_intrinsic_width: i32,
}

impl Default for RatingTrendConfig {
    fn default() -> Self {
        Self {
            geometry: GeometryConfig::default(),
            colors: ColorTable::default(),
            star_icon: StarIcon::default(),
            default_intrinsic_width: DEFAULT_INTRINSIC_WIDTH,
        }
    }
}

impl RatingTrendConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: GeometryConfig) -> Self {
        self.geometry = geometry;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.geometry.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.geometry.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.geometry.spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: ColorTable) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_star_icon(mut self, star_icon: StarIcon) -> Self {
        self.star_icon = star_icon;
        self
    }

    #[must_use]
    pub fn with_default_intrinsic_width(mut self, width: i32) -> Self {
        self.default_intrinsic_width = width;
        self
    }

    pub fn validate(&self) -> RatingTrendResult<()> {
        self.geometry.validate()?;
        self.colors.validate()?;
        if self.star_icon.name().trim().is_empty() {
            return Err(RatingTrendError::InvalidConfig(
                "star icon name must not be empty".to_owned(),
            ));
        }
        if self.default_intrinsic_width < 0 {
            return Err(RatingTrendError::InvalidConfig(
                "default intrinsic width must be >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_intrinsic_width() -> i32 {
    DEFAULT_INTRINSIC_WIDTH
}
