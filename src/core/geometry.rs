use serde::{Deserialize, Serialize};

use crate::error::{RatingTrendError, RatingTrendResult};

pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;
pub const DEFAULT_SPACING: f64 = 12.0;
pub const DEFAULT_CORNER_RADIUS: f64 = 8.0;

/// Stroke, corner and gap dimensions shared by every glyph in a row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,
    #[serde(default = "default_spacing")]
    pub spacing: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            corner_radius: DEFAULT_CORNER_RADIUS,
            spacing: DEFAULT_SPACING,
        }
    }
}

impl GeometryConfig {
    #[must_use]
    pub fn new(stroke_width: f64, corner_radius: f64, spacing: f64) -> Self {
        Self {
            stroke_width,
            corner_radius,
            spacing,
        }
    }

    pub fn validate(self) -> RatingTrendResult<Self> {
        for (field, value) in [
            ("stroke_width", self.stroke_width),
            ("corner_radius", self.corner_radius),
            ("spacing", self.spacing),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RatingTrendError::InvalidConfig(format!(
                    "geometry `{field}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

fn default_corner_radius() -> f64 {
    DEFAULT_CORNER_RADIUS
}

fn default_spacing() -> f64 {
    DEFAULT_SPACING
}

/// Padding supplied by the host layout, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Left plus right, saturating at the `i32` bounds.
    #[must_use]
    pub const fn horizontal(self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Top plus bottom, saturating at the `i32` bounds.
    #[must_use]
    pub const fn vertical(self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Resolved measurement output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}
