use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::core::RatingValue;
use crate::error::{RatingTrendError, RatingTrendResult};
use crate::render::ColorPair;

/// Fixed width:height ratio of a star badge.
pub const STAR_WIDTH_BY_HEIGHT_RATIO: f64 = 0.8;

/// Asset name of the icon used when none is configured.
pub const DEFAULT_STAR_ICON: &str = "ic_star";

/// Inner/outer radius ratio of a regular five-pointed star.
const STAR_INNER_RADIUS_RATIO: f64 = 0.381_966;

/// Opaque handle to the star asset a host resolves for the glyph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarIcon(String);

impl StarIcon {
    pub fn new(name: impl Into<String>) -> RatingTrendResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RatingTrendError::InvalidConfig(
                "star icon name must not be empty".to_owned(),
            ));
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for StarIcon {
    fn default() -> Self {
        Self(DEFAULT_STAR_ICON.to_owned())
    }
}

/// One star badge: a rounded tile tinted per rating with a star inside.
///
/// A widget keeps a single glyph and re-targets it per slot before each draw.
#[derive(Debug, Clone, PartialEq)]
pub struct StarGlyph {
    pub icon: StarIcon,
    pub value: RatingValue,
    pub colors: ColorPair,
    pub width: f64,
    pub corner_radius: f64,
    pub stroke_width: f64,
}

impl StarGlyph {
    #[must_use]
    pub fn new(icon: StarIcon, corner_radius: f64, stroke_width: f64, colors: ColorPair) -> Self {
        Self {
            icon,
            value: RatingValue::ONE,
            colors,
            width: 0.0,
            corner_radius,
            stroke_width,
        }
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.width / STAR_WIDTH_BY_HEIGHT_RATIO
    }

    /// Badge rectangle `(x, y, width, height)` inset so the stroke stays inside
    /// the glyph box.
    #[must_use]
    pub fn badge_rect(&self) -> (f64, f64, f64, f64) {
        let inset = self.stroke_width * 0.5;
        (
            inset,
            inset,
            (self.width - self.stroke_width).max(0.0),
            (self.height() - self.stroke_width).max(0.0),
        )
    }

    /// Corner radius clamped to what the badge rectangle can hold.
    #[must_use]
    pub fn effective_corner_radius(&self) -> f64 {
        let (_, _, width, height) = self.badge_rect();
        self.corner_radius.min(width * 0.5).min(height * 0.5).max(0.0)
    }

    /// The ten vertices of the star, alternating outer and inner points,
    /// starting at the top point and turning clockwise.
    #[must_use]
    pub fn star_outline(&self) -> [(f64, f64); 10] {
        let (x, y, width, height) = self.badge_rect();
        let center_x = x + width * 0.5;
        let center_y = y + height * 0.5;
        let outer = ((width.min(height) * 0.5) - self.stroke_width).max(0.0);
        let inner = outer * STAR_INNER_RADIUS_RATIO;

        let mut points = [(0.0, 0.0); 10];
        for (index, point) in points.iter_mut().enumerate() {
            let radius = if index % 2 == 0 { outer } else { inner };
            let angle = -FRAC_PI_2 + index as f64 * PI / 5.0;
            *point = (
                center_x + radius * angle.cos(),
                center_y + radius * angle.sin(),
            );
        }
        points
    }
}
