use serde::{Deserialize, Serialize};

use crate::core::geometry::{GeometryConfig, Insets};
use crate::core::rating::MAX_SEQUENCE_LEN;

const SLOT_COUNT: i32 = MAX_SEQUENCE_LEN as i32;
const GAP_COUNT: f64 = (MAX_SEQUENCE_LEN - 1) as f64;

/// Width of one slot for a row `total_width` pixels wide.
///
/// Integer semantics: the available width is truncated toward zero before the
/// division by the slot count, and the division itself truncates. Rows too
/// narrow to fit the gaps yield a zero-width slot.
#[must_use]
pub fn slot_width(total_width: i32, spacing: f64, padding: Insets) -> i32 {
    let available = f64::from(total_width)
        - GAP_COUNT * spacing
        - f64::from(padding.right)
        - f64::from(padding.left);
    ((available as i32) / SLOT_COUNT).max(0)
}

/// Height the row wants when laid out `width` pixels wide.
///
/// Each slot reserves a full stroke width on top of the gaps, and half a
/// stroke is added so the bottom edge of the outline is not clipped.
#[must_use]
pub fn intrinsic_height(
    width: i32,
    geometry: GeometryConfig,
    padding: Insets,
    width_by_height_ratio: f64,
) -> i32 {
    let per_slot = (f64::from(width)
        - f64::from(SLOT_COUNT) * geometry.stroke_width
        - GAP_COUNT * geometry.spacing)
        / f64::from(SLOT_COUNT);
    let glyph_height = (per_slot / width_by_height_ratio) as i32;
    let height =
        f64::from(glyph_height) + f64::from(padding.vertical()) + 0.5 * geometry.stroke_width;
    (height as i32).max(0)
}

/// Slot geometry for one draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotLayout {
    pub slot_width: i32,
    pub spacing: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl SlotLayout {
    #[must_use]
    pub fn compute(total_width: i32, spacing: f64, padding: Insets) -> Self {
        Self {
            slot_width: slot_width(total_width, spacing, padding),
            spacing,
            origin_x: f64::from(padding.left),
            origin_y: f64::from(padding.top),
        }
    }

    /// Horizontal advance between consecutive glyphs.
    #[must_use]
    pub fn stride(self) -> f64 {
        f64::from(self.slot_width) + self.spacing
    }

    /// Absolute x of the glyph in `index`, equivalently the cursor after
    /// `index` glyphs.
    #[must_use]
    pub fn slot_x(self, index: usize) -> f64 {
        self.origin_x + index as f64 * self.stride()
    }
}
