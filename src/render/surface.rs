use crate::error::RatingTrendResult;
use crate::render::StarGlyph;

/// 2-D drawing surface a host hands to a component for one draw pass.
///
/// Mirrors the canvas model of common UI toolkits: a current transform that
/// can be translated, and a state stack driven by `save`/`restore`.
pub trait DrawSurface {
    fn save(&mut self) -> RatingTrendResult<()>;

    fn restore(&mut self) -> RatingTrendResult<()>;

    fn translate(&mut self, dx: f64, dy: f64);

    /// Draws one glyph with its top-left corner at the current origin.
    fn draw_glyph(&mut self, glyph: &StarGlyph) -> RatingTrendResult<()>;
}
