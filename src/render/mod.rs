mod glyph;
mod primitives;
mod recording_surface;
mod surface;

pub use glyph::{DEFAULT_STAR_ICON, STAR_WIDTH_BY_HEIGHT_RATIO, StarGlyph, StarIcon};
pub use primitives::{Color, ColorPair};
pub use recording_surface::{GlyphDraw, RecordingSurface, SurfaceCommand};
pub use surface::DrawSurface;

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoImageTarget, CairoRenderStats, CairoSurface};
