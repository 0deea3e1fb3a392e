use std::io::Write;

use tracing::debug;

use crate::core::MeasureSpec;
use crate::error::RatingTrendResult;
use crate::render::{CairoImageTarget, CairoRenderStats, CairoSurface};

use super::RatingTrendWidget;

impl RatingTrendWidget {
    /// Draws into an external Cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the widget
    /// decoupled from GTK-specific APIs.
    pub fn render_on_cairo_context(
        &self,
        context: &cairo::Context,
    ) -> RatingTrendResult<CairoRenderStats> {
        let mut surface = CairoSurface::new(context);
        self.draw(&mut surface)?;
        Ok(surface.stats())
    }

    /// Lays the widget out `width` pixels wide at its intrinsic height and
    /// encodes one draw pass as PNG.
    pub fn render_png<W: Write>(
        &mut self,
        width: i32,
        writer: &mut W,
    ) -> RatingTrendResult<CairoRenderStats> {
        let size = self.measure(MeasureSpec::exact(width), MeasureSpec::unbounded());
        let target = CairoImageTarget::new(size.width, size.height.max(1))?;
        let stats = {
            let context = target.begin()?;
            self.render_on_cairo_context(&context)?
        };
        target.write_png(writer)?;
        debug!(
            width = size.width,
            height = size.height,
            glyphs = stats.glyphs_drawn,
            "rendered rating trend png"
        );
        Ok(stats)
    }
}
