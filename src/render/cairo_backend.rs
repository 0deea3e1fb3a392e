use std::f64::consts::{FRAC_PI_2, PI};
use std::io::Write;

use cairo::{Context, Format, ImageSurface, LineJoin};

use crate::error::{RatingTrendError, RatingTrendResult};
use crate::render::{Color, DrawSurface, StarGlyph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub glyphs_drawn: usize,
}

/// `DrawSurface` over an external Cairo context (for example a GTK
/// `DrawingArea` callback or an offscreen image).
pub struct CairoSurface<'a> {
    context: &'a Context,
    stats: CairoRenderStats,
}

impl<'a> CairoSurface<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            stats: CairoRenderStats::default(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }
}

impl DrawSurface for CairoSurface<'_> {
    fn save(&mut self) -> RatingTrendResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))
    }

    fn restore(&mut self) -> RatingTrendResult<()> {
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.context.translate(dx, dy);
    }

    fn draw_glyph(&mut self, glyph: &StarGlyph) -> RatingTrendResult<()> {
        let context = self.context;
        context.set_line_join(LineJoin::Round);
        context.set_line_width(glyph.stroke_width);

        append_badge_path(context, glyph);
        apply_color(context, glyph.colors.fill);
        if glyph.stroke_width > 0.0 {
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill badge", err))?;
            apply_color(context, glyph.colors.stroke);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke badge", err))?;
        } else {
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill badge", err))?;
        }

        let outline = glyph.star_outline();
        context.new_path();
        context.move_to(outline[0].0, outline[0].1);
        for &(x, y) in &outline[1..] {
            context.line_to(x, y);
        }
        context.close_path();
        apply_color(context, glyph.colors.stroke);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill star", err))?;

        self.stats.glyphs_drawn += 1;
        Ok(())
    }
}

/// Offscreen ARGB image a component can be drawn into and exported as PNG.
#[derive(Debug)]
pub struct CairoImageTarget {
    surface: ImageSurface,
    clear_color: Color,
}

impl CairoImageTarget {
    pub fn new(width: i32, height: i32) -> RatingTrendResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(RatingTrendError::Backend(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgba(1.0, 1.0, 1.0, 0.0),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> RatingTrendResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    /// Clears the image and returns a fresh context for one draw pass.
    pub fn begin(&self) -> RatingTrendResult<Context> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        Ok(context)
    }

    pub fn write_png<W: Write>(&self, writer: &mut W) -> RatingTrendResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| RatingTrendError::Backend(format!("failed to encode png: {err}")))
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_badge_path(context: &Context, glyph: &StarGlyph) {
    let (x, y, width, height) = glyph.badge_rect();
    let radius = glyph.effective_corner_radius();
    context.new_path();
    if radius <= 0.0 {
        context.rectangle(x, y, width, height);
        return;
    }

    let right = x + width;
    let bottom = y + height;

    context.new_sub_path();
    context.arc(right - radius, y + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(x + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(x + radius, y + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> RatingTrendError {
    RatingTrendError::Backend(format!("{prefix}: {err}"))
}
