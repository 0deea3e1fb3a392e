use crate::core::RatingValue;
use crate::error::{RatingTrendError, RatingTrendResult};
use crate::render::{ColorPair, DrawSurface, StarGlyph};

/// Glyph draw captured with its absolute origin.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphDraw {
    pub x: f64,
    pub y: f64,
    pub value: RatingValue,
    pub colors: ColorPair,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    Glyph(GlyphDraw),
}

/// In-memory surface used by tests and headless hosts.
///
/// Records every command in order and resolves translations so glyph draws
/// carry absolute coordinates.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    origin: (f64, f64),
    saved: Vec<(f64, f64)>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    pub fn glyph_draws(&self) -> impl Iterator<Item = &GlyphDraw> {
        self.commands.iter().filter_map(|command| match command {
            SurfaceCommand::Glyph(draw) => Some(draw),
            _ => None,
        })
    }

    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.glyph_draws().count()
    }

    /// Current translation relative to the surface origin.
    #[must_use]
    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) -> RatingTrendResult<()> {
        self.saved.push(self.origin);
        self.commands.push(SurfaceCommand::Save);
        Ok(())
    }

    fn restore(&mut self) -> RatingTrendResult<()> {
        self.origin = self.saved.pop().ok_or_else(|| {
            RatingTrendError::Backend("restore without matching save".to_owned())
        })?;
        self.commands.push(SurfaceCommand::Restore);
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin.0 += dx;
        self.origin.1 += dy;
        self.commands.push(SurfaceCommand::Translate { dx, dy });
    }

    fn draw_glyph(&mut self, glyph: &StarGlyph) -> RatingTrendResult<()> {
        self.commands.push(SurfaceCommand::Glyph(GlyphDraw {
            x: self.origin.0,
            y: self.origin.1,
            value: glyph.value,
            colors: glyph.colors,
            width: glyph.width,
            height: glyph.height(),
            corner_radius: glyph.corner_radius,
            stroke_width: glyph.stroke_width,
        }));
        Ok(())
    }
}
