use tracing::{debug, trace, warn};

use crate::core::{
    Insets, MeasureMode, MeasureSpec, RatingSequence, RatingValue, Size, SlotLayout,
    intrinsic_height,
};
use crate::error::RatingTrendResult;
use crate::render::{ColorPair, DrawSurface, STAR_WIDTH_BY_HEIGHT_RATIO, StarGlyph};

use super::invalidation::RedrawRequests;
use super::{InvalidationCallback, InvalidationReason, RatingTrendConfig};

/// Row of up to eight star badges showing a recent rating trend.
///
/// The widget is driven by a host adapter: the host measures it, hands it a
/// `DrawSurface` to paint on, and listens for repaint requests raised when the
/// sequence or padding changes.
#[derive(Debug)]
pub struct RatingTrendWidget {
    config: RatingTrendConfig,
    padding: Insets,
    sequence: Option<RatingSequence>,
    glyph: Option<StarGlyph>,
    total_width: i32,
    measured: Option<Size>,
    redraw: RedrawRequests,
}

impl RatingTrendWidget {
    pub fn new(config: RatingTrendConfig) -> RatingTrendResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            padding: Insets::default(),
            sequence: None,
            glyph: None,
            total_width: 0,
            measured: None,
            redraw: RedrawRequests::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &RatingTrendConfig {
        &self.config
    }

    #[must_use]
    pub fn padding(&self) -> Insets {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Insets) {
        if padding == self.padding {
            return;
        }
        self.padding = padding;
        self.redraw.request(InvalidationReason::Padding);
    }

    /// Replaces the displayed ratings.
    ///
    /// The whole update is rejected when the sequence is longer than eight or
    /// holds a value outside `1..=5`; the previous sequence then stays in
    /// effect.
    pub fn set_rating_sequence(&mut self, ratings: &[i32]) -> RatingTrendResult<()> {
        let sequence = match RatingSequence::from_slice(ratings) {
            Ok(sequence) => sequence,
            Err(err) => {
                warn!(error = %err, len = ratings.len(), "rejected rating sequence");
                return Err(err);
            }
        };

        debug!(
            len = sequence.len(),
            ratings = ?sequence.to_vec(),
            "set rating sequence"
        );
        self.sequence = Some(sequence);
        self.glyph = Some(self.build_glyph());
        self.redraw.request(InvalidationReason::Sequence);
        Ok(())
    }

    #[must_use]
    pub fn rating_sequence(&self) -> Option<&RatingSequence> {
        self.sequence.as_ref()
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.sequence.is_some()
    }

    #[must_use]
    pub fn intrinsic_width(&self) -> i32 {
        self.config.default_intrinsic_width
    }

    /// Resolves the widget size for the given constraints and records the
    /// resolved width for subsequent draw passes.
    ///
    /// The intrinsic height follows the width constraint's size, not the
    /// resolved width, so an `AtMost` parent limit still yields a full-height
    /// row. An unbounded width has no meaningful size and falls back to the
    /// intrinsic width.
    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let width = width_spec.resolve(self.intrinsic_width());
        let height_basis = match width_spec.mode {
            MeasureMode::Exact | MeasureMode::AtMost => width_spec.size,
            MeasureMode::Unbounded => width,
        };
        let intrinsic_height = intrinsic_height(
            height_basis,
            self.config.geometry,
            self.padding,
            STAR_WIDTH_BY_HEIGHT_RATIO,
        );
        let size = Size::new(width, height_spec.resolve(intrinsic_height));

        trace!(
            width_mode = ?width_spec.mode,
            height_mode = ?height_spec.mode,
            width = size.width,
            height = size.height,
            "measure rating trend"
        );
        self.total_width = size.width;
        self.measured = Some(size);
        size
    }

    #[must_use]
    pub fn total_width(&self) -> i32 {
        self.total_width
    }

    #[must_use]
    pub fn measured_size(&self) -> Option<Size> {
        self.measured
    }

    #[must_use]
    pub fn slot_layout(&self) -> SlotLayout {
        SlotLayout::compute(self.total_width, self.config.geometry.spacing, self.padding)
    }

    /// Stroke/fill pair for a rating value; `None` when the value has no entry.
    #[must_use]
    pub fn select_colors(&self, value: i32) -> Option<ColorPair> {
        self.config.colors.lookup(value)
    }

    /// Paints the current sequence, one glyph per rating, left to right.
    ///
    /// A no-op until a sequence has been set. Surface state is saved before
    /// and restored after the pass so repeated draws never accumulate
    /// translation.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> RatingTrendResult<()> {
        let (Some(sequence), Some(glyph)) = (self.sequence.as_ref(), self.glyph.as_ref()) else {
            trace!("skip draw: no rating sequence");
            return Ok(());
        };

        let layout = self.slot_layout();
        trace!(
            count = sequence.len(),
            slot_width = layout.slot_width,
            "draw rating trend"
        );

        surface.save()?;
        surface.translate(layout.origin_x, layout.origin_y);
        let result = self.draw_slots(surface, sequence, glyph.clone(), layout);
        surface.restore()?;
        result
    }

    fn draw_slots<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        sequence: &RatingSequence,
        mut glyph: StarGlyph,
        layout: SlotLayout,
    ) -> RatingTrendResult<()> {
        glyph.width = f64::from(layout.slot_width);
        for value in sequence.iter() {
            match self.select_colors(value.get()) {
                Some(colors) => {
                    glyph.value = value;
                    glyph.colors = colors;
                    surface.draw_glyph(&glyph)?;
                }
                None => warn!(value = value.get(), "no colors for rating; slot skipped"),
            }
            surface.translate(layout.stride(), 0.0);
        }
        Ok(())
    }

    /// Returns and clears the pending repaint request, if any.
    pub fn take_redraw_request(&mut self) -> Option<InvalidationReason> {
        self.redraw.take()
    }

    #[must_use]
    pub fn has_pending_redraw(&self) -> bool {
        self.redraw.is_pending()
    }

    /// Number of repaint requests raised over the widget's lifetime.
    #[must_use]
    pub fn redraw_request_count(&self) -> u64 {
        self.redraw.total()
    }

    /// Installs a hook invoked on every repaint request, replacing any
    /// previous one.
    pub fn set_invalidation_callback(&mut self, callback: Option<InvalidationCallback>) {
        self.redraw.set_callback(callback);
    }

    fn build_glyph(&self) -> StarGlyph {
        let geometry = self.config.geometry;
        StarGlyph::new(
            self.config.star_icon.clone(),
            geometry.corner_radius,
            geometry.stroke_width,
            self.config.colors.get(RatingValue::ONE),
        )
    }
}
