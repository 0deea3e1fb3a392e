use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::RatingTrendWidget;
use crate::core::{Insets, MeasureSpec};
use crate::error::RatingTrendResult;

/// Hosts a `RatingTrendWidget` inside a `gtk4::DrawingArea`.
///
/// GTK allocations are fed to `measure` as exact constraints, the content
/// height follows the widget's intrinsic height for the allocated width, and
/// every repaint request queues a GTK draw.
pub struct GtkRatingTrendAdapter {
    drawing_area: gtk::DrawingArea,
    widget: Rc<RefCell<RatingTrendWidget>>,
    height_sync: Rc<Cell<ContentHeightSync>>,
}

/// Tracks the allocation width whose intrinsic height was last applied.
///
/// `set_content_height` can itself trigger a resize; a width that has already
/// been handled is skipped so the resize handler cannot feed itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ContentHeightSync {
    last_width: Option<i32>,
}

impl ContentHeightSync {
    /// Content height to apply for `width`, or `None` when that width was
    /// already handled.
    fn on_resize(&mut self, width: i32, widget: &mut RatingTrendWidget) -> Option<i32> {
        if self.last_width == Some(width) {
            return None;
        }
        self.last_width = Some(width);
        Some(
            widget
                .measure(MeasureSpec::exact(width), MeasureSpec::unbounded())
                .height,
        )
    }

    /// Forgets the handled width so the next resize re-measures.
    fn reset(&mut self) {
        self.last_width = None;
    }
}

impl GtkRatingTrendAdapter {
    #[must_use]
    pub fn new(widget: RatingTrendWidget) -> Self {
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        let widget = Rc::new(RefCell::new(widget));

        let weak_area = drawing_area.downgrade();
        widget
            .borrow_mut()
            .set_invalidation_callback(Some(Box::new(move |_reason| {
                if let Some(area) = weak_area.upgrade() {
                    area.queue_draw();
                }
            })));

        let draw_widget = Rc::clone(&widget);
        drawing_area.set_draw_func(move |_area, context, width, height| {
            let mut widget = draw_widget.borrow_mut();
            widget.measure(MeasureSpec::exact(width), MeasureSpec::exact(height));
            if let Err(err) = widget.render_on_cairo_context(context) {
                warn!(error = %err, "rating trend draw failed");
            }
            widget.take_redraw_request();
        });

        let height_sync = Rc::new(Cell::new(ContentHeightSync::default()));
        let resize_widget = Rc::clone(&widget);
        let resize_sync = Rc::clone(&height_sync);
        drawing_area.connect_resize(move |area, width, _height| {
            let mut sync = resize_sync.get();
            let height = sync.on_resize(width, &mut resize_widget.borrow_mut());
            resize_sync.set(sync);
            if let Some(height) = height {
                if area.content_height() != height {
                    area.set_content_height(height);
                }
            }
        });

        Self {
            drawing_area,
            widget,
            height_sync,
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn widget(&self) -> Rc<RefCell<RatingTrendWidget>> {
        Rc::clone(&self.widget)
    }

    pub fn set_rating_sequence(&self, ratings: &[i32]) -> RatingTrendResult<()> {
        self.widget.borrow_mut().set_rating_sequence(ratings)
    }

    /// Padding changes the intrinsic height, so the next allocation is
    /// re-measured even when its width is unchanged.
    pub fn set_padding(&self, padding: Insets) {
        self.widget.borrow_mut().set_padding(padding);
        let mut sync = self.height_sync.get();
        sync.reset();
        self.height_sync.set(sync);
        self.drawing_area.queue_resize();
    }
}
