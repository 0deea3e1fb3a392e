use std::cell::RefCell;
use std::rc::Rc;

use rating_trend::api::{InvalidationReason, RatingTrendConfig, RatingTrendWidget};
use rating_trend::core::Insets;

fn widget() -> RatingTrendWidget {
    RatingTrendWidget::new(RatingTrendConfig::default()).expect("widget init")
}

#[test]
fn new_widget_has_no_pending_redraw() {
    let mut widget = widget();
    assert!(!widget.has_pending_redraw());
    assert_eq!(widget.take_redraw_request(), None);
}

#[test]
fn every_sequence_replacement_requests_redraw() {
    let mut widget = widget();
    widget.set_rating_sequence(&[1, 2]).expect("valid");
    assert_eq!(
        widget.take_redraw_request(),
        Some(InvalidationReason::Sequence)
    );

    widget.set_rating_sequence(&[1, 2]).expect("valid");
    assert_eq!(
        widget.take_redraw_request(),
        Some(InvalidationReason::Sequence)
    );
    assert_eq!(widget.redraw_request_count(), 2);
}

#[test]
fn padding_change_requests_redraw_once() {
    let mut widget = widget();
    widget.set_padding(Insets::uniform(4));
    widget.set_padding(Insets::uniform(4));

    assert_eq!(widget.redraw_request_count(), 1);
    assert_eq!(
        widget.take_redraw_request(),
        Some(InvalidationReason::Padding)
    );
}

#[test]
fn invalidation_callback_receives_reasons() {
    let mut widget = widget();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    widget.set_invalidation_callback(Some(Box::new(move |reason| {
        sink.borrow_mut().push(reason);
    })));

    widget.set_rating_sequence(&[5]).expect("valid");
    widget.set_rating_sequence(&[9]).expect_err("invalid");
    widget.set_padding(Insets::new(1, 0, 0, 0));

    assert_eq!(
        *seen.borrow(),
        vec![InvalidationReason::Sequence, InvalidationReason::Padding]
    );
}
