use rating_trend::api::{RatingTrendConfig, RatingTrendWidget};
use rating_trend::core::{Insets, MeasureSpec, RatingValue};
use rating_trend::render::{DrawSurface, RecordingSurface, SurfaceCommand};

fn measured_widget(width: i32) -> RatingTrendWidget {
    let mut widget = RatingTrendWidget::new(RatingTrendConfig::default()).expect("widget init");
    widget.measure(MeasureSpec::exact(width), MeasureSpec::unbounded());
    widget
}

#[test]
fn draw_before_sequence_is_a_noop() {
    let widget = measured_widget(328);
    let mut surface = RecordingSurface::new();
    widget.draw(&mut surface).expect("draw");

    assert!(surface.commands().is_empty());
}

#[test]
fn empty_sequence_draws_no_glyphs() {
    let mut widget = measured_widget(328);
    widget.set_rating_sequence(&[]).expect("valid");
    let mut surface = RecordingSurface::new();
    widget.draw(&mut surface).expect("draw");

    assert_eq!(surface.glyph_count(), 0);
    assert_eq!(surface.save_depth(), 0);
}

#[test]
fn reference_row_lands_on_expected_slots() {
    let mut widget = measured_widget(328);
    widget
        .set_rating_sequence(&[5, 4, 2, 1, 2, 1, 1, 4])
        .expect("valid");
    assert_eq!(widget.slot_layout().slot_width, 30);

    let mut surface = RecordingSurface::new();
    widget.draw(&mut surface).expect("draw");

    let draws: Vec<_> = surface.glyph_draws().collect();
    let xs: Vec<f64> = draws.iter().map(|draw| draw.x).collect();
    assert_eq!(xs, vec![0.0, 42.0, 84.0, 126.0, 168.0, 210.0, 252.0, 294.0]);
    assert!(draws.iter().all(|draw| draw.y == 0.0 && draw.width == 30.0));

    let colors = RatingTrendConfig::default().colors;
    let expected = [5, 4, 2, 1, 2, 1, 1, 4];
    for (draw, value) in draws.iter().zip(expected) {
        let value = RatingValue::new(value).expect("valid rating");
        assert_eq!(draw.value, value);
        assert_eq!(draw.colors, colors.get(value));
    }
}

#[test]
fn partial_row_draws_only_present_entries() {
    let mut widget = measured_widget(328);
    widget.set_rating_sequence(&[3, 5, 1]).expect("valid");

    let mut surface = RecordingSurface::new();
    widget.draw(&mut surface).expect("draw");

    assert_eq!(surface.glyph_count(), 3);
    let last = surface.glyph_draws().last().expect("last glyph");
    assert_eq!(last.x, 84.0);
}

#[test]
fn padding_offsets_origin_and_shrinks_slots() {
    let mut widget = measured_widget(348);
    widget.set_padding(Insets::new(10, 6, 10, 2));
    widget.set_rating_sequence(&[1, 2]).expect("valid");

    let mut surface = RecordingSurface::new();
    widget.draw(&mut surface).expect("draw");

    let draws: Vec<_> = surface.glyph_draws().collect();
    // (348 - 84 - 20) / 8 = 30.5 -> 30
    assert_eq!(draws[0].width, 30.0);
    assert_eq!((draws[0].x, draws[0].y), (10.0, 6.0));
    assert_eq!((draws[1].x, draws[1].y), (52.0, 6.0));
}

#[test]
fn draw_is_balanced_and_repeatable() {
    let mut widget = measured_widget(328);
    widget.set_rating_sequence(&[4, 4, 4]).expect("valid");

    let mut surface = RecordingSurface::new();
    widget.draw(&mut surface).expect("first draw");
    let first: Vec<_> = surface.glyph_draws().cloned().collect();
    assert_eq!(surface.origin(), (0.0, 0.0));

    surface.clear();
    widget.draw(&mut surface).expect("second draw");
    let second: Vec<_> = surface.glyph_draws().cloned().collect();

    assert_eq!(first, second);
    assert_eq!(surface.save_depth(), 0);
    assert_eq!(surface.origin(), (0.0, 0.0));
}

#[test]
fn draw_brackets_pass_with_save_and_restore() {
    let mut widget = measured_widget(328);
    widget.set_rating_sequence(&[2]).expect("valid");

    let mut surface = RecordingSurface::new();
    widget.draw(&mut surface).expect("draw");

    let commands = surface.commands();
    assert_eq!(commands.first(), Some(&SurfaceCommand::Save));
    assert_eq!(commands.last(), Some(&SurfaceCommand::Restore));
}

#[test]
fn draw_respects_host_translation() {
    let mut widget = measured_widget(328);
    widget.set_rating_sequence(&[1, 1]).expect("valid");

    let mut surface = RecordingSurface::new();
    surface.translate(100.0, 50.0);
    widget.draw(&mut surface).expect("draw");

    let xs: Vec<f64> = surface.glyph_draws().map(|draw| draw.x).collect();
    assert_eq!(xs, vec![100.0, 142.0]);
    assert_eq!(surface.origin(), (100.0, 50.0));
}

#[test]
fn glyph_geometry_comes_from_config() {
    let config = RatingTrendConfig::default()
        .with_stroke_width(2.0)
        .with_corner_radius(5.0)
        .with_spacing(8.0);
    let mut widget = RatingTrendWidget::new(config).expect("widget init");
    widget.measure(MeasureSpec::exact(256), MeasureSpec::unbounded());
    widget.set_rating_sequence(&[3]).expect("valid");

    let mut surface = RecordingSurface::new();
    widget.draw(&mut surface).expect("draw");

    let draw = surface.glyph_draws().next().expect("one glyph");
    // (256 - 56) / 8 = 25
    assert_eq!(draw.width, 25.0);
    assert_eq!(draw.stroke_width, 2.0);
    assert_eq!(draw.corner_radius, 5.0);
}

#[test]
fn select_colors_misses_outside_range() {
    let widget = measured_widget(328);
    assert!(widget.select_colors(0).is_none());
    assert!(widget.select_colors(6).is_none());
    assert_eq!(
        widget.select_colors(5),
        Some(RatingTrendConfig::default().colors.get(RatingValue::FIVE))
    );
}
