use rating_trend::RatingTrendError;
use rating_trend::api::{
    ColorTable, DEFAULT_INTRINSIC_WIDTH, RATING_TREND_CONFIG_JSON_SCHEMA_V1, RatingTrendConfig,
    RatingTrendWidget,
};
use rating_trend::core::{GeometryConfig, RatingValue};
use rating_trend::render::{Color, ColorPair, StarIcon};

#[test]
fn defaults_match_documented_values() {
    let config = RatingTrendConfig::default();
    assert_eq!(config.geometry, GeometryConfig::new(3.0, 8.0, 12.0));
    assert_eq!(config.star_icon.name(), "ic_star");
    assert_eq!(config.default_intrinsic_width, DEFAULT_INTRINSIC_WIDTH);
    config.validate().expect("defaults are valid");
}

#[test]
fn empty_object_parses_to_defaults() {
    let config = RatingTrendConfig::from_json_compat_str("{}").expect("parse");
    assert_eq!(config, RatingTrendConfig::default());
}

#[test]
fn partial_config_overrides_only_named_fields() {
    let json = r##"{
        "geometry": { "spacing": 6.0 },
        "colors": { "three": { "stroke": "#112233", "fill": "#44556680" } },
        "star_icon": "ic_star_outline"
    }"##;
    let config = RatingTrendConfig::from_json_compat_str(json).expect("parse");

    assert_eq!(config.geometry.spacing, 6.0);
    assert_eq!(config.geometry.stroke_width, 3.0);
    assert_eq!(config.star_icon.name(), "ic_star_outline");

    let three = config.colors.get(RatingValue::THREE);
    assert_eq!(three.stroke.to_hex(), "#112233");
    assert_eq!(three.fill.to_hex(), "#44556680");
    assert_eq!(
        config.colors.get(RatingValue::ONE),
        ColorTable::default().get(RatingValue::ONE)
    );
}

#[test]
fn contract_envelope_round_trips() {
    let config = RatingTrendConfig::default()
        .with_spacing(10.0)
        .with_star_icon(StarIcon::new("badge").expect("icon"));
    let json = config.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!(
        "\"schema_version\": {RATING_TREND_CONFIG_JSON_SCHEMA_V1}"
    )));

    let parsed = RatingTrendConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn bare_json_round_trips() {
    let config = RatingTrendConfig::default().with_corner_radius(2.5);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = RatingTrendConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let err = RatingTrendConfig::from_json_compat_str(r#"{"schema_version": 7, "config": {}}"#)
        .expect_err("unsupported version");
    assert!(matches!(err, RatingTrendError::InvalidConfig(_)));
}

#[test]
fn malformed_color_is_rejected() {
    let json = r##"{ "colors": { "one": { "stroke": "#12", "fill": "#000000" } } }"##;
    let err = RatingTrendConfig::from_json_compat_str(json).expect_err("bad color");
    assert!(matches!(err, RatingTrendError::InvalidConfig(_)));
}

#[test]
fn negative_geometry_is_rejected_by_widget() {
    let config = RatingTrendConfig::default().with_spacing(-1.0);
    let err = RatingTrendWidget::new(config).expect_err("negative spacing");
    assert!(matches!(err, RatingTrendError::InvalidConfig(_)));
}

#[test]
fn non_finite_geometry_is_rejected() {
    let config = RatingTrendConfig::default().with_stroke_width(f64::NAN);
    assert!(config.validate().is_err());
}

#[test]
fn out_of_range_color_channel_is_rejected() {
    let bad = ColorPair::new(Color::rgb(1.5, 0.0, 0.0), Color::rgb(0.0, 0.0, 0.0));
    let config = RatingTrendConfig::default()
        .with_colors(ColorTable::default().with_pair(RatingValue::TWO, bad));
    assert!(RatingTrendWidget::new(config).is_err());
}

#[test]
fn empty_icon_name_is_rejected() {
    let err = RatingTrendConfig::from_json_compat_str(r#"{"star_icon": ""}"#)
        .expect_err("empty icon");
    assert!(matches!(err, RatingTrendError::InvalidConfig(_)));
}

#[test]
fn negative_intrinsic_width_is_rejected() {
    let config = RatingTrendConfig::default().with_default_intrinsic_width(-5);
    assert!(config.validate().is_err());
}
