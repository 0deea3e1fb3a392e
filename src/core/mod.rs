pub mod geometry;
pub mod layout;
pub mod measure;
pub mod rating;

pub use geometry::{
    DEFAULT_CORNER_RADIUS, DEFAULT_SPACING, DEFAULT_STROKE_WIDTH, GeometryConfig, Insets, Size,
};
pub use layout::{SlotLayout, intrinsic_height, slot_width};
pub use measure::{MeasureMode, MeasureSpec};
pub use rating::{MAX_RATING, MAX_SEQUENCE_LEN, MIN_RATING, RatingSequence, RatingValue};
