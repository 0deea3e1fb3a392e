//! rating-trend: a star-badge row showing the last few ratings.
//!
//! The widget measures and draws itself against backend-agnostic contracts
//! (`MeasureSpec` constraints and a `DrawSurface`), so any UI toolkit can host
//! it through a thin adapter. Cairo and GTK4 adapters ship behind features.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{RatingTrendConfig, RatingTrendWidget};
pub use error::{RatingTrendError, RatingTrendResult};
