mod color_table;
mod config;
mod invalidation;
mod json_contract;
#[cfg(feature = "cairo-backend")]
mod render_cairo;
mod widget;

pub use color_table::ColorTable;
pub use config::{DEFAULT_INTRINSIC_WIDTH, RatingTrendConfig};
pub use invalidation::{InvalidationCallback, InvalidationReason};
pub use json_contract::{RATING_TREND_CONFIG_JSON_SCHEMA_V1, RatingTrendConfigJsonContractV1};
pub use widget::RatingTrendWidget;
