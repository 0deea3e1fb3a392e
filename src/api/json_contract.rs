use serde::{Deserialize, Serialize};

use crate::error::{RatingTrendError, RatingTrendResult};

use super::RatingTrendConfig;

pub const RATING_TREND_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingTrendConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: RatingTrendConfig,
}

impl RatingTrendConfig {
    pub fn to_json_pretty(&self) -> RatingTrendResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            RatingTrendError::InvalidConfig(format!("failed to serialize config json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> RatingTrendResult<String> {
        let payload = RatingTrendConfigJsonContractV1 {
            schema_version: RATING_TREND_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            RatingTrendError::InvalidConfig(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract envelope,
    /// then validates the result.
    pub fn from_json_compat_str(input: &str) -> RatingTrendResult<Self> {
        let config = if is_contract_envelope(input) {
            let payload: RatingTrendConfigJsonContractV1 =
                serde_json::from_str(input).map_err(|e| {
                    RatingTrendError::InvalidConfig(format!(
                        "failed to parse config contract payload: {e}"
                    ))
                })?;
            if payload.schema_version != RATING_TREND_CONFIG_JSON_SCHEMA_V1 {
                return Err(RatingTrendError::InvalidConfig(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_str::<RatingTrendConfig>(input).map_err(|e| {
                RatingTrendError::InvalidConfig(format!("failed to parse config json: {e}"))
            })?
        };
        config.validate()?;
        Ok(config)
    }
}

// Every config field is optional, so a bare parse would also accept an
// envelope and silently drop it; detect the envelope by its version key.
fn is_contract_envelope(input: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(input)
        .ok()
        .and_then(|value| value.get("schema_version").cloned())
        .is_some()
}
