//! Opt-in tracing setup for hosts embedding `rating-trend`.
//!
//! The widget only emits `tracing` events; installing a subscriber is left to
//! the application. These helpers cover the common case of a compact stderr
//! logger filtered through `RUST_LOG`.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "rating_trend=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or the host already
/// set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// for example `"rating_trend=trace"` while debugging layout.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
