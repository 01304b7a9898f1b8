// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod analyze;
pub mod api;
pub mod config;
pub mod decision;
pub mod metrics;
pub mod report;
pub mod summary;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{evaluate, AnalysisResult, ContentType, QualityMetrics, SignalScore};
pub use crate::api::{create_router, AppState};
pub use crate::decision::{Action, Icon, RecommendedAction};
pub use crate::report::ArticleReport;
pub use crate::summary::SummaryDigest;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact tracing for binaries. Activation requires `dev_log` (config or
/// `ANALYZER_DEV_LOG=1`); otherwise only warnings are printed.
pub fn init_tracing(dev_log: bool) {
    let default = if dev_log { "analyze=debug,api=info,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // try_init: tests and repeated calls must not panic on an installed subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}
