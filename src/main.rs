//! Article quality service: binary entrypoint.
//! Boots the Axum HTTP server, wiring routes, shared state, and metrics.

use article_quality_analyzer::{api, config::ServiceConfig, init_tracing, metrics::Metrics};
use shuttle_axum::ShuttleAxum;

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    let config = ServiceConfig::from_env().map_err(anyhow::Error::from)?;
    init_tracing(config.dev_log);
    tracing::info!(
        max_text_chars = config.max_text_chars,
        debug_routes = config.debug_routes,
        "service config loaded"
    );

    let metrics = Metrics::init()?;
    let router = api::create_router(api::AppState::new(config)).merge(metrics.router::<()>());

    Ok(router.into())
}
