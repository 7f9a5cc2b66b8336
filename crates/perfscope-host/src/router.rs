//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{host_state::HostState, http, ops};

pub fn build_router(state: HostState) -> Router {
    Router::new()
        .route("/v1/timers/:name/start", post(http::timers::start))
        .route("/v1/timers/:name/stop", post(http::timers::stop))
        .route(
            "/v1/metrics",
            get(http::timers::list).delete(http::timers::clear),
        )
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
