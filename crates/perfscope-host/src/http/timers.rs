use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::host_state::HostState;
use crate::http::ApiError;

/// `POST /v1/timers/:name/start`
pub async fn start(State(state): State<HostState>, Path(name): Path<String>) -> StatusCode {
    state.registry().start(&name);
    state.metrics().request("start", "ok");
    StatusCode::NO_CONTENT
}

/// `POST /v1/timers/:name/stop`
///
/// Unknown labels answer 204 by default, or 404 with `UNKNOWN_LABEL` when
/// `registry.strict_stop` is set.
pub async fn stop(State(state): State<HostState>, Path(name): Path<String>) -> Response {
    let registry = state.registry();
    if state.strict_stop() {
        return match registry.try_stop(&name) {
            Ok(metric) => {
                state.metrics().request("stop", "ok");
                (StatusCode::OK, Json(metric)).into_response()
            }
            Err(e) => {
                state.metrics().request("stop", "unknown_label");
                ApiError(e).into_response()
            }
        };
    }

    match registry.stop(&name) {
        Some(metric) => {
            state.metrics().request("stop", "ok");
            (StatusCode::OK, Json(metric)).into_response()
        }
        None => {
            state.metrics().request("stop", "noop");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}

/// `GET /v1/metrics`
pub async fn list(State(state): State<HostState>) -> impl IntoResponse {
    state.metrics().request("list", "ok");
    Json(state.registry().get_metrics())
}

/// `DELETE /v1/metrics`
pub async fn clear(State(state): State<HostState>) -> StatusCode {
    state.registry().clear();
    state.metrics().request("clear", "ok");
    tracing::info!("timer registry cleared");
    StatusCode::NO_CONTENT
}
