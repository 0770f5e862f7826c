use std::sync::Arc;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;
use crate::controller::api_proxy_controller::ApiProxy;

pub fn router() -> Router {
    Router::new().route("/health", get(get_health_check))
}

/// Reports the dev server as up and names the backend it forwards to
async fn get_health_check(
    Extension(proxy): Extension<Arc<ApiProxy>>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "backend": proxy.backend_url() })),
    )
}
