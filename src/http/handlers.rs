use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};

use crate::engines::EngineMatcher;
use crate::http::request::X_REQUEST_ID;
use crate::http::server::AppState;
use crate::intercept::{Decision, RequestDetails};

#[derive(Debug, Serialize, Deserialize)]
pub struct SystemStatus {
    pub version: String,
    pub status: String,
    pub engines: usize,
    pub tlds: usize,
}

/// Decide whether an observed request should be redirected.
pub async fn decide(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<RequestDetails>,
) -> Json<Decision> {
    let request_id = headers
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let decision = state.interceptor.handle_request(&request);

    tracing::debug!(
        request_id = %request_id,
        url = %request.url,
        user_initiated = request.is_user_initiated(),
        redirect = ?decision.redirect_url(),
        "Decision made"
    );

    Json(decision)
}

/// Registered engines in match order.
pub async fn get_engines(State(state): State<AppState>) -> Json<Vec<EngineMatcher>> {
    Json(state.interceptor.registry().iter().cloned().collect())
}

pub async fn get_tlds(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.interceptor.tlds().iter().map(str::to_string).collect())
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    let interceptor = &state.interceptor;
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "operational".to_string(),
        engines: interceptor.registry().len(),
        tlds: interceptor.tlds().len(),
    })
}
