use axum::Json;
use serde::Serialize;

/// API version advertised by the info endpoint.
pub const API_VERSION: &str = "1.0";

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// GET /api/
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "Universal Story Creation Platform API",
        version: API_VERSION,
    })
}
