use axum::{Json, http::StatusCode, response::IntoResponse};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn home() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "stockroom inventory API",
        "documents": "/documents",
    }))
}
