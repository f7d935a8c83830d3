use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::StoreError;

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::InvalidQuantity(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_quantity", err.to_string())
        }
        StoreError::InvalidName(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_name", msg),
        StoreError::Overflow(_) => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "quantity_overflow",
            err.to_string(),
        ),
        StoreError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        StoreError::NotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", "document not found")
        }
        StoreError::Unavailable(msg) => {
            json_error(StatusCode::SERVICE_UNAVAILABLE, "store_unavailable", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
