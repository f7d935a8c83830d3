use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use stockroom_core::{DocumentId, RemoveOutcome};

use crate::app::{dto, errors};
use crate::app::services::SharedStore;

pub fn router() -> Router {
    // `/{name}/{quantity}` (POST) and `/{id}/{quantity}` (DELETE) share one
    // route pattern; handlers interpret the first segment themselves.
    Router::new()
        .route("/", get(list_documents))
        .route("/:id", get(get_document).delete(delete_document))
        .route("/:name/:quantity", post(add_document).delete(remove_quantity))
}

pub async fn add_document(
    Extension(store): Extension<SharedStore>,
    Path((name, quantity)): Path<(String, String)>,
) -> axum::response::Response {
    let quantity: i64 = match quantity.parse() {
        Ok(q) => q,
        Err(_) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_quantity",
                "quantity must be an integer",
            );
        }
    };

    match store.add(&name, quantity) {
        Ok(doc) => (
            StatusCode::OK,
            Json(serde_json::json!({ "document": dto::document_to_json(&doc) })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_document(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: DocumentId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid document id");
        }
    };

    match store.get(id) {
        Ok(doc) => (
            StatusCode::OK,
            Json(serde_json::json!({ "document": dto::document_to_json(&doc) })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_documents(
    Extension(store): Extension<SharedStore>,
) -> axum::response::Response {
    match store.list() {
        Ok(docs) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "documents": docs.iter().map(dto::document_to_json).collect::<Vec<_>>(),
            })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_document(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: DocumentId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid document id");
        }
    };

    match store.delete(id) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "result": "document deleted." })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn remove_quantity(
    Extension(store): Extension<SharedStore>,
    Path((id, quantity)): Path<(String, String)>,
) -> axum::response::Response {
    let id: DocumentId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid document id");
        }
    };
    let quantity: i64 = match quantity.parse() {
        Ok(q) => q,
        Err(_) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_quantity",
                "quantity must be an integer",
            );
        }
    };

    match store.remove(id, quantity) {
        Ok(RemoveOutcome::Deleted) => (
            StatusCode::OK,
            Json(serde_json::json!({ "result": "document deleted." })),
        )
            .into_response(),
        Ok(RemoveOutcome::Decremented { remaining }) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "result": format!("{quantity} documents removed."),
                "remaining": remaining,
            })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
