//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: backend selection and store wiring
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: response JSON mapping helpers
//! - `errors.rs`: consistent error responses

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    build_app_with(services::build_store())
}

/// Router over an explicit store; tests inject their own backend here.
pub fn build_app_with(store: services::SharedStore) -> Router {
    Router::new()
        .route("/", get(routes::system::home))
        .route("/health", get(routes::system::health))
        .nest("/documents", routes::documents::router())
        .layer(Extension(store))
        .layer(ServiceBuilder::new())
}
