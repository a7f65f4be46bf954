//! HTTP application wiring (Axum router + service wiring).
//!
//! If you're new to Rust, this folder is structured like:
//! - `services.rs`: backend wiring (stores, mailer, template registry)
//! - `routes/`: HTTP routes + handlers (one file per app area)
//! - `dto.rs`: form payload DTOs
//! - `flash.rs`: the one-time confirmation cookie
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

pub mod config;
pub mod dto;
pub mod errors;
pub mod flash;
pub mod routes;
pub mod services;
pub mod templates;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(services)))
}
