pub mod catalog;
pub mod common;
pub mod support;
pub mod system;

use axum::{Router, routing::get};

pub fn router() -> Router {
    Router::new()
        .route("/", get(system::index))
        .nest("/support/", support::router())
        .nest("/catalog/", catalog::router())
}
