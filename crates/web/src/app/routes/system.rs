use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::Response};

use crate::app::routes::common;
use crate::app::services::AppServices;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn index(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let context = common::base_context(None);
    common::render(&services, "index.html", &context)
}
