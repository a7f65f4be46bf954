use axum::response::{Html, IntoResponse, Response};

use crate::app::errors;
use crate::app::services::AppServices;

/// Context pre-seeded with the keys `base.html` expects on every page.
pub fn base_context(flash: Option<String>) -> tera::Context {
    let mut context = tera::Context::new();
    context.insert("flash", &flash);
    context
}

/// Render a registered template, mapping render failures to a 500.
pub fn render(services: &AppServices, template: &str, context: &tera::Context) -> Response {
    match services.templates.render(template, context) {
        Ok(body) => Html(body).into_response(),
        Err(e) => errors::internal_error("render template", &e),
    }
}
