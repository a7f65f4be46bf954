//! After-sales routes. `/add` stores the reclamation; `/contact` mails it
//! to the admin instead. Both sit on the same form and validation.

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::Extension,
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};

use comptoir_core::FormErrors;
use comptoir_support::{ReclamationForm, compose_admin_notification};

use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::app::{dto, errors, flash};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_reclamations))
        .route("/add", get(add_form).post(submit_reclamation))
        .route("/contact", get(contact_form).post(submit_contact))
}

pub async fn add_form(Extension(services): Extension<Arc<AppServices>>) -> Response {
    render_add(&services, &ReclamationForm::empty(), &FormErrors::new())
}

pub async fn submit_reclamation(
    Extension(services): Extension<Arc<AppServices>>,
    Form(payload): Form<dto::ReclamationPayload>,
) -> Response {
    let form = ReclamationForm::bind(payload.email, payload.message);
    let entry = match form.validate() {
        Ok(entry) => entry,
        Err(form_errors) => return render_add(&services, &form, &form_errors),
    };

    match services.reclamations.create(entry).await {
        Ok(stored) => {
            tracing::info!(id = %stored.id, "reclamation stored");
            Redirect::to("/support/add").into_response()
        }
        Err(e) => errors::internal_error("store reclamation", &e),
    }
}

pub async fn contact_form(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
) -> Response {
    let (flash_message, clear) = flash::take(&headers);
    let mut context = common::base_context(flash_message);
    context.insert("form", &ReclamationForm::empty().view(&FormErrors::new()));

    let mut response = common::render(&services, "support/contact.html", &context);
    if let Some(value) = clear {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

pub async fn submit_contact(
    Extension(services): Extension<Arc<AppServices>>,
    Form(payload): Form<dto::ReclamationPayload>,
) -> Response {
    let form = ReclamationForm::bind(payload.email, payload.message);
    let entry = match form.validate() {
        Ok(entry) => entry,
        Err(form_errors) => return render_contact(&services, &form, &form_errors),
    };

    let email = compose_admin_notification(&entry, &services.admin_email);
    if let Err(e) = services.mailer.send(&email).await {
        return errors::internal_error("send reclamation notification", &e);
    }
    tracing::info!(to = %email.to, "reclamation notification sent");

    let mut response = Redirect::to("/support/contact").into_response();
    if let Some(value) = flash::set("Your complaint has been sent.") {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

pub async fn list_reclamations(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let reclamations = match services.reclamations.list_recent().await {
        Ok(rows) => rows,
        Err(e) => return errors::internal_error("list reclamations", &e),
    };

    let mut context = common::base_context(None);
    context.insert("reclamations", &reclamations);
    common::render(&services, "support/reclamation_list.html", &context)
}

fn render_add(
    services: &AppServices,
    form: &ReclamationForm,
    form_errors: &FormErrors,
) -> Response {
    let mut context = common::base_context(None);
    context.insert("form", &form.view(form_errors));
    common::render(services, "support/add_reclamation.html", &context)
}

fn render_contact(
    services: &AppServices,
    form: &ReclamationForm,
    form_errors: &FormErrors,
) -> Response {
    let mut context = common::base_context(None);
    context.insert("form", &form.view(form_errors));
    common::render(services, "support/contact.html", &context)
}
