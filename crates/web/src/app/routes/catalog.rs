//! Catalog routes: add-product form and the product list.

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::Extension,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};

use comptoir_catalog::ProductForm;
use comptoir_core::FormErrors;

use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/add", get(add_form).post(submit_product))
}

pub async fn add_form(Extension(services): Extension<Arc<AppServices>>) -> Response {
    render_add(&services, &ProductForm::empty(), &FormErrors::new())
}

pub async fn submit_product(
    Extension(services): Extension<Arc<AppServices>>,
    Form(payload): Form<dto::ProductPayload>,
) -> Response {
    let form = ProductForm::bind(
        payload.name,
        payload.price,
        payload.stock,
        payload.notify_on_low_stock.as_deref(),
    );
    let entry = match form.validate() {
        Ok(entry) => entry,
        Err(form_errors) => return render_add(&services, &form, &form_errors),
    };

    // entry.notify_on_low_stock stops here; only the record fields persist.
    match services.products.create(entry.product).await {
        Ok(stored) => {
            tracing::info!(id = %stored.id, "product stored");
            Redirect::to("/catalog/add").into_response()
        }
        Err(e) => errors::internal_error("store product", &e),
    }
}

pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let products = match services.products.list().await {
        Ok(rows) => rows,
        Err(e) => return errors::internal_error("list products", &e),
    };

    let mut context = common::base_context(None);
    context.insert("products", &products);
    common::render(&services, "catalog/product_list.html", &context)
}

fn render_add(services: &AppServices, form: &ProductForm, form_errors: &FormErrors) -> Response {
    let mut context = common::base_context(None);
    context.insert("form", &form.view(form_errors));
    common::render(services, "catalog/add_product.html", &context)
}
