//! The add-product form.

use serde::Serialize;

use comptoir_core::{FieldView, FormErrors, Widget, rules};

use crate::product::NewProduct;

/// Raw submitted state of the product form.
///
/// Carries one field more than [`NewProduct`] stores: the notification
/// checkbox is collected and validated like any other field, then dropped
/// by everyone downstream of [`ValidatedProductEntry`].
#[derive(Debug, Clone)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub notify_on_low_stock: bool,
    price_label: String,
}

impl ProductForm {
    /// An unbound form, for the initial GET render.
    pub fn empty() -> Self {
        Self::bind("", "", "", None)
    }

    /// A form bound to posted values.
    ///
    /// The checkbox arrives as an optional raw value, absent when left
    /// unchecked. The price label is instance state, assigned here rather
    /// than where the view is built.
    pub fn bind(
        name: impl Into<String>,
        price: impl Into<String>,
        stock: impl Into<String>,
        notify_on_low_stock: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            stock: stock.into(),
            notify_on_low_stock: rules::checkbox(notify_on_low_stock),
            price_label: "Price (€)".to_string(),
        }
    }

    /// Check every field and produce either a validated entry or the full
    /// set of per-field errors.
    ///
    /// The checkbox cannot fail validation; absence just means `false`.
    pub fn validate(&self) -> Result<ValidatedProductEntry, FormErrors> {
        let mut errors = FormErrors::new();

        let name_raw = self.name.trim();
        if let Err(err) = rules::required(name_raw) {
            errors.push("name", err);
        }

        let price_raw = self.price.trim();
        let mut price = None;
        match rules::required(price_raw) {
            Err(err) => errors.push("price", err),
            Ok(()) => match rules::parse_decimal(price_raw) {
                Ok(value) => price = Some(value),
                Err(err) => errors.push("price", err),
            },
        }

        let stock_raw = self.stock.trim();
        let mut stock = None;
        match rules::required(stock_raw) {
            Err(err) => errors.push("stock", err),
            Ok(()) => match rules::parse_integer(stock_raw) {
                Ok(value) => stock = Some(value),
                Err(err) => errors.push("stock", err),
            },
        }

        match (price, stock, errors.is_empty()) {
            (Some(price), Some(stock), true) => Ok(ValidatedProductEntry {
                product: NewProduct {
                    name: name_raw.to_string(),
                    price,
                    stock,
                },
                notify_on_low_stock: self.notify_on_low_stock,
            }),
            _ => Err(errors),
        }
    }

    /// Field views for rendering, raw values echoed back.
    ///
    /// The name field renders as a textarea even though the record stores a
    /// single line; widget choice and storage type are independent.
    pub fn view(&self, errors: &FormErrors) -> ProductFormView {
        ProductFormView {
            name: FieldView::new("Product name", Widget::Textarea)
                .with_value(self.name.as_str())
                .with_errors(errors.field("name"))
                .with_attr("class", "form-control product-input")
                .with_attr("placeholder", "e.g., Wireless Headphones")
                .with_attr(
                    "style",
                    "border: 2px solid #4CAF50; padding: 8px; border-radius: 4px;",
                ),
            price: FieldView::new(self.price_label.as_str(), Widget::Number)
                .with_value(self.price.as_str())
                .with_errors(errors.field("price")),
            stock: FieldView::new("Stock", Widget::Number)
                .with_value(self.stock.as_str())
                .with_errors(errors.field("stock")),
            notify_on_low_stock: FieldView::new(
                "Receive a notification when stock is low",
                Widget::Checkbox,
            )
            .with_value(if self.notify_on_low_stock { "on" } else { "" })
            .with_help_text("Check this box to be notified when stock drops below 10 units"),
        }
    }
}

/// Validation output: the persistable product plus the checkbox that rode
/// along. Stores take only [`ValidatedProductEntry::product`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProductEntry {
    pub product: NewProduct,
    pub notify_on_low_stock: bool,
}

/// Render-ready form state.
#[derive(Debug, Clone, Serialize)]
pub struct ProductFormView {
    pub name: FieldView,
    pub price: FieldView,
    pub stock: FieldView,
    pub notify_on_low_stock: FieldView,
}
