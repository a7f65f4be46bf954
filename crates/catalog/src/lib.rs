//! Product catalog: records and the add-product form.
//!
//! The form collects one field more than the record stores; the extra
//! checkbox is validated, surfaced in [`ValidatedProductEntry`], and goes
//! no further.

pub mod form;
pub mod product;

pub use form::{ProductForm, ProductFormView, ValidatedProductEntry};
pub use product::{NewProduct, Product, ProductId};
