//! `comptoir-core`: form validation building blocks.
//!
//! This crate contains the **pure validation** primitives shared by both
//! apps (no IO, no HTTP, no storage): field-level error kinds, the
//! per-form error collection, the rule functions each form runs in order,
//! and the validated [`EmailAddress`] type.

pub mod email;
pub mod field;
pub mod rules;
pub mod view;

pub use email::{EmailAddress, MAX_EMAIL_CHARS};
pub use field::{FieldError, FormErrors};
pub use view::{FieldView, Widget};
