//! After-sales support: customer reclamations and their intake form.
//!
//! The same validated submission can go down two paths chosen by the
//! endpoint: stored as a [`Reclamation`], or composed into an admin
//! notification email and never stored.

pub mod form;
pub mod notify;
pub mod reclamation;

pub use form::{MESSAGE_MIN_CHARS, ReclamationForm, ReclamationFormView};
pub use notify::compose_admin_notification;
pub use reclamation::{NewReclamation, Reclamation, ReclamationId};
