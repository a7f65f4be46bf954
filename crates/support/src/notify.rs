//! Admin notification for the contact path.

use comptoir_core::EmailAddress;
use comptoir_mail::OutboundEmail;

use crate::reclamation::NewReclamation;

/// Compose the notification sent instead of storing a reclamation.
///
/// The submitter's address goes in the From header so the admin can reply
/// directly; the body is the complaint text untouched.
pub fn compose_admin_notification(entry: &NewReclamation, admin: &EmailAddress) -> OutboundEmail {
    OutboundEmail::new(
        format!("Reclamation from {}", entry.email),
        entry.message.clone(),
        entry.email.clone(),
        admin.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_carries_submitter_and_admin() {
        let entry = NewReclamation {
            email: EmailAddress::parse("client@example.com").unwrap(),
            message: "The delivered unit arrived damaged.".to_string(),
        };
        let admin = EmailAddress::parse("sav@comptoir.example").unwrap();

        let email = compose_admin_notification(&entry, &admin);

        assert_eq!(email.subject, "Reclamation from client@example.com");
        assert_eq!(email.body, "The delivered unit arrived damaged.");
        assert_eq!(email.from, entry.email);
        assert_eq!(email.to, admin);
    }
}
