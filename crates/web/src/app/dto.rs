use serde::Deserialize;

// -------------------------
// Form payloads
// -------------------------
//
// Every text field defaults to empty: a missing key must surface as a
// "required" validation message, not a deserialization failure.

#[derive(Debug, Deserialize)]
pub struct ReclamationPayload {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub stock: String,
    /// Unchecked boxes are absent from the urlencoded body.
    pub notify_on_low_stock: Option<String>,
}
