use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::payload::{ValidatedContactForm, ValidationError};

/// Deployment identifiers of the mail delivery service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailIdentity {
    pub service_id: String,
    pub template_id: String,
    /// Public key the service uses to authenticate browser-side sends.
    pub public_key: String,
}

/// One send request: identifiers plus the template fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailRequest {
    pub service_id: String,
    pub template_id: String,
    pub fields: BTreeMap<String, String>,
    pub auth_token: String,
}

impl MailRequest {
    pub fn for_form(identity: &MailIdentity, form: &ValidatedContactForm) -> Self {
        Self {
            service_id: identity.service_id.clone(),
            template_id: identity.template_id.clone(),
            fields: form.to_fields(),
            auth_token: identity.public_key.clone(),
        }
    }
}

/// Raw success response of the delivery service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailReceipt {
    pub status: u16,
    pub text: String,
}

/// Acknowledgement returned to the form after a successful send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub delivered_at_ms: i64,
    pub receipt: MailReceipt,
}

/// External-dependency failure. The user may retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("mail service unreachable: {0}")]
    Transport(String),

    #[error("mail service rejected the message (status {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("mail service did not answer within {after_ms} ms")]
    Timeout { after_ms: u64 },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    /// A submission from the same form is still outstanding.
    #[error("a submission is already in progress")]
    InFlight,
}

impl SubmitError {
    /// Whether trying again later may succeed without editing the form.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmitError::Delivery(_) | SubmitError::InFlight)
    }
}
