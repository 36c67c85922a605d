//! Contact form domain module.
//!
//! Payload validation, delivery request/ack types and the pure state machine
//! behind the form's status banner.

pub mod delivery;
pub mod payload;
pub mod state_machine;

pub use delivery::{Ack, DeliveryError, MailIdentity, MailReceipt, MailRequest, SubmitError};
pub use payload::{
    ContactField, ContactFormPayload, FieldIssue, FieldProblem, ValidatedContactForm,
    ValidationError,
};
pub use state_machine::{
    ContactFormAction, ContactFormEvent, ContactFormStateMachine, ContactFormStatus,
    STATUS_RESET_AFTER_MS,
};
