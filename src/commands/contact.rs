use pf_app::App;
use pf_core::contact::{ContactFormPayload, ContactFormStatus, SubmitError};
use serde::Serialize;

use super::to_json;

#[derive(Serialize)]
struct Outcome {
    status: ContactFormStatus,
    delivered_at_ms: i64,
    response: String,
}

/// Send one contact message. Validation and delivery failures are errors so
/// the process exits non-zero.
pub async fn submit(app: &App, payload: ContactFormPayload, json: bool) -> anyhow::Result<String> {
    let session = app.contact_form_session();
    session.edit(payload);

    let ack = session.submit().await.map_err(|err| {
        let hint = match &err {
            SubmitError::Validation(_) => "Fix the highlighted fields and try again",
            SubmitError::Delivery(_) => "Message not sent, please try again later",
            SubmitError::InFlight => "A message is already being sent",
        };
        anyhow::Error::new(err).context(hint)
    })?;

    let outcome = Outcome {
        status: session.status(),
        delivered_at_ms: ack.delivered_at_ms,
        response: ack.receipt.text,
    };
    if json {
        to_json(&outcome)
    } else {
        Ok(format!(
            "Message sent ({}). Thanks for reaching out!",
            outcome.response.trim()
        ))
    }
}
