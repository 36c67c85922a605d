//! A rendered contact form: draft fields, status banner and reset timers.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use pf_core::contact::{
    Ack, ContactFormAction, ContactFormEvent, ContactFormPayload, ContactFormStateMachine,
    ContactFormStatus, SubmitError,
};
use tokio::sync::watch;
use tracing::debug;

use super::SubmitContactForm;

struct SessionInner {
    status: ContactFormStatus,
    draft: ContactFormPayload,
    next_submission: u64,
}

/// Drives [`ContactFormStateMachine`] for one form instance.
///
/// Status changes are published on a watch channel so the presentation
/// layer can re-render the banner and the submit button.
#[derive(Clone)]
pub struct ContactFormSession {
    submit: Arc<SubmitContactForm>,
    inner: Arc<Mutex<SessionInner>>,
    status_tx: Arc<watch::Sender<ContactFormStatus>>,
}

impl ContactFormSession {
    pub fn new(submit: Arc<SubmitContactForm>) -> Self {
        let (status_tx, _) = watch::channel(ContactFormStatus::Idle);
        Self {
            submit,
            inner: Arc::new(Mutex::new(SessionInner {
                status: ContactFormStatus::Idle,
                draft: ContactFormPayload::default(),
                next_submission: 1,
            })),
            status_tx: Arc::new(status_tx),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        // A poisoned lock only means a panic elsewhere; the data is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the draft with the user's current input.
    pub fn edit(&self, draft: ContactFormPayload) {
        self.lock().draft = draft;
    }

    pub fn draft(&self) -> ContactFormPayload {
        self.lock().draft.clone()
    }

    pub fn status(&self) -> ContactFormStatus {
        self.lock().status.clone()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<ContactFormStatus> {
        self.status_tx.subscribe()
    }

    /// Submit the current draft.
    ///
    /// Validation failures leave the status untouched. A submit while one is
    /// outstanding returns [`SubmitError::InFlight`] without a second send.
    pub async fn submit(&self) -> Result<Ack, SubmitError> {
        let (payload, submission) = {
            let mut inner = self.lock();
            inner.draft.validate()?;

            let submission = inner.next_submission;
            let actions = self.apply(&mut inner, ContactFormEvent::Submit { submission });
            if !actions
                .iter()
                .any(|a| matches!(a, ContactFormAction::SendMessage { .. }))
            {
                return Err(SubmitError::InFlight);
            }
            inner.next_submission += 1;
            (inner.draft.clone(), submission)
        };

        let result = self.submit.execute(&payload).await;

        let event = match &result {
            Ok(_) => ContactFormEvent::DeliveryConfirmed { submission },
            Err(err) => ContactFormEvent::DeliveryFailed {
                submission,
                reason: err.to_string(),
            },
        };
        let actions = {
            let mut inner = self.lock();
            self.apply(&mut inner, event)
        };
        self.run_actions(actions);

        result
    }

    fn apply(&self, inner: &mut SessionInner, event: ContactFormEvent) -> Vec<ContactFormAction> {
        let (next, actions) = ContactFormStateMachine::transition(inner.status.clone(), event);
        if next != inner.status {
            debug!(from = ?inner.status, to = ?next, "Contact form status changed");
            inner.status = next.clone();
            self.status_tx.send_replace(next);
        }
        actions
    }

    fn run_actions(&self, actions: Vec<ContactFormAction>) {
        for action in actions {
            match action {
                ContactFormAction::ClearForm => {
                    self.lock().draft = ContactFormPayload::default();
                }
                ContactFormAction::ScheduleStatusReset {
                    submission,
                    after_ms,
                } => {
                    let session = self.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(Duration::from_millis(after_ms)).await;
                        let mut inner = session.lock();
                        session.apply(&mut inner, ContactFormEvent::StatusResetElapsed { submission });
                    });
                }
                // Sending is driven inline by `submit`.
                ContactFormAction::SendMessage { .. } => {}
            }
        }
    }
}
