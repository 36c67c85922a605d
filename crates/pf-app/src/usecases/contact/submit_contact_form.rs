//! Use case for delivering the contact form
//! 发送联系表单的用例

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pf_core::contact::{
    Ack, ContactFormPayload, DeliveryError, MailIdentity, MailRequest, SubmitError,
};
use pf_core::ports::{ClockPort, MailDeliveryPort};
use tracing::{info, info_span, warn, Instrument};

/// Use case for submitting the contact form.
///
/// ## Behavior / 行为
/// - Validates the payload locally; invalid input never reaches the network
/// - Sends exactly once, no retry
/// - Bounds the send with a timeout, reported as [`DeliveryError::Timeout`]
/// - Rejects a second submit while one is outstanding
pub struct SubmitContactForm {
    mail: Arc<dyn MailDeliveryPort>,
    clock: Arc<dyn ClockPort>,
    identity: MailIdentity,
    timeout: Duration,
    in_flight: AtomicBool,
}

impl SubmitContactForm {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

    pub fn new(
        mail: Arc<dyn MailDeliveryPort>,
        clock: Arc<dyn ClockPort>,
        identity: MailIdentity,
        timeout: Duration,
    ) -> Self {
        Self {
            mail,
            clock,
            identity,
            timeout,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Execute the use case.
    ///
    /// # Returns / 返回值
    /// - `Ok(Ack)` when the mail service accepted the message
    /// - `Err(SubmitError::Validation)` for bad input, without a network call
    /// - `Err(SubmitError::Delivery)` for transport, service or timeout failures
    /// - `Err(SubmitError::InFlight)` when called re-entrantly
    pub async fn execute(&self, payload: &ContactFormPayload) -> Result<Ack, SubmitError> {
        let span = info_span!("usecase.submit_contact.execute");

        async {
            let form = payload.validate().map_err(|err| {
                let fields: Vec<_> = err.issues.iter().map(|i| i.field.as_str()).collect();
                info!(?fields, "Contact form rejected by validation");
                err
            })?;

            let _guard = InFlightGuard::acquire(&self.in_flight).ok_or_else(|| {
                warn!("Contact form submitted while a send is outstanding");
                SubmitError::InFlight
            })?;

            let request = MailRequest::for_form(&self.identity, &form);
            let receipt = match tokio::time::timeout(self.timeout, self.mail.send(&request)).await
            {
                Ok(Ok(receipt)) => receipt,
                Ok(Err(err)) => {
                    warn!(error = %err, "Mail delivery failed");
                    return Err(err.into());
                }
                Err(_) => {
                    let after_ms = self.timeout.as_millis() as u64;
                    warn!(after_ms, "Mail delivery timed out");
                    return Err(DeliveryError::Timeout { after_ms }.into());
                }
            };

            info!(status = receipt.status, "Contact message delivered");
            Ok(Ack {
                delivered_at_ms: self.clock.now_ms(),
                receipt,
            })
        }
        .instrument(span)
        .await
    }
}

/// Holds the in-flight flag; clears it on drop, including on early return.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
