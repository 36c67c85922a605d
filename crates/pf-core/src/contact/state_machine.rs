//! Contact form status state machine.
//!
//! Pure transition function `(status, event) -> (status, actions)` behind the
//! status banner. Side effects are returned as actions and executed by the
//! application layer.

use serde::{Deserialize, Serialize};

/// How long the success banner stays up before the form returns to idle.
pub const STATUS_RESET_AFTER_MS: u64 = 5_000;

/// Status banner state.
///
/// 状态横幅的状态。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ContactFormStatus {
    /// Nothing shown.
    ///
    /// 空闲。
    #[default]
    Idle,
    /// Waiting for the mail service; the submit button is disabled.
    ///
    /// 发送中。
    Submitting { submission: u64 },
    /// Sent. Reset to idle is pending for this submission.
    ///
    /// 发送成功。
    Success { submission: u64 },
    /// Delivery failed. Stays until the next submit.
    ///
    /// 发送失败。
    Error { reason: String },
}

/// Events that drive the form.
///
/// 驱动表单的事件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactFormEvent {
    /// User submitted a payload that passed validation.
    Submit { submission: u64 },
    /// Mail service acknowledged the message.
    DeliveryConfirmed { submission: u64 },
    /// Mail service failed or timed out.
    DeliveryFailed { submission: u64, reason: String },
    /// Reset timer scheduled for `submission` fired.
    StatusResetElapsed { submission: u64 },
}

/// Side effects produced by transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactFormAction {
    SendMessage { submission: u64 },
    ClearForm,
    ScheduleStatusReset { submission: u64, after_ms: u64 },
}

/// Pure contact form state machine.
///
/// 纯状态机：不包含副作用。
pub struct ContactFormStateMachine;

impl ContactFormStateMachine {
    pub fn transition(
        status: ContactFormStatus,
        event: ContactFormEvent,
    ) -> (ContactFormStatus, Vec<ContactFormAction>) {
        match (status, event) {
            // Re-entrant submit while a send is outstanding is dropped.
            (status @ ContactFormStatus::Submitting { .. }, ContactFormEvent::Submit { .. }) => {
                (status, Vec::new())
            }
            (_, ContactFormEvent::Submit { submission }) => (
                ContactFormStatus::Submitting { submission },
                vec![ContactFormAction::SendMessage { submission }],
            ),
            (
                ContactFormStatus::Submitting { submission },
                ContactFormEvent::DeliveryConfirmed { submission: done },
            ) if submission == done => (
                ContactFormStatus::Success { submission },
                vec![
                    ContactFormAction::ClearForm,
                    ContactFormAction::ScheduleStatusReset {
                        submission,
                        after_ms: STATUS_RESET_AFTER_MS,
                    },
                ],
            ),
            (
                ContactFormStatus::Submitting { submission },
                ContactFormEvent::DeliveryFailed {
                    submission: failed,
                    reason,
                },
            ) if submission == failed => (ContactFormStatus::Error { reason }, Vec::new()),
            (
                ContactFormStatus::Success { submission },
                ContactFormEvent::StatusResetElapsed { submission: elapsed },
            ) if submission == elapsed => (ContactFormStatus::Idle, Vec::new()),
            // Stale timers and late results of superseded submissions.
            (status, _) => (status, Vec::new()),
        }
    }
}
