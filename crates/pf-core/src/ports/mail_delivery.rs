use async_trait::async_trait;

use crate::contact::{DeliveryError, MailReceipt, MailRequest};

/// External mail delivery service.
///
/// 外部邮件投递服务端口。
///
/// # Behavior / 行为
/// - One call is one delivery attempt. Implementations must not retry.
/// - Transport failures and non-success responses map to [`DeliveryError`].
#[async_trait]
pub trait MailDeliveryPort: Send + Sync {
    async fn send(&self, request: &MailRequest) -> Result<MailReceipt, DeliveryError>;
}

#[cfg(test)]
mockall::mock! {
    pub MailDelivery {}

    #[async_trait]
    impl MailDeliveryPort for MailDelivery {
        async fn send(&self, request: &MailRequest) -> Result<MailReceipt, DeliveryError>;
    }
}
