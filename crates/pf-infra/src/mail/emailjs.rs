//! EmailJS REST adapter for [`MailDeliveryPort`].
//! EmailJS 邮件投递适配器

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use pf_core::contact::{DeliveryError, MailReceipt, MailRequest};
use pf_core::ports::MailDeliveryPort;
use serde::Serialize;
use tracing::{debug, warn};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com";
const SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    /// Base URL, without the API path.
    pub endpoint: String,
    /// Per-request timeout of the HTTP client.
    pub timeout: Duration,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(8),
        }
    }
}

#[derive(Serialize)]
struct SendBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a BTreeMap<String, String>,
}

pub struct EmailJsMailer {
    client: reqwest::Client,
    url: String,
}

impl EmailJsMailer {
    pub fn new(config: EmailJsConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            url: format!("{}{}", config.endpoint.trim_end_matches('/'), SEND_PATH),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl MailDeliveryPort for EmailJsMailer {
    async fn send(&self, request: &MailRequest) -> Result<MailReceipt, DeliveryError> {
        let body = SendBody {
            service_id: &request.service_id,
            template_id: &request.template_id,
            user_id: &request.auth_token,
            template_params: &request.fields,
        };

        debug!(url = %self.url, template = %request.template_id, "Sending contact message");
        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(map_transport_error)?;

        if status.is_success() {
            Ok(MailReceipt {
                status: status.as_u16(),
                text,
            })
        } else {
            warn!(status = status.as_u16(), "Mail service rejected the message");
            Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body: text,
            })
        }
    }
}

fn map_transport_error(err: reqwest::Error) -> DeliveryError {
    DeliveryError::Transport(err.to_string())
}
