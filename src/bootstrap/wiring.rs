//! # Dependency Injection / 依赖注入模块
//!
//! Turns the config DTO into settings (defaults, env overrides) and builds
//! the adapters behind each port. Assembly only; no business decisions.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use pf_app::{AppDeps, AppSettings};
use pf_core::config::AppConfig;
use pf_core::contact::MailIdentity;
use pf_core::ports::{ProjectCatalogPort, ViewportPort};
use pf_core::scroll::{
    ScrollTrackerConfig, DEFAULT_ACTIVATION_THRESHOLD_PX, DEFAULT_SCROLLED_THRESHOLD_PX,
};
use pf_app::usecases::SubmitContactForm;
use pf_infra::{BuiltinCatalog, EmailJsConfig, EmailJsMailer, SystemClock, TomlCatalogSource};
use tracing::debug;

pub const ENV_MAIL_SERVICE_ID: &str = "PORTFOLIO_MAIL_SERVICE_ID";
pub const ENV_MAIL_TEMPLATE_ID: &str = "PORTFOLIO_MAIL_TEMPLATE_ID";
pub const ENV_MAIL_PUBLIC_KEY: &str = "PORTFOLIO_MAIL_PUBLIC_KEY";

/// Apply policy to the raw config.
///
/// Empty or zero values fall back to defaults; non-empty environment values
/// (looked up through `env`) override the mail identity from the file.
pub fn build_settings(config: &AppConfig, env: impl Fn(&str) -> Option<String>) -> AppSettings {
    let pick = |key: &str, file_value: &str| {
        env(key)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| file_value.to_string())
    };

    let mail_timeout = if config.mail_timeout_ms == 0 {
        SubmitContactForm::DEFAULT_TIMEOUT
    } else {
        Duration::from_millis(config.mail_timeout_ms)
    };

    let activation_threshold_px = if config.activation_threshold_px > 0.0 {
        config.activation_threshold_px
    } else {
        DEFAULT_ACTIVATION_THRESHOLD_PX
    };

    AppSettings {
        mail_identity: MailIdentity {
            service_id: pick(ENV_MAIL_SERVICE_ID, &config.mail_service_id),
            template_id: pick(ENV_MAIL_TEMPLATE_ID, &config.mail_template_id),
            public_key: pick(ENV_MAIL_PUBLIC_KEY, &config.mail_public_key),
        },
        mail_timeout,
        scroll: ScrollTrackerConfig {
            activation_threshold_px,
            scrolled_threshold_px: config
                .scrolled_threshold_px
                .unwrap_or(DEFAULT_SCROLLED_THRESHOLD_PX),
        },
    }
}

/// Settings with overrides read from the process environment.
pub fn settings_from_env(config: &AppConfig) -> AppSettings {
    build_settings(config, |key| std::env::var(key).ok())
}

fn catalog_source(config: &AppConfig) -> Arc<dyn ProjectCatalogPort> {
    if config.catalog_path.as_os_str().is_empty() {
        Arc::new(BuiltinCatalog)
    } else {
        Arc::new(TomlCatalogSource::new(config.catalog_path.clone()))
    }
}

/// Build every adapter. The viewport is supplied by the caller since it
/// depends on the command being run.
pub fn wire_dependencies(
    config: &AppConfig,
    settings: &AppSettings,
    viewport: Arc<dyn ViewportPort>,
) -> anyhow::Result<AppDeps> {
    let mut mail_config = EmailJsConfig {
        timeout: settings.mail_timeout,
        ..EmailJsConfig::default()
    };
    if !config.mail_endpoint.is_empty() {
        mail_config.endpoint = config.mail_endpoint.clone();
    }
    debug!(endpoint = %mail_config.endpoint, "Wiring mail adapter");

    let mailer = EmailJsMailer::new(mail_config).context("Failed to build mail HTTP client")?;

    Ok(AppDeps {
        catalog: catalog_source(config),
        mail: Arc::new(mailer),
        viewport,
        clock: Arc::new(SystemClock),
    })
}
