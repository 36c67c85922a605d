//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value calculation / 禁止默认值计算**
//!
//! Defaults (endpoint, timeout, thresholds) are policy and are applied by the
//! wiring layer when a value here is empty or zero.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the mail delivery API (may be empty)
    pub mail_endpoint: String,
    pub mail_service_id: String,
    pub mail_template_id: String,
    pub mail_public_key: String,
    /// Send timeout in milliseconds (0 means "not configured")
    pub mail_timeout_ms: u64,

    /// Activation line in px (0 means "not configured")
    pub activation_threshold_px: f64,
    /// Scrolled-style threshold in px (`None` means "not configured")
    pub scrolled_threshold_px: Option<u32>,

    /// Project catalog file (empty means "use the built-in catalog")
    pub catalog_path: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// **Prohibited / 禁止**: no validation, no defaults. Missing keys become
    /// empty facts.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section = |name: &str, key: &str| toml_value.get(name).and_then(|s| s.get(key));
        let string = |name: &str, key: &str| {
            section(name, key)
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            mail_endpoint: string("mail", "endpoint"),
            mail_service_id: string("mail", "service_id"),
            mail_template_id: string("mail", "template_id"),
            mail_public_key: string("mail", "public_key"),
            mail_timeout_ms: section("mail", "timeout_ms")
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            activation_threshold_px: section("scroll", "activation_threshold_px")
                .and_then(|v| v.as_float().or_else(|| v.as_integer().map(|i| i as f64)))
                .unwrap_or(0.0),
            scrolled_threshold_px: section("scroll", "scrolled_threshold_px")
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u32),
            catalog_path: PathBuf::from(string("catalog", "path")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            mail_endpoint: String::new(),
            mail_service_id: String::new(),
            mail_template_id: String::new(),
            mail_public_key: String::new(),
            mail_timeout_ms: 0,
            activation_threshold_px: 0.0,
            scrolled_threshold_px: None,
            catalog_path: PathBuf::new(),
        }
    }
}
