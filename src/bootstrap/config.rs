//! # Configuration Loader / 配置加载器
//!
//! Pure data loading: read the TOML file and map it into the [`AppConfig`]
//! DTO. No validation, no defaults. Policy lives in [`super::wiring`].
//!
//! 仅纯数据加载。接受文件中的任何内容。

use anyhow::Context;
use pf_core::config::AppConfig;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `<config dir>/portfolio/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("portfolio").join(CONFIG_FILE_NAME))
}

/// Resolve the config to use.
///
/// An explicit path must exist. Without one, the default location is used
/// when present and an empty config otherwise.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => match default_config_path() {
            Some(path) if path.is_file() => load_config(&path),
            _ => Ok(AppConfig::empty()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [mail]
            endpoint = "http://localhost:9000"
            service_id = "service_1"
            template_id = "template_1"
            public_key = "pk"
            timeout_ms = 2500

            [scroll]
            activation_threshold_px = 120
            scrolled_threshold_px = 40

            [catalog]
            path = "/srv/portfolio/projects.toml"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.mail_endpoint, "http://localhost:9000");
        assert_eq!(config.mail_service_id, "service_1");
        assert_eq!(config.mail_timeout_ms, 2500);
        assert_eq!(config.activation_threshold_px, 120.0);
        assert_eq!(config.scrolled_threshold_px, Some(40));
        assert_eq!(
            config.catalog_path,
            PathBuf::from("/srv/portfolio/projects.toml")
        );
    }

    #[test]
    fn test_load_config_returns_empty_values_when_missing() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[mail]\n").unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_load_config_reports_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[mail\nendpoint = ").unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let err = resolve_config(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}
