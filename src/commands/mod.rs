//! Command handlers. Each returns the rendered output instead of printing.

pub mod contact;
pub mod experience;
pub mod projects;
pub mod scroll;

pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
