use serde::{Deserialize, Serialize};

use super::id_macro::impl_key;

/// Key of an anchorable page section (`home`, `projects`, ...).
///
/// The key doubles as the DOM id, so the anchor is always `#<key>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl_key!(SectionId);

impl SectionId {
    /// Anchor href for in-page navigation.
    pub fn anchor(&self) -> String {
        format!("#{}", self.0)
    }

    /// Parse an anchor href (`#contact`) or a bare key (`contact`).
    pub fn from_anchor(href: &str) -> Self {
        Self(href.strip_prefix('#').unwrap_or(href).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_round_trips_through_href() {
        let id = SectionId::from("projects");
        assert_eq!(id.anchor(), "#projects");
        assert_eq!(SectionId::from_anchor("#projects"), id);
        assert_eq!(SectionId::from_anchor("projects"), id);
    }

    #[test]
    fn test_compares_with_str() {
        assert!(SectionId::from("home") == "home");
    }
}
