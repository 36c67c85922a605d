//! Page sections.
//!
//! The single-page layout is split into a fixed, ordered list of anchorable
//! sections. Order matters: the scroll tracker resolves overlaps by taking the
//! first match in declared order.

use serde::{Deserialize, Serialize};

use crate::ids::SectionId;

/// A named, anchorable region of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub label: String,
}

impl Section {
    pub fn new(id: impl Into<SectionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// DOM anchor target, e.g. `#experience`.
    pub fn anchor(&self) -> String {
        self.id.anchor()
    }
}

/// Bounding rectangle of a section anchor, relative to the viewport top.
///
/// `top` is negative once the section has scrolled past the viewport top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether the horizontal line `threshold` px below the viewport top
    /// crosses this rectangle (both edges inclusive).
    pub fn spans(&self, threshold: f64) -> bool {
        self.top <= threshold && self.bottom >= threshold
    }
}

/// Ordered section list of the site: home, experience, projects, contact.
pub fn site_sections() -> Vec<Section> {
    vec![
        Section::new("home", "Home"),
        Section::new("experience", "Experience"),
        Section::new("projects", "Projects"),
        Section::new("contact", "Contact"),
    ]
}
