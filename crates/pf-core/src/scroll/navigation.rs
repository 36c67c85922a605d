//! Navbar interaction state.
//!
//! Tracks the bits of navbar state that are not derived from scrolling:
//! the mobile menu toggle and the hovered item.

use serde::{Deserialize, Serialize};

use super::tracker::ScrollState;
use crate::ids::SectionId;
use crate::section::Section;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub mobile_menu_open: bool,
    pub hovered: Option<SectionId>,
}

impl NavigationState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn hover(&mut self, section: Option<SectionId>) {
        self.hovered = section;
    }

    /// Resolve a nav click to the anchor to scroll to.
    ///
    /// Returns `None` when the target is not a declared section; the menu
    /// stays as it is in that case. A successful navigation closes the mobile
    /// menu.
    pub fn navigate_to(&mut self, sections: &[Section], target: &SectionId) -> Option<String> {
        let section = sections.iter().find(|s| &s.id == target)?;
        self.mobile_menu_open = false;
        Some(section.anchor())
    }

    pub fn is_highlighted(scroll: &ScrollState, section: &SectionId) -> bool {
        scroll.active_section.as_ref() == Some(section)
    }

    /// Hover styling only applies to items that are not already highlighted.
    pub fn shows_hover(&self, scroll: &ScrollState, section: &SectionId) -> bool {
        self.hovered.as_ref() == Some(section) && !Self::is_highlighted(scroll, section)
    }

    pub fn back_to_top_visible(scroll: &ScrollState) -> bool {
        scroll.is_scrolled
    }
}
