//! Scroll tracker.
//!
//! 滚动跟踪器：根据视口测量值计算滚动进度与当前激活的区块。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::SectionId;
use crate::section::{Section, SectionRect};

/// Distance from the viewport top, in px, of the line that decides which
/// section is active.
pub const DEFAULT_ACTIVATION_THRESHOLD_PX: f64 = 100.0;

/// Scroll offset, in px, past which the navbar switches to its scrolled style.
pub const DEFAULT_SCROLLED_THRESHOLD_PX: u32 = 20;

/// Raw measurements reported by the host on a scroll or resize event.
///
/// 宿主环境在滚动/尺寸变化时上报的原始测量值。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportMeasurements {
    pub scroll_y: u32,
    pub document_height: u32,
    pub viewport_height: u32,
    /// Bounding rects of the section anchors. A section without an entry has
    /// no element on the page (yet) and never matches.
    pub section_rects: BTreeMap<SectionId, SectionRect>,
}

/// Derived navbar state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    pub scroll_y: u32,
    /// Always within `[0, 100]`.
    pub progress_percent: f64,
    /// `None` only when the tracker was built with no sections at all.
    pub active_section: Option<SectionId>,
    pub is_scrolled: bool,
}

impl ScrollState {
    /// State before the first measurement: top of the page, first section active.
    pub fn initial(sections: &[Section]) -> Self {
        Self {
            scroll_y: 0,
            progress_percent: 0.0,
            active_section: sections.first().map(|s| s.id.clone()),
            is_scrolled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollTrackerConfig {
    pub activation_threshold_px: f64,
    pub scrolled_threshold_px: u32,
}

impl Default for ScrollTrackerConfig {
    fn default() -> Self {
        Self {
            activation_threshold_px: DEFAULT_ACTIVATION_THRESHOLD_PX,
            scrolled_threshold_px: DEFAULT_SCROLLED_THRESHOLD_PX,
        }
    }
}

/// Pure derivation of the next [`ScrollState`].
///
/// The active section is the first section, in declared order, whose rect
/// spans the activation line. When nothing matches the previous value is kept
/// so the highlight never goes blank between sections.
pub fn derive_scroll_state(
    sections: &[Section],
    config: &ScrollTrackerConfig,
    previous: &ScrollState,
    m: &ViewportMeasurements,
) -> ScrollState {
    let matched = sections
        .iter()
        .find(|section| {
            m.section_rects
                .get(&section.id)
                .is_some_and(|rect| rect.spans(config.activation_threshold_px))
        })
        .map(|section| section.id.clone());

    ScrollState {
        scroll_y: m.scroll_y,
        progress_percent: progress_percent(m.scroll_y, m.document_height, m.viewport_height),
        active_section: matched.or_else(|| previous.active_section.clone()),
        is_scrolled: m.scroll_y > config.scrolled_threshold_px,
    }
}

fn progress_percent(scroll_y: u32, document_height: u32, viewport_height: u32) -> f64 {
    let scrollable = f64::from(document_height) - f64::from(viewport_height);
    if scrollable <= 0.0 {
        return 0.0;
    }
    (f64::from(scroll_y) / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Stateful wrapper that remembers the last derived state.
pub struct ScrollTracker {
    sections: Vec<Section>,
    config: ScrollTrackerConfig,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(sections: Vec<Section>, config: ScrollTrackerConfig) -> Self {
        let state = ScrollState::initial(&sections);
        Self {
            sections,
            config,
            state,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn config(&self) -> &ScrollTrackerConfig {
        &self.config
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Recompute from fresh measurements. Safe to call on every scroll tick.
    pub fn on_scroll_or_resize(&mut self, measurements: &ViewportMeasurements) -> ScrollState {
        let next = derive_scroll_state(&self.sections, &self.config, &self.state, measurements);

        #[cfg(feature = "tracing")]
        if next.active_section != self.state.active_section {
            tracing::debug!(
                from = ?self.state.active_section,
                to = ?next.active_section,
                scroll_y = next.scroll_y,
                "active section changed"
            );
        }

        self.state = next.clone();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::site_sections;

    fn measurements(
        scroll_y: u32,
        document_height: u32,
        viewport_height: u32,
        rects: &[(&str, f64, f64)],
    ) -> ViewportMeasurements {
        ViewportMeasurements {
            scroll_y,
            document_height,
            viewport_height,
            section_rects: rects
                .iter()
                .map(|(id, top, bottom)| (SectionId::from(*id), SectionRect::new(*top, *bottom)))
                .collect(),
        }
    }

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(site_sections(), ScrollTrackerConfig::default())
    }

    #[test]
    fn test_initial_state_defaults_to_first_section() {
        let tracker = tracker();
        assert_eq!(tracker.state().active_section, Some(SectionId::from("home")));
        assert_eq!(tracker.state().progress_percent, 0.0);
        assert!(!tracker.state().is_scrolled);
    }

    #[test]
    fn test_progress_is_zero_when_page_does_not_scroll() {
        let mut tracker = tracker();
        for scroll_y in [0, 1, 20, 500, 10_000] {
            let state = tracker.on_scroll_or_resize(&measurements(scroll_y, 800, 800, &[]));
            assert_eq!(state.progress_percent, 0.0);
        }
        let state = tracker.on_scroll_or_resize(&measurements(300, 600, 800, &[]));
        assert_eq!(state.progress_percent, 0.0);
    }

    #[test]
    fn test_progress_is_proportional_and_clamped() {
        let mut tracker = tracker();
        let state = tracker.on_scroll_or_resize(&measurements(800, 2400, 800, &[]));
        assert_eq!(state.progress_percent, 50.0);

        // Overscroll (rubber-banding) must not exceed 100.
        let state = tracker.on_scroll_or_resize(&measurements(2000, 2400, 800, &[]));
        assert_eq!(state.progress_percent, 100.0);
    }

    #[test]
    fn test_is_scrolled_threshold_is_strict() {
        let mut tracker = tracker();
        assert!(!tracker.on_scroll_or_resize(&measurements(20, 2000, 800, &[])).is_scrolled);
        assert!(tracker.on_scroll_or_resize(&measurements(21, 2000, 800, &[])).is_scrolled);
    }

    #[test]
    fn test_first_matching_section_wins_on_overlap() {
        let mut tracker = tracker();
        let state = tracker.on_scroll_or_resize(&measurements(
            1200,
            4000,
            800,
            &[
                ("home", -1200.0, -400.0),
                ("experience", -400.0, 120.0),
                ("projects", 90.0, 900.0),
            ],
        ));
        assert_eq!(state.active_section, Some(SectionId::from("experience")));
    }

    #[test]
    fn test_active_section_is_sticky_when_nothing_matches() {
        let mut tracker = tracker();
        tracker.on_scroll_or_resize(&measurements(
            2000,
            4000,
            800,
            &[("projects", 50.0, 900.0)],
        ));

        // Gap between sections: no rect spans the activation line.
        let state = tracker.on_scroll_or_resize(&measurements(
            2100,
            4000,
            800,
            &[("projects", -900.0, 40.0), ("contact", 160.0, 900.0)],
        ));
        assert_eq!(state.active_section, Some(SectionId::from("projects")));
    }

    #[test]
    fn test_missing_elements_degrade_to_last_known_state() {
        let mut tracker = tracker();
        let state = tracker.on_scroll_or_resize(&measurements(0, 0, 0, &[]));
        assert_eq!(state.active_section, Some(SectionId::from("home")));
        assert_eq!(state.progress_percent, 0.0);
    }

    #[test]
    fn test_unknown_rect_keys_are_ignored() {
        let mut tracker = tracker();
        let state = tracker.on_scroll_or_resize(&measurements(
            900,
            4000,
            800,
            &[("navbar", 0.0, 80.0), ("constact", 0.0, 800.0)],
        ));
        assert_eq!(state.active_section, Some(SectionId::from("home")));
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let mut tracker = tracker();
        let m = measurements(1500, 4000, 800, &[("projects", -20.0, 700.0)]);
        let first = tracker.on_scroll_or_resize(&m);
        let second = tracker.on_scroll_or_resize(&m);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_thresholds_are_honoured() {
        let config = ScrollTrackerConfig {
            activation_threshold_px: 10.0,
            scrolled_threshold_px: 0,
        };
        let mut tracker = ScrollTracker::new(site_sections(), config);
        let state = tracker.on_scroll_or_resize(&measurements(
            1,
            4000,
            800,
            &[("home", -1.0, 50.0), ("experience", 50.0, 100.0)],
        ));
        assert!(state.is_scrolled);
        assert_eq!(state.active_section, Some(SectionId::from("home")));
    }

    #[test]
    fn test_tracker_without_sections_never_panics() {
        let mut tracker = ScrollTracker::new(Vec::new(), ScrollTrackerConfig::default());
        let state = tracker.on_scroll_or_resize(&measurements(10, 1000, 500, &[("home", 0.0, 500.0)]));
        assert_eq!(state.active_section, None);
    }
}
