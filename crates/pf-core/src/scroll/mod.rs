//! Scroll tracking domain module.
//!
//! Derives the navbar state (progress bar, active section, scrolled flag) from
//! raw viewport measurements. Everything here is synchronous and pure apart
//! from the tracker remembering its last state for the sticky active-section
//! rule.

pub mod navigation;
pub mod tracker;

pub use navigation::NavigationState;
pub use tracker::{
    derive_scroll_state, ScrollState, ScrollTracker, ScrollTrackerConfig, ViewportMeasurements,
    DEFAULT_ACTIVATION_THRESHOLD_PX, DEFAULT_SCROLLED_THRESHOLD_PX,
};
