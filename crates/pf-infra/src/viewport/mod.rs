mod simulated;

pub use simulated::{PageLayout, SectionBox, SimulatedViewport};
