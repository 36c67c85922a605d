pub mod catalog;
pub mod mail;
pub mod time;
pub mod viewport;

pub use catalog::{BuiltinCatalog, TomlCatalogSource};
pub use mail::{EmailJsConfig, EmailJsMailer};
pub use time::SystemClock;
pub use viewport::{PageLayout, SectionBox, SimulatedViewport};
