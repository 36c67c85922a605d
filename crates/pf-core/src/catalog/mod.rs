//! Static site content: the project catalog, the experience timeline and the
//! owner profile.
//!
//! Content is loaded once at startup and never mutated afterwards.

pub mod experience;
pub mod profile;
pub mod project;
mod sample;

pub use experience::{sample_timeline, Experience};
pub use profile::{Availability, Profile, SocialLink, Stat};
pub use project::{CatalogError, Project, ProjectCatalog};
