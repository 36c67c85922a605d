//! # pf-core
//!
//! Core domain models and derivation logic for the portfolio site.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! scroll tracking, project filtering, contact form validation and the
//! status state machine, plus the ports adapters implement.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod filter;
pub mod ids;
pub mod ports;
pub mod scroll;
pub mod section;

// Re-export commonly used types at the crate root
pub use catalog::{Experience, Profile, Project, ProjectCatalog};
pub use config::AppConfig;
pub use contact::{Ack, ContactFormPayload, DeliveryError, SubmitError, ValidationError};
pub use filter::{FilterCategory, InvalidFilterCategory, ProjectFilterEngine, ViewMode};
pub use ids::{ProjectId, SectionId};
pub use scroll::{ScrollState, ScrollTracker, ViewportMeasurements};
pub use section::{Section, SectionRect};
