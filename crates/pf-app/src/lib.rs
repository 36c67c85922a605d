//! Portfolio application orchestration layer
//!
//! This crate contains the use cases that sit between the presentation layer
//! and the ports defined in `pf-core`.

pub mod app;
pub mod deps;
pub mod usecases;

pub use app::{App, AppSettings};
pub use deps::AppDeps;
