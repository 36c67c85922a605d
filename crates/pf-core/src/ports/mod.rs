//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! adapters (mail service, host viewport, catalog storage, clock). The core
//! stays free of I/O; adapters live in `pf-infra`.

mod catalog;
mod clock;
pub mod mail_delivery;
pub mod viewport;

pub use catalog::ProjectCatalogPort;
pub use clock::ClockPort;
pub use mail_delivery::MailDeliveryPort;
pub use viewport::{ScrollSubscription, ViewportError, ViewportEvent, ViewportPort};
