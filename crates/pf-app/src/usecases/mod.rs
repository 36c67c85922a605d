//! Business logic use cases
//!
//! scroll/resize ──► TrackScroll ──► navbar highlight + progress bar
//! filter/view  ──► ListProjects ──► gallery cards
//! submit       ──► ContactFormSession ──► SubmitContactForm ──► mail service

pub mod contact;
pub mod projects;
pub mod scroll;

pub use contact::{ContactFormSession, SubmitContactForm};
pub use projects::{GetTechStack, ListProjects, ProjectListing, ProjectQuery, ProjectQueryError};
pub use scroll::TrackScroll;
