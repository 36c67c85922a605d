//! ID type wrappers for type safety.

mod id_macro;
pub mod project_id;
pub mod section_id;

pub use project_id::ProjectId;
pub use section_id::SectionId;
