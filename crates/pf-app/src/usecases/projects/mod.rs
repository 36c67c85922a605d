pub mod get_tech_stack;
pub mod list_projects;

pub use get_tech_stack::GetTechStack;
pub use list_projects::{ListProjects, ProjectListing, ProjectQuery, ProjectQueryError};
