use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::ProjectId;

/// A portfolio project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub full_description: String,
    /// Ordered technology tags. Compared by exact string equality.
    pub tech: Vec<String>,
    pub link: String,
    /// Demo URL. The site data uses an empty string for "no demo".
    #[serde(default)]
    pub demo: Option<String>,
    pub year: u16,
    pub role: String,
    #[serde(default)]
    pub is_featured: bool,
}

impl Project {
    /// Demo link, treating an empty string as absent.
    pub fn demo_link(&self) -> Option<&str> {
        self.demo.as_deref().filter(|d| !d.trim().is_empty())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate project id: {0}")]
    DuplicateId(ProjectId),

    #[error("project {project} has an empty technology tag")]
    EmptyTag { project: ProjectId },
}

/// Immutable, ordered project catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Build a catalog, rejecting duplicate ids and blank tags.
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }
            if project.tech.iter().any(|t| t.trim().is_empty()) {
                return Err(CatalogError::EmptyTag {
                    project: project.id,
                });
            }
        }
        Ok(Self { projects })
    }

    /// The catalog shipped with the site.
    pub fn sample() -> Self {
        Self {
            projects: super::sample::sample_projects(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
