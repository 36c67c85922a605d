use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Project;
use crate::ids::ProjectId;

/// Gallery layout toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Compact cards, short description.
    #[default]
    Grid,
    /// One card per row, full description.
    List,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid view mode: {0:?}")]
pub struct InvalidViewMode(pub String);

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, ViewMode::List)
    }

    /// Text shown in a card body for this mode.
    pub fn body_of<'a>(&self, project: &'a Project) -> &'a str {
        match self {
            ViewMode::Grid => &project.description,
            ViewMode::List => &project.full_description,
        }
    }
}

impl FromStr for ViewMode {
    type Err = InvalidViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(InvalidViewMode(other.to_string())),
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display projection of a project under a view mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub title: String,
    pub body: String,
    pub tech: Vec<String>,
    pub featured: bool,
    pub code_link: String,
    pub demo_link: Option<String>,
    pub year: u16,
    pub role: String,
}

impl ProjectCard {
    pub fn render(project: &Project, view_mode: ViewMode) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            body: view_mode.body_of(project).to_string(),
            tech: project.tech.clone(),
            featured: project.is_featured,
            code_link: project.link.clone(),
            demo_link: project.demo_link().map(str::to_string),
            year: project.year,
            role: project.role.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProjectCatalog;

    #[test]
    fn test_view_mode_selects_description_field() {
        let catalog = ProjectCatalog::sample();
        let portfolio = &catalog.projects()[4];

        let grid = ProjectCard::render(portfolio, ViewMode::Grid);
        let list = ProjectCard::render(portfolio, ViewMode::List);

        assert_eq!(grid.body, portfolio.description);
        assert_eq!(list.body, portfolio.full_description);
        assert_eq!(grid.demo_link.as_deref(), Some("https://antara.vercel.app"));
        assert!(!grid.featured);
    }

    #[test]
    fn test_default_view_mode_is_grid() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
        assert!(!ViewMode::Grid.is_list());
    }

    #[test]
    fn test_unknown_view_mode_is_rejected() {
        assert_eq!("table".parse::<ViewMode>(), Err(InvalidViewMode("table".into())));
    }
}
