use std::path::{Path, PathBuf};

use anyhow::Context;
use pf_core::catalog::{Project, ProjectCatalog};
use pf_core::ports::ProjectCatalogPort;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<Project>,
}

/// Catalog read from a TOML file with one `[[projects]]` table per entry.
#[derive(Debug, Clone)]
pub struct TomlCatalogSource {
    path: PathBuf,
}

impl TomlCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse catalog text. Duplicate ids and empty tags are rejected.
    pub fn parse(content: &str) -> anyhow::Result<ProjectCatalog> {
        let file: CatalogFile = toml::from_str(content).context("Failed to parse catalog TOML")?;
        Ok(ProjectCatalog::new(file.projects)?)
    }
}

impl ProjectCatalogPort for TomlCatalogSource {
    fn load(&self) -> anyhow::Result<ProjectCatalog> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read catalog file: {}", self.path.display()))?;
        let catalog = Self::parse(&content)
            .with_context(|| format!("Invalid catalog file: {}", self.path.display()))?;
        debug!(path = %self.path.display(), projects = catalog.len(), "Catalog file loaded");
        Ok(catalog)
    }
}
