use crate::catalog::ProjectCatalog;

/// Source of the project catalog, read once at startup.
pub trait ProjectCatalogPort: Send + Sync {
    fn load(&self) -> anyhow::Result<ProjectCatalog>;
}
