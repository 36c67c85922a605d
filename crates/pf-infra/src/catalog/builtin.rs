use pf_core::catalog::ProjectCatalog;
use pf_core::ports::ProjectCatalogPort;

/// The catalog compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl ProjectCatalogPort for BuiltinCatalog {
    fn load(&self) -> anyhow::Result<ProjectCatalog> {
        Ok(ProjectCatalog::sample())
    }
}
