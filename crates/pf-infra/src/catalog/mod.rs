//! Project catalog sources.

mod builtin;
mod toml_source;

pub use builtin::BuiltinCatalog;
pub use toml_source::TomlCatalogSource;
