//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::domain::{RenderContext, TemplateKey};
use crate::error::LgResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `lg_adapters::filesystem::LocalFilesystem` (production)
/// - `lg_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories. No-op if it exists.
    fn create_dir_all(&self, path: &Path) -> LgResult<()>;

    /// Copy `from` to `to` byte-for-byte, replacing `to` if present.
    fn copy_file(&self, from: &Path, to: &Path) -> LgResult<()>;

    /// Write content to a file, truncating any previous content.
    fn write_file(&self, path: &Path, content: &str) -> LgResult<()>;
}

/// Port for the fixed template text.
///
/// Implemented by `lg_adapters::catalog::BuiltinCatalog`.
pub trait TemplateCatalog: Send + Sync {
    /// Content for `key`, or `ApplicationError::TemplateMissing`.
    fn get(&self, key: TemplateKey) -> LgResult<&str>;
}

/// Port for placeholder substitution in service fragments.
///
/// Implemented by `lg_adapters::renderer::SimpleRenderer`.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, fragment: &str, context: &RenderContext) -> LgResult<String>;
}
