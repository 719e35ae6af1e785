//! Infrastructure adapters for lg.
//!
//! This crate implements the ports defined in `lg-core::application::ports`.
//! It contains all I/O and the built-in Angular templates.

pub mod catalog;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use catalog::BuiltinCatalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
