//! Application ports (traits) for external dependencies.
//!
//! Driven (output) ports, called by the generators and implemented in
//! `lg-adapters`:
//!   - `Filesystem`: existence checks, copies, writes, directory creation
//!   - `TemplateCatalog`: fixed template text by key
//!   - `TemplateRenderer`: placeholder substitution

pub mod output;

#[cfg(test)]
pub use output::MockFilesystem;
pub use output::{Filesystem, TemplateCatalog, TemplateRenderer};
