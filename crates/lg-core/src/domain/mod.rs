//! Core domain layer for lg.
//!
//! Pure values with no I/O: service names, project paths, template keys and
//! the render context. Everything that touches disk goes through the ports in
//! `crate::application::ports`.

pub mod error;
pub mod project;
pub mod service_name;
pub mod template;

pub use error::DomainError;
pub use project::{
    DEFAULT_APP_DIR, DEFAULT_BACKUP_SUFFIX, FileKind, FileTarget, ProjectLayout,
};
pub use service_name::{ServiceName, ServiceOptions};
pub use template::{RenderContext, TemplateKey};
