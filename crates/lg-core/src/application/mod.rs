//! Application layer for lg.
//!
//! This layer contains:
//! - **Services**: the two generators (`LayoutGenerator`, `ServiceGenerator`)
//! - **Ports**: traits for the filesystem, the template catalog and rendering
//! - **Errors**: Application-specific error types

pub mod error;
pub mod ports;
pub mod services;

pub use services::{LayoutEntry, LayoutGenerator, LayoutReport, ServiceGenerator};

pub use ports::{Filesystem, TemplateCatalog, TemplateRenderer};

pub use error::ApplicationError;
