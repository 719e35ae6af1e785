//! lg Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `lg-cli`
//! Angular generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             lg-cli (CLI)                │
//! │        (layout / service commands)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │  (LayoutGenerator, ServiceGenerator)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateCatalog, Renderer) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     lg-adapters (Infrastructure)        │
//! │ (LocalFilesystem, BuiltinCatalog, ...)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lg_core::{application::ServiceGenerator, domain::*};
//!
//! let project = ProjectLayout::new(".");
//! let generator = ServiceGenerator::new(filesystem, catalog, renderer);
//! let name = ServiceName::new("Product")?;
//! generator.generate(&project, &name, ServiceOptions { http: true })?;
//! ```

pub mod domain;

pub mod application;

pub mod error;
