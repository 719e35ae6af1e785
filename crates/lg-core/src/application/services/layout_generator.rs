//! Layout Generator - replaces the root component with the sidenav shell.
//!
//! Workflow:
//! 1. Resolve the three `app.component.*` targets
//! 2. Verify every target exists (no writes happen if one is missing)
//! 3. Copy each target to `<target>.backup`
//! 4. Overwrite each target with its catalog template
//!
//! There is no rollback. If a copy or write fails halfway, files already
//! handled keep their new content and the run stops at the failing file.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateCatalog},
    },
    domain::{FileTarget, ProjectLayout},
    error::LgResult,
};

/// One backed-up and overwritten file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEntry {
    pub target: FileTarget,
    pub backup: PathBuf,
}

/// What a layout run touched, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutReport {
    pub entries: Vec<LayoutEntry>,
}

impl LayoutReport {
    pub fn backups(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter().map(|e| &e.backup)
    }

    pub fn targets(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter().map(|e| &e.target.path)
    }
}

pub struct LayoutGenerator {
    filesystem: Box<dyn Filesystem>,
    catalog: Box<dyn TemplateCatalog>,
}

impl LayoutGenerator {
    pub fn new(filesystem: Box<dyn Filesystem>, catalog: Box<dyn TemplateCatalog>) -> Self {
        Self {
            filesystem,
            catalog,
        }
    }

    /// Check the preconditions and return what `generate` would touch.
    ///
    /// Fails with `ApplicationError::TargetNotFound` naming the first missing
    /// file. Never writes.
    #[instrument(skip_all, fields(root = %project.root().display()))]
    pub fn plan(&self, project: &ProjectLayout) -> LgResult<LayoutReport> {
        let mut report = LayoutReport::default();

        for target in project.layout_targets() {
            if !self.filesystem.exists(&target.path) {
                return Err(ApplicationError::TargetNotFound { path: target.path }.into());
            }
            debug!(kind = %target.kind, path = %target.path.display(), "Target found");

            let backup = target.backup_path(project.backup_suffix());
            report.entries.push(LayoutEntry { target, backup });
        }

        Ok(report)
    }

    /// Back up and overwrite the root component files.
    #[instrument(skip_all, fields(root = %project.root().display()))]
    pub fn generate(&self, project: &ProjectLayout) -> LgResult<LayoutReport> {
        let report = self.plan(project)?;

        // Catalog lookups happen before the first copy so a missing template
        // cannot leave the project half-written.
        let contents = report
            .entries
            .iter()
            .map(|entry| self.catalog.get(entry.target.kind.template_key()))
            .collect::<LgResult<Vec<_>>>()?;

        for entry in &report.entries {
            self.filesystem
                .copy_file(&entry.target.path, &entry.backup)?;
            debug!(backup = %entry.backup.display(), "Backup written");
        }

        for (entry, content) in report.entries.iter().zip(contents) {
            self.filesystem.write_file(&entry.target.path, content)?;
            debug!(path = %entry.target.path.display(), bytes = content.len(), "Target overwritten");
        }

        info!(files = report.entries.len(), "Layout generated");
        Ok(report)
    }
}
