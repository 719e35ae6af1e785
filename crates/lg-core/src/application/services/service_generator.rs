//! Service Generator - creates `services/<name>/<name>.service.ts`.
//!
//! The file is written unconditionally. Unlike the layout command, an
//! existing service file is replaced without a `.backup` copy.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateCatalog, TemplateRenderer},
    domain::{ProjectLayout, RenderContext, ServiceName, ServiceOptions, TemplateKey},
    error::LgResult,
};

pub struct ServiceGenerator {
    filesystem: Box<dyn Filesystem>,
    catalog: Box<dyn TemplateCatalog>,
    renderer: Box<dyn TemplateRenderer>,
}

impl ServiceGenerator {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        catalog: Box<dyn TemplateCatalog>,
        renderer: Box<dyn TemplateRenderer>,
    ) -> Self {
        Self {
            filesystem,
            catalog,
            renderer,
        }
    }

    /// Assemble the service file content without touching the filesystem.
    pub fn render(&self, name: &ServiceName, options: ServiceOptions) -> LgResult<String> {
        let context = RenderContext::for_service(name);
        let mut content = String::new();

        for key in TemplateKey::service_fragments(options.http) {
            let fragment = self.catalog.get(key)?;
            content.push_str(&self.renderer.render(fragment, &context)?);
        }

        Ok(content)
    }

    /// Generate the service and return the path of the written file.
    #[instrument(skip_all, fields(service = %name, http = options.http))]
    pub fn generate(
        &self,
        project: &ProjectLayout,
        name: &ServiceName,
        options: ServiceOptions,
    ) -> LgResult<PathBuf> {
        let services_dir = project.services_dir();
        let service_dir = project.service_dir(name);
        let service_file = project.service_file(name);

        let content = self.render(name, options)?;

        if !self.filesystem.exists(&services_dir) {
            debug!(path = %services_dir.display(), "Creating services directory");
            self.filesystem.create_dir_all(&services_dir)?;
        }

        if !self.filesystem.exists(&service_dir) {
            debug!(path = %service_dir.display(), "Creating service directory");
            self.filesystem.create_dir_all(&service_dir)?;
        }

        if self.filesystem.exists(&service_file) {
            debug!(path = %service_file.display(), "Replacing existing service file");
        }

        self.filesystem.write_file(&service_file, &content)?;

        info!(path = %service_file.display(), "Service generated");
        Ok(service_file)
    }
}
