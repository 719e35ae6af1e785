//! Implementation of the `lg-cli service` command.

use tracing::{debug, instrument};

use lg_adapters::{BuiltinCatalog, LocalFilesystem, SimpleRenderer};
use lg_core::{
    application::ServiceGenerator,
    domain::{ServiceName, ServiceOptions},
    error::LgError,
};

use crate::{cli::ServiceArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Execute the `lg-cli service` command.
#[instrument(skip_all, fields(service = %args.name, http = args.http))]
pub fn execute(args: ServiceArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let name = ServiceName::new(&args.name).map_err(LgError::from)?;
    let options = ServiceOptions { http: args.http };

    debug!(class = %name.class_name(), folder = %name.folder_name(), "Service name resolved");

    let project = super::current_project(&config)?;
    let generator = ServiceGenerator::new(
        Box::new(LocalFilesystem::new()),
        Box::new(BuiltinCatalog::new()),
        Box::new(SimpleRenderer::new()),
    );

    if args.dry_run {
        let content = generator.render(&name, options)?;
        output.info(&format!(
            "Dry run: would write {}",
            project.service_file(&name).display()
        ))?;
        output.content(&content)?;
        return Ok(());
    }

    let path = generator.generate(&project, &name, options)?;
    output.success(&format!("Service created at: {}", path.display()))?;

    Ok(())
}
