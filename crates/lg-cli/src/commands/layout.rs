//! Implementation of the `lg-cli layout` command.
//!
//! Wires the local adapters into a [`LayoutGenerator`] and reports what was
//! backed up. No business logic lives here.

use tracing::{info, instrument};

use lg_adapters::{BuiltinCatalog, LocalFilesystem};
use lg_core::application::{LayoutGenerator, LayoutReport};

use crate::{cli::LayoutArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Execute the `lg-cli layout` command.
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: LayoutArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let project = super::current_project(&config)?;
    let generator = LayoutGenerator::new(
        Box::new(LocalFilesystem::new()),
        Box::new(BuiltinCatalog::new()),
    );

    if args.dry_run {
        let report = generator.plan(&project)?;
        return show_plan(&report, output);
    }

    output.header("Generating layout...")?;

    let report = generator.generate(&project)?;
    info!(files = report.entries.len(), "Layout written");

    output.success("Layout generated successfully!")?;
    output.info(&format!(
        "Backups of the original files were created with the .{} extension:",
        project.backup_suffix()
    ))?;
    for backup in report.backups() {
        output.print(&format!("  {}", backup.display()))?;
    }

    Ok(())
}

fn show_plan(report: &LayoutReport, output: &OutputManager) -> CliResult<()> {
    output.info("Dry run: nothing will be written")?;
    for entry in &report.entries {
        output.print(&format!(
            "  Would back up {} to {}",
            entry.target.path.display(),
            entry.backup.display()
        ))?;
        output.print(&format!("  Would overwrite {}", entry.target.path.display()))?;
    }
    Ok(())
}
