//! Command handlers. One module per subcommand.

use lg_core::domain::ProjectLayout;

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
};

pub mod completions;
pub mod layout;
pub mod service;

/// The project the command runs against: the working directory, with the
/// configured app directory and backup suffix.
fn current_project(config: &AppConfig) -> CliResult<ProjectLayout> {
    let cwd = std::env::current_dir().with_cli_context(|| "reading working directory")?;
    Ok(config.project_layout(cwd))
}
