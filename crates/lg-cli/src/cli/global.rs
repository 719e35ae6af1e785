//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args};

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// More log output on stderr: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain output without ANSI colours [env: NO_COLOR]
    #[arg(long, global = true, env = "NO_COLOR", hide_env = true)]
    pub no_color: bool,

    /// Read settings from FILE instead of ./lg.toml
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
