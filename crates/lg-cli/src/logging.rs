//! Tracing subscriber for the binary.
//!
//! `lg-core` and `lg-adapters` only emit events; this is the one place a
//! subscriber is installed. Events go to stderr so stdout stays reserved for
//! status lines and dry-run content.
//!
//! `-q` gives ERROR, no flag WARN, then `-v` INFO, `-vv` DEBUG and `-vvv`
//! TRACE. A set `RUST_LOG` replaces the whole filter.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the selected level.
const LOG_TARGETS: [&str; 3] = ["lg_cli", "lg_core", "lg_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(target_directives(level_for(args)))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn target_directives(level: LevelFilter) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        let cases = [
            (0, false, LevelFilter::WARN),
            (1, false, LevelFilter::INFO),
            (2, false, LevelFilter::DEBUG),
            (3, false, LevelFilter::TRACE),
            (9, false, LevelFilter::TRACE),
            (0, true, LevelFilter::ERROR),
        ];
        for (verbose, quiet, expected) in cases {
            let args = GlobalArgs {
                verbose,
                quiet,
                ..GlobalArgs::default()
            };
            assert_eq!(level_for(&args), expected, "-v x{verbose}, quiet={quiet}");
        }
    }

    #[test]
    fn directives_cover_every_workspace_crate() {
        let directives = target_directives(LevelFilter::DEBUG).to_lowercase();
        assert_eq!(directives, "lg_cli=debug,lg_core=debug,lg_adapters=debug");
        assert!(EnvFilter::try_new(directives).is_ok());
    }
}
