//! Console status lines on stdout.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Writes status lines, honouring `--quiet` and the colour settings.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Colours are dropped for `--no-color`, `NO_COLOR`, `output.no_color`,
    /// or when stdout is not a terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self::with_terminal(args, config, io::stdout().is_terminal())
    }

    fn with_terminal(args: &GlobalArgs, config: &AppConfig, is_terminal: bool) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || !is_terminal,
            term: Term::stdout(),
        }
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.status(None, msg, Style::new())
    }

    /// `✓ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Some('\u{2713}'), msg, Style::new().green())
    }

    /// `ℹ <msg>`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Some('\u{2139}'), msg, Style::new().blue())
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.status(None, text, Style::new().cyan().bold())
    }

    /// Generated file content. Not suppressed by `--quiet`.
    pub fn content(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        if !text.ends_with('\n') {
            self.term.write_line("")?;
        }
        Ok(())
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    fn status(&self, marker: Option<char>, msg: &str, style: Style) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = match marker {
            Some(marker) => format!("{marker} {msg}"),
            None => msg.to_owned(),
        };
        if self.no_color {
            self.term.write_line(&line)
        } else {
            self.term.write_line(&line.style(style).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool, is_terminal: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
        };
        OutputManager::with_terminal(&args, &AppConfig::default(), is_terminal)
    }

    #[test]
    fn quiet_writes_succeed() {
        let out = make_manager(true, true, false);
        assert!(out.print("hello").is_ok());
        assert!(out.success("done").is_ok());
        assert!(out.content("export class FooService {}\n").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(make_manager(false, false, true).supports_color());
        assert!(!make_manager(false, true, true).supports_color());
    }

    #[test]
    fn piped_output_has_no_color() {
        assert!(!make_manager(false, false, false).supports_color());
    }

    #[test]
    fn config_can_disable_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;

        let out = OutputManager::with_terminal(&GlobalArgs::default(), &config, true);

        assert!(!out.supports_color());
    }
}
