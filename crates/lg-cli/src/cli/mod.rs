//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "lg-cli",
    bin_name = "lg-cli",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Layout and service generation for Angular",
    long_about = "lg-cli replaces the root component of an Angular project with a \
                  sidenav layout and generates injectable services.",
    after_help = "EXAMPLES:\n\
        \x20 lg-cli layout\n\
        \x20 lg-cli service Product --http\n\
        \x20 lg-cli completions bash > ~/.local/share/bash-completion/completions/lg-cli",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the default layout in app.component.
    #[command(
        about = "Generate a default layout in app.component",
        after_help = "Overwrites src/app/app.component.{html,scss,ts}. Each file is \
            first copied to <file>.backup.\n\n\
            EXAMPLES:\n\
            \x20 lg-cli layout\n\
            \x20 lg-cli layout --dry-run"
    )]
    Layout(LayoutArgs),

    /// Generate an Angular service.
    #[command(
        about = "Generate an Angular service",
        after_help = "Creates src/app/services/<name>/<name>.service.ts. An existing \
            file with that name is replaced without a backup.\n\n\
            EXAMPLES:\n\
            \x20 lg-cli service Product\n\
            \x20 lg-cli service Product --http"
    )]
    Service(ServiceArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 lg-cli completions bash > ~/.local/share/bash-completion/completions/lg-cli\n\
            \x20 lg-cli completions zsh  > ~/.zfunc/_lg-cli\n\
            \x20 lg-cli completions fish > ~/.config/fish/completions/lg-cli.fish"
    )]
    Completions(CompletionsArgs),
}

// ── layout ────────────────────────────────────────────────────────────────────

/// Arguments for `lg-cli layout`.
#[derive(Debug, Args)]
pub struct LayoutArgs {
    /// Check the project and list the files without writing anything.
    #[arg(
        long = "dry-run",
        help = "Show what would be written without writing"
    )]
    pub dry_run: bool,
}

// ── service ───────────────────────────────────────────────────────────────────

/// Arguments for `lg-cli service`.
#[derive(Debug, Args)]
pub struct ServiceArgs {
    /// Service name, e.g. `Product`. The folder and file use its lower-cased
    /// form; the class keeps the given casing.
    #[arg(value_name = "NAME", help = "Service name")]
    pub name: String,

    /// Inject `HttpClient` and add CRUD method stubs.
    #[arg(long = "http", help = "Add HTTP CRUD methods")]
    pub http: bool,

    /// Print the generated service without writing it.
    #[arg(
        long = "dry-run",
        help = "Print the service instead of writing it"
    )]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `lg-cli completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
