//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`ProjectLayout`] built
//! from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `LG_`-prefixed environment variables, e.g. `LG_PROJECT__APP_DIR`
//! 3. Config file (`--config <FILE>`, or `./lg.toml` when present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use lg_core::domain::{DEFAULT_APP_DIR, DEFAULT_BACKUP_SUFFIX, ProjectLayout};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "lg.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the Angular sources live.
    pub project: ProjectConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Application source directory, relative to the working directory.
    pub app_dir: PathBuf,
    /// Suffix for layout backups (`app.component.ts.<suffix>`).
    pub backup_suffix: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            app_dir: PathBuf::from(DEFAULT_APP_DIR),
            backup_suffix: DEFAULT_BACKUP_SUFFIX.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `config_file` must exist; the implicit `./lg.toml` is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => config::File::from(path.as_path()).required(true),
            None => config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("LG")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Project layout rooted at `root` with the configured paths.
    pub fn project_layout(&self, root: impl Into<PathBuf>) -> ProjectLayout {
        ProjectLayout::new(root)
            .with_app_dir(&self.project.app_dir)
            .with_backup_suffix(&self.project.backup_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_dir_is_src_app() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.project.app_dir, PathBuf::from("src/app"));
        assert_eq!(cfg.project.backup_suffix, "backup");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[project]\napp_dir = \"projects/web/src/app\"\n\n[output]\nno_color = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(cfg.project.app_dir, PathBuf::from("projects/web/src/app"));
        assert_eq!(cfg.project.backup_suffix, "backup");
        assert!(cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[project\napp_dir = ").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn project_layout_uses_configured_paths() {
        let mut cfg = AppConfig::default();
        cfg.project.app_dir = PathBuf::from("web");
        cfg.project.backup_suffix = "orig".into();

        let layout = cfg.project_layout("/p");
        let targets = layout.layout_targets();

        assert_eq!(targets[0].path, PathBuf::from("/p/web/app.component.html"));
        assert_eq!(
            targets[0].backup_path(layout.backup_suffix()),
            PathBuf::from("/p/web/app.component.html.orig")
        );
    }
}
