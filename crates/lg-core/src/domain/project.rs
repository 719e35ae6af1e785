//! Project paths.
//!
//! Every path the generators touch is derived here from the project root, so
//! the generators themselves never join strings.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use super::{ServiceName, TemplateKey};

/// Default application source directory, relative to the project root.
pub const DEFAULT_APP_DIR: &str = "src/app";

/// Default suffix appended to backed-up files.
pub const DEFAULT_BACKUP_SUFFIX: &str = "backup";

/// Which of the root component's files a target is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Markup,
    Style,
    Class,
}

impl FileKind {
    /// Layout order: markup, style, class.
    pub const ALL: [FileKind; 3] = [FileKind::Markup, FileKind::Style, FileKind::Class];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Markup => "html",
            Self::Style => "scss",
            Self::Class => "ts",
        }
    }

    /// Catalog entry holding this file's layout content.
    pub fn template_key(self) -> TemplateKey {
        match self {
            Self::Markup => TemplateKey::LayoutMarkup,
            Self::Style => TemplateKey::LayoutStyle,
            Self::Class => TemplateKey::LayoutClass,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup => write!(f, "markup"),
            Self::Style => write!(f, "style"),
            Self::Class => write!(f, "class"),
        }
    }
}

/// A resolved file path and the kind of content it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    pub path: PathBuf,
    pub kind: FileKind,
}

impl FileTarget {
    pub fn new(path: impl Into<PathBuf>, kind: FileKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Sibling path `<path>.<suffix>`.
    pub fn backup_path(&self, suffix: &str) -> PathBuf {
        let mut name: OsString = self.path.as_os_str().to_owned();
        name.push(".");
        name.push(suffix);
        PathBuf::from(name)
    }
}

/// Layout of an Angular project on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    app_dir: PathBuf,
    backup_suffix: String,
}

impl ProjectLayout {
    /// Project rooted at `root` with the default `src/app` source directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            app_dir: PathBuf::from(DEFAULT_APP_DIR),
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
        }
    }

    pub fn with_app_dir(mut self, app_dir: impl Into<PathBuf>) -> Self {
        self.app_dir = app_dir.into();
        self
    }

    pub fn with_backup_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.backup_suffix = suffix.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn backup_suffix(&self) -> &str {
        &self.backup_suffix
    }

    /// Application source directory under the project root.
    pub fn app_path(&self) -> PathBuf {
        self.root.join(&self.app_dir)
    }

    /// The three root component files, in write order.
    pub fn layout_targets(&self) -> [FileTarget; 3] {
        let app = self.app_path();
        FileKind::ALL.map(|kind| {
            FileTarget::new(app.join(format!("app.component.{}", kind.extension())), kind)
        })
    }

    pub fn services_dir(&self) -> PathBuf {
        self.app_path().join("services")
    }

    pub fn service_dir(&self, name: &ServiceName) -> PathBuf {
        self.services_dir().join(name.folder_name())
    }

    pub fn service_file(&self, name: &ServiceName) -> PathBuf {
        let folder = name.folder_name();
        self.service_dir(name)
            .join(format!("{folder}.service.{}", FileKind::Class.extension()))
    }
}
