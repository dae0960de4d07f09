use std::path::{Component, Path, PathBuf};

use crate::domain::{FileCategory, error::DomainError};

pub const DEFAULT_COMPONENTS_DIR: &str = "components";
pub const DEFAULT_SERVICES_DIR: &str = "services";
pub const DEFAULT_TYPES_FILE: &str = "types.ts";
pub const DEFAULT_APP_ENTRY: &str = "App.tsx";
pub const DEFAULT_BOOTSTRAP_ENTRY: &str = "index.tsx";
pub const DEFAULT_OUTPUT_FILE: &str = "standalone.html";
pub const DEFAULT_DIST_DIR: &str = "dist";
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".tsx", ".ts"];
pub const DEFAULT_EXCLUDED_DIRS: [&str; 3] = ["node_modules", "dist", ".git"];

/// Where every input and output lives, relative to one explicit root.
///
/// Nothing in the pipeline resolves paths against the process working
/// directory; every service receives a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    root: PathBuf,
    pub components_dir: PathBuf,
    pub services_dir: PathBuf,
    pub types_file: PathBuf,
    pub app_entry: PathBuf,
    pub bootstrap_entry: PathBuf,
    pub dist_dir: PathBuf,
    pub output_file: String,
    pub extensions: Vec<String>,
    pub excluded_dirs: Vec<String>,
}

impl SourceLayout {
    /// Default project layout anchored at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            components_dir: PathBuf::from(DEFAULT_COMPONENTS_DIR),
            services_dir: PathBuf::from(DEFAULT_SERVICES_DIR),
            types_file: PathBuf::from(DEFAULT_TYPES_FILE),
            app_entry: PathBuf::from(DEFAULT_APP_ENTRY),
            bootstrap_entry: PathBuf::from(DEFAULT_BOOTSTRAP_ENTRY),
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_output_file(mut self, name: impl Into<String>) -> Self {
        self.output_file = name.into();
        self
    }

    pub fn with_dist_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dist_dir = dir.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory scanned for a multi-file category, `None` for singletons.
    pub fn directory_for(&self, category: FileCategory) -> Option<PathBuf> {
        match category {
            FileCategory::Services => Some(self.root.join(&self.services_dir)),
            FileCategory::Components => Some(self.root.join(&self.components_dir)),
            _ => None,
        }
    }

    /// File bound to a singleton category, `None` for directories.
    pub fn singleton_for(&self, category: FileCategory) -> Option<PathBuf> {
        match category {
            FileCategory::Types => Some(self.root.join(&self.types_file)),
            FileCategory::AppEntry => Some(self.root.join(&self.app_entry)),
            FileCategory::BootstrapEntry => Some(self.root.join(&self.bootstrap_entry)),
            _ => None,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_file)
    }

    /// `dist_dir` may be absolute (passed on the command line); otherwise it
    /// is relative to the root.
    pub fn dist_path(&self) -> PathBuf {
        self.root.join(&self.dist_dir)
    }

    /// Whether a file name carries one of the allowed suffixes.
    pub fn accepts(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.extensions.iter().any(|ext| name.ends_with(ext.as_str())))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let named = [
            ("components_dir", &self.components_dir),
            ("services_dir", &self.services_dir),
            ("types_file", &self.types_file),
            ("app_entry", &self.app_entry),
            ("bootstrap_entry", &self.bootstrap_entry),
        ];
        for (field, path) in named {
            if path.as_os_str().is_empty() {
                return Err(DomainError::InvalidLayout(format!("{field} is empty")));
            }
            if path.is_absolute() || path.components().any(|c| c == Component::ParentDir) {
                return Err(DomainError::InvalidLayout(format!(
                    "{field} must stay inside the root: {}",
                    path.display()
                )));
            }
        }

        if self.output_file.is_empty()
            || self.output_file.contains(['/', '\\'])
            || self.output_file == "."
            || self.output_file == ".."
        {
            return Err(DomainError::InvalidLayout(format!(
                "output_file must be a plain file name, got '{}'",
                self.output_file
            )));
        }

        if self.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err(DomainError::InvalidLayout(
                "at least one file extension is required".into(),
            ));
        }

        Ok(())
    }
}
