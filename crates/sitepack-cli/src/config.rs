//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`SourceLayout`] built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. Environment variables: `SITEPACK_<SECTION>__<KEY>`, e.g.
//!    `SITEPACK_LAYOUT__OUTPUT_FILE=index.html`
//! 3. `--config FILE`, or `sitepack.toml` in the project root
//! 4. The global config file (see [`AppConfig::global_config_path`])
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use sitepack_core::domain::{EmitMode, SourceLayout, page::DEFAULT_TITLE};

/// Per-project config file looked up in the root.
pub const LOCAL_CONFIG_FILE: &str = "sitepack.toml";

const ENV_PREFIX: &str = "SITEPACK";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where sources live and where the page goes.
    pub layout: LayoutConfig,
    /// Build defaults.
    pub build: BuildConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
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

impl Default for LayoutConfig {
    fn default() -> Self {
        let layout = SourceLayout::new("");
        Self {
            components_dir: layout.components_dir,
            services_dir: layout.services_dir,
            types_file: layout.types_file,
            app_entry: layout.app_entry,
            bootstrap_entry: layout.bootstrap_entry,
            dist_dir: layout.dist_dir,
            output_file: layout.output_file,
            extensions: layout.extensions,
            excluded_dirs: layout.excluded_dirs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub mode: EmitMode,
    pub title: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            mode: EmitMode::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration for a project rooted at `root`.
    ///
    /// `config_file` is the path passed via `--config`; when given it must
    /// exist and replaces the lookup of `sitepack.toml` in the root.
    pub fn load(root: &Path, config_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        if let Some(global) = Self::global_config_path() {
            builder =
                builder.add_source(File::from(global).format(FileFormat::Toml).required(false));
        }

        builder = match config_file {
            Some(path) => builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(true),
            ),
            None => builder.add_source(
                File::from(root.join(LOCAL_CONFIG_FILE))
                    .format(FileFormat::Toml)
                    .required(false),
            ),
        };

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("layout.extensions")
                    .with_list_parse_key("layout.excluded_dirs"),
            )
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// The file that `load` would treat as the project's configuration.
    pub fn active_config_path(root: &Path, config_file: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = config_file {
            return Some(path.to_path_buf());
        }
        let local = root.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        Self::global_config_path()
    }

    /// Path to the per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "sitepack", "sitepack")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// The layout for `root`. Command-line overrides are applied by the caller.
    pub fn to_layout(&self, root: impl Into<PathBuf>) -> SourceLayout {
        let l = &self.layout;
        let mut layout = SourceLayout::new(root)
            .with_output_file(l.output_file.as_str())
            .with_dist_dir(l.dist_dir.as_path());
        layout.components_dir = l.components_dir.clone();
        layout.services_dir = l.services_dir.clone();
        layout.types_file = l.types_file.clone();
        layout.app_entry = l.app_entry.clone();
        layout.bootstrap_entry = l.bootstrap_entry.clone();
        layout.extensions = l.extensions.clone();
        layout.excluded_dirs = l.excluded_dirs.clone();
        layout
    }
}
