//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sitepack-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::SitepackResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sitepack_adapters::filesystem::LocalFilesystem` (production)
/// - `sitepack_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `walk_files` is infallible: a missing or unreadable directory simply
///   yields nothing. Ordering of the result is unspecified.
/// - Reads return `Err` per file; whether that is fatal is the caller's call.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Every regular file below `root`, skipping any directory whose name is
    /// in `excluded_dirs` together with everything under it.
    fn walk_files(&self, root: &Path, excluded_dirs: &[String]) -> Vec<PathBuf>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> SitepackResult<String>;

    /// Write content to a file, replacing anything already there.
    fn write_file(&self, path: &Path, content: &str) -> SitepackResult<()>;

    /// Check if path is an existing file.
    fn is_file(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}
