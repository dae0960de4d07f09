//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use sitepack_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SitepackError, SitepackResult},
};

/// Production filesystem implementation.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn walk_files(&self, root: &Path, excluded_dirs: &[String]) -> Vec<PathBuf> {
        if !root.is_dir() {
            debug!(root = %root.display(), "Walk root missing, nothing to discover");
            return Vec::new();
        }

        WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| !is_excluded(entry, excluded_dirs))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(DirEntry::into_path)
            .collect()
    }

    fn read_to_string(&self, path: &Path) -> SitepackResult<String> {
        std::fs::read_to_string(path).map_err(|e| read_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> SitepackResult<()> {
        std::fs::write(path, content).map_err(|e| {
            ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Directories below the walk root whose name is excluded are pruned.
fn is_excluded(entry: &DirEntry, excluded_dirs: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excluded_dirs.iter().any(|d| d == name))
}

fn read_error(path: &Path, e: io::Error) -> SitepackError {
    let reason = match e.kind() {
        io::ErrorKind::InvalidData => "stream did not contain valid UTF-8".to_string(),
        _ => e.to_string(),
    };
    ApplicationError::ReadFailed {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn excluded() -> Vec<String> {
        vec!["node_modules".into(), "dist".into(), ".git".into()]
    }

    #[test]
    fn walk_prunes_excluded_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("components/ui")).unwrap();
        fs::create_dir_all(root.join("components/node_modules/pkg")).unwrap();
        fs::write(root.join("components/Button.tsx"), "b").unwrap();
        fs::write(root.join("components/ui/Icon.tsx"), "i").unwrap();
        fs::write(root.join("components/node_modules/pkg/index.ts"), "x").unwrap();

        let mut files = LocalFilesystem::new().walk_files(&root.join("components"), &excluded());
        files.sort();

        assert_eq!(
            files,
            vec![
                root.join("components/Button.tsx"),
                root.join("components/ui/Icon.tsx"),
            ]
        );
    }

    #[test]
    fn walk_of_missing_root_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let files = LocalFilesystem::new().walk_files(&tmp.path().join("nope"), &excluded());
        assert!(files.is_empty());
    }

    #[test]
    fn walk_root_named_like_excluded_dir_is_still_walked() {
        let tmp = tempfile::tempdir().unwrap();
        let dist = tmp.path().join("dist");
        fs::create_dir_all(&dist).unwrap();
        fs::write(dist.join("index.html"), "<html>").unwrap();

        let files = LocalFilesystem::new().walk_files(&dist, &excluded());
        assert_eq!(files, vec![dist.join("index.html")]);
    }

    #[test]
    fn read_non_utf8_fails_with_reason() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.ts");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = LocalFilesystem::new().read_to_string(&path).unwrap_err();
        assert!(err.to_string().contains("valid UTF-8"));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing/standalone.html");

        let err = LocalFilesystem::new().write_file(&path, "x").unwrap_err();
        assert!(matches!(
            err,
            SitepackError::Application(ApplicationError::WriteFailed { .. })
        ));
    }

    #[test]
    fn write_then_read_back() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("standalone.html");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "<!DOCTYPE html>").unwrap();
        assert!(fs.is_file(&path));
        assert!(fs.is_dir(tmp.path()));
        assert_eq!(fs.read_to_string(&path).unwrap(), "<!DOCTYPE html>");
    }
}
