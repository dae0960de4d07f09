//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use sitepack_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SitepackResult,
};

/// In-memory filesystem for testing.
///
/// Directories are implied by the files added under them; [`Self::add_dir`]
/// registers an empty one. Reads of paths passed to [`Self::deny_read`] fail,
/// which stands in for permission or encoding errors on disk.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn register_ancestors(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Add a file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) -> &Self {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                inner.register_ancestors(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Add an empty directory.
    pub fn add_dir(&self, path: impl AsRef<Path>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.register_ancestors(path.as_ref());
        }
        self
    }

    /// Make reads of `path` fail.
    pub fn deny_read(&self, path: impl AsRef<Path>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.unreadable.insert(path.as_ref().to_path_buf());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn walk_files(&self, root: &Path, excluded_dirs: &[String]) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };

        inner
            .files
            .keys()
            .filter(|path| path.starts_with(root))
            .filter(|path| {
                let relative = path.strip_prefix(root).unwrap_or(path.as_path());
                // Every component but the file name is a directory below the root.
                let mut dirs = relative.components().rev().skip(1);
                !dirs.any(|c| {
                    c.as_os_str()
                        .to_str()
                        .is_some_and(|name| excluded_dirs.iter().any(|d| d == name))
                })
            })
            .cloned()
            .collect()
    }

    fn read_to_string(&self, path: &Path) -> SitepackResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.unreadable.contains(path) {
            return Err(ApplicationError::ReadFailed {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }

        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::ReadFailed {
                path: path.to_path_buf(),
                reason: "No such file or directory".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> SitepackResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::WriteFailed {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.files.contains_key(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.directories.contains(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excluded() -> Vec<String> {
        vec!["node_modules".into(), "dist".into()]
    }

    #[test]
    fn add_file_creates_parents() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/app/components/ui/Button.tsx", "b");

        assert!(fs.is_dir(Path::new("/app")));
        assert!(fs.is_dir(Path::new("/app/components/ui")));
        assert!(fs.is_file(Path::new("/app/components/ui/Button.tsx")));
        assert!(!fs.is_dir(Path::new("/app/components/ui/Button.tsx")));
    }

    #[test]
    fn walk_filters_by_root_and_exclusion() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/app/components/A.tsx", "a")
            .add_file("/app/components/node_modules/x/B.tsx", "b")
            .add_file("/app/services/c.ts", "c");

        let files = fs.walk_files(Path::new("/app/components"), &excluded());
        assert_eq!(files, vec![PathBuf::from("/app/components/A.tsx")]);
    }

    #[test]
    fn file_named_like_excluded_dir_is_kept() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/app/components/dist", "not a dir");

        let files = fs.walk_files(Path::new("/app/components"), &excluded());
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn deny_read_fails_reads() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/app/types.ts", "t").deny_read("/app/types.ts");

        let err = fs.read_to_string(Path::new("/app/types.ts")).unwrap_err();
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/nowhere/out.html"), "x").is_err());

        fs.add_dir("/app");
        fs.write_file(Path::new("/app/out.html"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/app/out.html")).as_deref(), Some("x"));
        assert!(fs.is_file(Path::new("/app/out.html")));
    }
}
