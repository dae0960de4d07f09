//! Bundle Service - main application orchestrator.
//!
//! This service coordinates the whole build:
//! 1. Discover source files per category
//! 2. Read them into an ordered aggregated document
//! 3. Render the standalone page
//! 4. Write it to the layout's output path
//!
//! Per-file read problems are collected in the report and never stop the
//! build. Only a failed write (or an invalid layout) is returned as `Err`.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        AggregatedDocument, DomainValidator as validator, EmitMode, FileCategory, PageTemplate,
        ReadFailure, SourceFile, SourceLayout, page::DEFAULT_TITLE,
    },
    error::{SitepackError, SitepackResult},
};

/// Knobs for [`BundleService::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub mode: EmitMode,
    pub title: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            mode: EmitMode::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Output of the aggregation step.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub document: AggregatedDocument,
    pub failures: Vec<ReadFailure>,
}

/// What a build did.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub mode: EmitMode,
    pub sections: usize,
    pub imports: usize,
    pub failures: Vec<ReadFailure>,
}

/// Main build service.
pub struct BundleService {
    filesystem: Box<dyn Filesystem>,
}

impl BundleService {
    /// Create a new bundle service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Source files below `dir`, filtered by the layout's extensions and
    /// exclusions, sorted by full path.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn discover(&self, dir: &Path, layout: &SourceLayout) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self
            .filesystem
            .walk_files(dir, &layout.excluded_dirs)
            .into_iter()
            .filter(|path| layout.accepts(path))
            .filter(|path| !under_excluded_dir(dir, path, &layout.excluded_dirs))
            .collect();

        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        files.dedup();

        debug!(count = files.len(), "Discovered source files");
        files
    }

    /// Read one source file.
    pub fn read_source(
        &self,
        path: &Path,
        category: FileCategory,
    ) -> Result<SourceFile, ReadFailure> {
        self.filesystem
            .read_to_string(path)
            .map(|content| SourceFile::new(path, category, content))
            .map_err(|e| ReadFailure {
                path: path.to_path_buf(),
                reason: failure_reason(e),
            })
    }

    /// Build the ordered document: types, services, components, app entry,
    /// bootstrap entry.
    #[instrument(skip_all, fields(root = %layout.root().display()))]
    pub fn aggregate(&self, layout: &SourceLayout) -> SitepackResult<Aggregation> {
        validator::validate_layout(layout).map_err(SitepackError::Domain)?;

        let mut aggregation = Aggregation::default();

        for category in FileCategory::ALL {
            for path in self.paths_for(category, layout) {
                let file = match self.read_source(&path, category) {
                    Ok(file) => file,
                    Err(failure) => {
                        warn!(
                            path = %failure.path.display(),
                            reason = %failure.reason,
                            "Source unreadable, using empty content"
                        );
                        aggregation.failures.push(failure);
                        SourceFile::new(&path, category, String::new())
                    }
                };
                aggregation.document.push(file);
            }
        }

        validator::validate_document(&aggregation.document).map_err(SitepackError::Domain)?;

        info!(
            sections = aggregation.document.len(),
            failures = aggregation.failures.len(),
            "Aggregation complete"
        );
        Ok(aggregation)
    }

    /// Aggregate, render and write the standalone page.
    #[instrument(
        skip_all,
        fields(
            root = %layout.root().display(),
            mode = %options.mode
        )
    )]
    pub fn build(
        &self,
        layout: &SourceLayout,
        options: &BuildOptions,
    ) -> SitepackResult<BuildReport> {
        let Aggregation { document, failures } = self.aggregate(layout)?;

        let page = PageTemplate::new(options.title.as_str())
            .render(options.mode, &document)
            .map_err(SitepackError::Domain)?;

        let output_path = layout.output_path();
        self.filesystem.write_file(&output_path, &page)?;

        info!(
            path = %output_path.display(),
            bytes = page.len(),
            "Standalone page written"
        );

        Ok(BuildReport {
            output_path,
            bytes_written: page.len(),
            mode: options.mode,
            sections: document.len(),
            imports: document.import_count(),
            failures,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn paths_for(&self, category: FileCategory, layout: &SourceLayout) -> Vec<PathBuf> {
        if let Some(dir) = layout.directory_for(category) {
            return self.discover(&dir, layout);
        }

        match layout.singleton_for(category) {
            Some(path) if self.filesystem.is_file(&path) => vec![path],
            Some(path) => {
                debug!(path = %path.display(), %category, "Optional entry absent, skipping");
                Vec::new()
            }
            None => Vec::new(),
        }
    }
}

fn under_excluded_dir(root: &Path, path: &Path, excluded: &[String]) -> bool {
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };
    let Some(parent) = relative.parent() else {
        return false;
    };
    parent
        .components()
        .any(|c| excluded.iter().any(|name| c.as_os_str() == name.as_str()))
}

fn failure_reason(err: SitepackError) -> String {
    match err {
        SitepackError::Application(ApplicationError::ReadFailed { reason, .. }) => reason,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use super::*;
    use crate::application::ports::output::MockFilesystem;

    /// `None` content marks a file that exists but cannot be read.
    fn mock_tree(files: &[(&str, Option<&str>)]) -> MockFilesystem {
        let files: Arc<BTreeMap<PathBuf, Option<String>>> = Arc::new(
            files
                .iter()
                .map(|(p, c)| (PathBuf::from(p), c.map(str::to_string)))
                .collect(),
        );

        let mut mock = MockFilesystem::new();

        let walk = Arc::clone(&files);
        mock.expect_walk_files().returning(move |root, _| {
            // Reverse order so sorting is actually exercised.
            walk.keys()
                .rev()
                .filter(|p| p.starts_with(root))
                .cloned()
                .collect()
        });

        let exists = Arc::clone(&files);
        mock.expect_is_file()
            .returning(move |p| exists.contains_key(p));

        let read = Arc::clone(&files);
        mock.expect_read_to_string().returning(move |p| {
            match read.get(p) {
                Some(Some(content)) => Ok(content.clone()),
                _ => Err(ApplicationError::ReadFailed {
                    path: p.to_path_buf(),
                    reason: "permission denied".into(),
                }
                .into()),
            }
        });

        mock
    }

    fn full_tree() -> Vec<(&'static str, Option<&'static str>)> {
        vec![
            ("/app/types.ts", Some("export type Id = string;")),
            ("/app/services/b.ts", Some("export const b = 2;")),
            ("/app/services/a.ts", Some("export const a = 1;")),
            ("/app/components/Window.tsx", Some("import { a } from '../services/a';")),
            ("/app/components/Desktop.tsx", Some("export const Desktop = 1;")),
            ("/app/App.tsx", Some("export default App;")),
            ("/app/index.tsx", Some("render(App);")),
        ]
    }

    #[test]
    fn discover_sorts_and_filters_extensions() {
        let service = BundleService::new(Box::new(mock_tree(&[
            ("/app/services/z.ts", Some("")),
            ("/app/services/a.tsx", Some("")),
            ("/app/services/notes.md", Some("")),
            ("/app/services/m/inner.ts", Some("")),
        ])));
        let layout = SourceLayout::new("/app");

        let files = service.discover(Path::new("/app/services"), &layout);
        assert_eq!(
            files,
            vec![
                PathBuf::from("/app/services/a.tsx"),
                PathBuf::from("/app/services/m/inner.ts"),
                PathBuf::from("/app/services/z.ts"),
            ]
        );
    }

    #[test]
    fn discover_drops_excluded_subtrees_even_if_adapter_returns_them() {
        let service = BundleService::new(Box::new(mock_tree(&[
            ("/app/components/Ok.tsx", Some("")),
            ("/app/components/node_modules/lib/index.ts", Some("")),
            ("/app/components/dist/out.ts", Some("")),
            ("/app/components/.git/hook.ts", Some("")),
        ])));
        let layout = SourceLayout::new("/app");

        let files = service.discover(Path::new("/app/components"), &layout);
        assert_eq!(files, vec![PathBuf::from("/app/components/Ok.tsx")]);
    }

    #[test]
    fn aggregate_orders_categories_and_sorts_within() {
        let service = BundleService::new(Box::new(mock_tree(&full_tree())));
        let layout = SourceLayout::new("/app");

        let aggregation = service.aggregate(&layout).unwrap();
        assert_eq!(
            aggregation.document.labels(),
            vec![
                "types.ts",
                "a.ts",
                "b.ts",
                "Desktop.tsx",
                "Window.tsx",
                "App.tsx",
                "index.tsx"
            ]
        );
        assert!(aggregation.failures.is_empty());
        assert_eq!(aggregation.document.import_count(), 1);
    }

    #[test]
    fn aggregate_is_deterministic() {
        let layout = SourceLayout::new("/app");
        let first = BundleService::new(Box::new(mock_tree(&full_tree())))
            .aggregate(&layout)
            .unwrap();
        let second = BundleService::new(Box::new(mock_tree(&full_tree())))
            .aggregate(&layout)
            .unwrap();
        assert_eq!(first.document.render(), second.document.render());
    }

    #[test]
    fn missing_singleton_is_omitted_without_shifting_others() {
        let tree: Vec<_> = full_tree()
            .into_iter()
            .filter(|(p, _)| *p != "/app/App.tsx")
            .collect();
        let service = BundleService::new(Box::new(mock_tree(&tree)));

        let aggregation = service.aggregate(&SourceLayout::new("/app")).unwrap();
        let rendered = aggregation.document.render();
        assert!(!rendered.contains("// App.tsx"));
        assert_eq!(
            aggregation.document.labels(),
            vec!["types.ts", "a.ts", "b.ts", "Desktop.tsx", "Window.tsx", "index.tsx"]
        );
    }

    #[test]
    fn unreadable_service_does_not_block_the_rest() {
        let mut tree = full_tree();
        tree[2] = ("/app/services/a.ts", None);
        let service = BundleService::new(Box::new(mock_tree(&tree)));

        let aggregation = service.aggregate(&SourceLayout::new("/app")).unwrap();
        assert_eq!(aggregation.failures.len(), 1);
        assert_eq!(
            aggregation.failures[0].path,
            PathBuf::from("/app/services/a.ts")
        );
        assert_eq!(aggregation.failures[0].reason, "permission denied");

        let sections = aggregation.document.sections();
        assert_eq!(sections.len(), 7);
        assert_eq!(sections[1].label, "a.ts");
        assert!(sections[1].content.is_empty());
        assert_eq!(sections[2].content, "export const b = 2;");
        assert!(aggregation.document.labels().contains(&"Window.tsx"));
    }

    #[test]
    fn build_writes_page_to_layout_output() {
        let mut mock = mock_tree(&full_tree());
        mock.expect_write_file()
            .times(1)
            .withf(|path, content| {
                path.starts_with("/app")
                    && path.ends_with("standalone.html")
                    && content.contains("id=\"root\"")
            })
            .returning(|_, _| Ok(()));
        let service = BundleService::new(Box::new(mock));

        let report = service
            .build(&SourceLayout::new("/app"), &BuildOptions::default())
            .unwrap();
        assert_eq!(report.output_path, PathBuf::from("/app/standalone.html"));
        assert_eq!(report.sections, 7);
        assert_eq!(report.mode, EmitMode::Instructions);
        assert!(report.bytes_written > 0);
    }

    #[test]
    fn build_embed_mode_carries_sources() {
        let mut mock = mock_tree(&full_tree());
        mock.expect_write_file()
            .times(1)
            .withf(|_, content| content.contains("// Desktop.tsx"))
            .returning(|_, _| Ok(()));
        let service = BundleService::new(Box::new(mock));

        let options = BuildOptions {
            mode: EmitMode::Embed,
            ..BuildOptions::default()
        };
        service.build(&SourceLayout::new("/app"), &options).unwrap();
    }

    #[test]
    fn build_fails_when_write_fails() {
        let mut mock = mock_tree(&full_tree());
        mock.expect_write_file().returning(|path, _| {
            Err(ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: "read-only filesystem".into(),
            }
            .into())
        });
        let service = BundleService::new(Box::new(mock));

        let err = service
            .build(&SourceLayout::new("/app"), &BuildOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            SitepackError::Application(ApplicationError::WriteFailed { .. })
        ));
    }

    #[test]
    fn build_rejects_invalid_layout_before_touching_disk() {
        let service = BundleService::new(Box::new(MockFilesystem::new()));
        let layout = SourceLayout::new("/app").with_output_file("");

        let err = service.build(&layout, &BuildOptions::default()).unwrap_err();
        assert!(matches!(err, SitepackError::Domain(_)));
    }
}
