//! Inline Service - fold an external build's assets into one page.
//!
//! Takes `dist/index.html` produced by a real bundler and replaces
//! `<script src>` / stylesheet `<link>` tags with the referenced file
//! contents. No code is transformed; this only works on output that is
//! already bundled.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainValidator as validator, SourceLayout},
    error::{SitepackError, SitepackResult},
};

const INDEX_PAGE: &str = "index.html";
const SCRIPT_CLOSE_TAG: &str = "</script>";

static SCRIPT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<script[^>]*src=["']([^"']+)["'][^>]*></script>"#)
        .expect("valid script tag pattern")
});

static LINK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<link[^>]*href=["']([^"']+)["'][^>]*>"#).expect("valid link tag pattern")
});

static MODULE_TYPE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s*type=["']module["']"#).expect("valid type attribute pattern")
});

static SRC_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s*src=["'][^"']+["']"#).expect("valid src attribute pattern")
});

/// What an inline run did.
#[derive(Debug, Clone, Default)]
pub struct InlineReport {
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub scripts_inlined: usize,
    pub stylesheets_inlined: usize,
    /// Referenced local assets that were not found; their tags are left as-is.
    pub missing_assets: Vec<PathBuf>,
}

enum Asset {
    Remote,
    Missing(PathBuf),
    Found(String),
}

/// Service for inlining built assets.
pub struct InlineService {
    filesystem: Box<dyn Filesystem>,
}

impl InlineService {
    /// Create a new inline service.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Inline `<dist>/index.html` and write it to the layout's output path.
    #[instrument(skip_all, fields(dist = %layout.dist_path().display()))]
    pub fn inline(&self, layout: &SourceLayout) -> SitepackResult<InlineReport> {
        validator::validate_layout(layout).map_err(SitepackError::Domain)?;

        let dist = layout.dist_path();
        if !self.filesystem.is_dir(&dist) {
            return Err(ApplicationError::MissingInput {
                what: "dist directory",
                path: dist,
            }
            .into());
        }

        let index = dist.join(INDEX_PAGE);
        if !self.filesystem.is_file(&index) {
            return Err(ApplicationError::MissingInput {
                what: "built index page",
                path: index,
            }
            .into());
        }

        let html = self.filesystem.read_to_string(&index)?;
        let mut report = InlineReport::default();

        // Stylesheets first: a CSS file is far less likely than a script to
        // contain text that looks like a tag.
        let html = self.inline_stylesheets(&dist, &html, &mut report);
        let html = self.inline_scripts(&dist, &html, &mut report);

        let output_path = layout.output_path();
        self.filesystem.write_file(&output_path, &html)?;

        info!(
            path = %output_path.display(),
            scripts = report.scripts_inlined,
            stylesheets = report.stylesheets_inlined,
            missing = report.missing_assets.len(),
            "Inlined page written"
        );

        report.output_path = output_path;
        report.bytes_written = html.len();
        Ok(report)
    }

    fn inline_scripts(&self, dist: &Path, html: &str, report: &mut InlineReport) -> String {
        SCRIPT_TAG
            .replace_all(html, |caps: &Captures<'_>| {
                let tag = &caps[0];
                match self.load_asset(dist, &caps[1]) {
                    Asset::Found(content) => {
                        report.scripts_inlined += 1;
                        let stripped = MODULE_TYPE_ATTR.replace_all(tag, "");
                        let stripped = SRC_ATTR.replace(&stripped, "");
                        let close = stripped.len() - SCRIPT_CLOSE_TAG.len();
                        format!("{}{}{}", &stripped[..close], content, &stripped[close..])
                    }
                    Asset::Missing(path) => {
                        warn!(path = %path.display(), "Script not found, leaving tag");
                        report.missing_assets.push(path);
                        tag.to_string()
                    }
                    Asset::Remote => tag.to_string(),
                }
            })
            .into_owned()
    }

    fn inline_stylesheets(&self, dist: &Path, html: &str, report: &mut InlineReport) -> String {
        LINK_TAG
            .replace_all(html, |caps: &Captures<'_>| {
                let tag = &caps[0];
                if !is_stylesheet(&caps[1]) {
                    return tag.to_string();
                }
                match self.load_asset(dist, &caps[1]) {
                    Asset::Found(content) => {
                        report.stylesheets_inlined += 1;
                        format!("<style>{content}</style>")
                    }
                    Asset::Missing(path) => {
                        warn!(path = %path.display(), "Stylesheet not found, leaving tag");
                        report.missing_assets.push(path);
                        tag.to_string()
                    }
                    Asset::Remote => tag.to_string(),
                }
            })
            .into_owned()
    }

    fn load_asset(&self, dist: &Path, reference: &str) -> Asset {
        if is_remote(reference) {
            debug!(reference, "Remote asset, not inlined");
            return Asset::Remote;
        }

        let path = dist.join(local_part(reference).trim_start_matches('/'));
        if !self.filesystem.is_file(&path) {
            return Asset::Missing(path);
        }

        match self.filesystem.read_to_string(&path) {
            Ok(content) => Asset::Found(content),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Asset unreadable");
                Asset::Missing(path)
            }
        }
    }
}

fn is_remote(reference: &str) -> bool {
    ["http://", "https://", "//", "data:"]
        .iter()
        .any(|prefix| reference.starts_with(prefix))
}

/// Drop any `?query` or `#fragment` from an asset reference.
fn local_part(reference: &str) -> &str {
    reference
        .split(['?', '#'])
        .next()
        .unwrap_or(reference)
}

fn is_stylesheet(reference: &str) -> bool {
    local_part(reference).to_ascii_lowercase().ends_with(".css")
}
