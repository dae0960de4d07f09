//! Line-level import extraction.
//!
//! This is bookkeeping only: extracted imports are reported alongside each
//! section but never used to rewrite or resolve references.

use std::sync::LazyLock;

use regex::Regex;

static IMPORT_FROM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^import\s+(.+?)\s+from\s+['"](.+?)['"]"#).expect("valid import pattern")
});

static IMPORT_SIDE_EFFECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^import\s+['"](.+?)['"]"#).expect("valid import pattern"));

/// One `import` declaration found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    /// What is bound locally, e.g. `{ Foo }` or `React`. `None` for
    /// side-effect imports.
    pub binding: Option<String>,
    /// Module specifier between the quotes, e.g. `./bar`.
    pub specifier: String,
}

/// Result of running the extractor over a whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedImports {
    /// Every non-import line, in order, joined with `\n`.
    pub passthrough: String,
    pub imports: Vec<ImportStatement>,
}

/// Whether a line is an import declaration.
pub fn is_import_line(line: &str) -> bool {
    line.trim_start().starts_with("import ")
}

/// Parse a single import declaration. Returns `None` for anything that is not
/// an import, and for import lines that match neither recognised form (those
/// are still dropped from the pass-through by [`extract_imports`]).
pub fn parse_import(line: &str) -> Option<ImportStatement> {
    let line = line.trim();
    if !is_import_line(line) {
        return None;
    }

    if let Some(caps) = IMPORT_FROM.captures(line) {
        return Some(ImportStatement {
            binding: Some(caps[1].to_string()),
            specifier: caps[2].to_string(),
        });
    }

    IMPORT_SIDE_EFFECT
        .captures(line)
        .map(|caps| ImportStatement {
            binding: None,
            specifier: caps[1].to_string(),
        })
}

/// Split `content` into import declarations and everything else.
pub fn extract_imports(content: &str) -> ExtractedImports {
    let mut kept = Vec::new();
    let mut imports = Vec::new();

    for line in content.split('\n') {
        if is_import_line(line) {
            imports.extend(parse_import(line));
            continue;
        }
        kept.push(line);
    }

    ExtractedImports {
        passthrough: kept.join("\n"),
        imports,
    }
}
