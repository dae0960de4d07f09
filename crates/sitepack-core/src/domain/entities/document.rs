use crate::domain::{
    FileCategory,
    entities::source_file::SourceFile,
    error::DomainError,
    imports::{ImportStatement, extract_imports},
};

/// One file's contribution to the aggregated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: FileCategory,
    /// Base name of the originating file, used as the banner.
    pub label: String,
    /// Raw file text. Imports are *not* stripped.
    pub content: String,
    /// Imports found in `content`, for reporting only.
    pub imports: Vec<ImportStatement>,
}

impl Section {
    pub fn banner(&self) -> String {
        format!("// {}", self.label)
    }
}

impl From<SourceFile> for Section {
    fn from(file: SourceFile) -> Self {
        let imports = extract_imports(file.content()).imports;
        Self {
            category: file.category(),
            label: file.label(),
            content: file.content().to_string(),
            imports,
        }
    }
}

/// Ordered concatenation of every discovered source file.
///
/// Not executable: cross-file references are left exactly as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedDocument {
    sections: Vec<Section>,
}

impl AggregatedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section. Callers push in category order; see [`Self::validate`].
    pub fn push(&mut self, section: impl Into<Section>) {
        self.sections.push(section.into());
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn import_count(&self) -> usize {
        self.sections.iter().map(|s| s.imports.len()).sum()
    }

    /// Banner, content and a blank separator per section, joined by `\n`.
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.sections.len() * 3);
        for section in &self.sections {
            parts.push(section.banner());
            parts.push(section.content.clone());
            parts.push(String::new());
        }
        parts.join("\n")
    }

    /// Categories must never go backwards.
    pub fn validate(&self) -> Result<(), DomainError> {
        for pair in self.sections.windows(2) {
            if pair[1].category < pair[0].category {
                return Err(DomainError::OrderingViolated {
                    label: pair[1].label.clone(),
                    category: pair[1].category.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, category: FileCategory, content: &str) -> SourceFile {
        SourceFile::new(path, category, content)
    }

    #[test]
    fn render_puts_banner_before_content() {
        let mut doc = AggregatedDocument::new();
        doc.push(file("/app/types.ts", FileCategory::Types, "export type A = 1;"));
        doc.push(file("/app/services/a.ts", FileCategory::Services, "a()"));

        assert_eq!(
            doc.render(),
            "// types.ts\nexport type A = 1;\n\n// a.ts\na()\n"
        );
    }

    #[test]
    fn empty_document_renders_empty() {
        assert_eq!(AggregatedDocument::new().render(), "");
    }

    #[test]
    fn sections_record_imports_but_keep_raw_content() {
        let mut doc = AggregatedDocument::new();
        doc.push(file(
            "/app/App.tsx",
            FileCategory::AppEntry,
            "import React from 'react';\nimport { Foo } from './Foo';\nrender();",
        ));

        let section = &doc.sections()[0];
        assert!(section.content.starts_with("import React"));
        assert_eq!(section.imports.len(), 2);
        assert_eq!(doc.import_count(), 2);
    }

    #[test]
    fn validate_rejects_backwards_categories() {
        let mut doc = AggregatedDocument::new();
        doc.push(file("/app/App.tsx", FileCategory::AppEntry, ""));
        doc.push(file("/app/types.ts", FileCategory::Types, ""));
        assert!(matches!(
            doc.validate(),
            Err(DomainError::OrderingViolated { .. })
        ));
    }

    #[test]
    fn validate_accepts_repeated_directory_category() {
        let mut doc = AggregatedDocument::new();
        doc.push(file("/app/services/a.ts", FileCategory::Services, ""));
        doc.push(file("/app/services/b.ts", FileCategory::Services, ""));
        doc.push(file("/app/index.tsx", FileCategory::BootstrapEntry, ""));
        assert!(doc.validate().is_ok());
        assert_eq!(doc.labels(), vec!["a.ts", "b.ts", "index.tsx"]);
    }
}
