//! Small closed vocabularies used across the domain.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a source file sits in the aggregated document.
///
/// Declaration order is aggregation order: types first so that everything
/// after can refer to them, services before components, entry points last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileCategory {
    Types,
    Services,
    Components,
    AppEntry,
    BootstrapEntry,
}

impl FileCategory {
    pub const ALL: [FileCategory; 5] = [
        Self::Types,
        Self::Services,
        Self::Components,
        Self::AppEntry,
        Self::BootstrapEntry,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Types => "types",
            Self::Services => "services",
            Self::Components => "components",
            Self::AppEntry => "app-entry",
            Self::BootstrapEntry => "bootstrap-entry",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the emitted page carries besides the fixed template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmitMode {
    /// Template only; the loading placeholder explains the external build step.
    #[default]
    Instructions,
    /// Template plus the aggregated document in an inert `text/plain` block.
    Embed,
}

impl fmt::Display for EmitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instructions => write!(f, "instructions"),
            Self::Embed => write!(f, "embed"),
        }
    }
}
