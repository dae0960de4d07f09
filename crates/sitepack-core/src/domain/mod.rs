// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Sitepack.
//!
//! Pure logic: no filesystem access. Reading sources and writing the page are
//! handled via the [`Filesystem`](crate::application::ports::Filesystem) port
//! defined in the application layer.
//!
//! - **No I/O**: entities are built from text the services already read
//! - **Deterministic**: the same inputs always render the same bytes
//! - **Immutable entities**: domain objects are Clone + PartialEq
pub mod entities;
pub mod error;
pub mod imports;
pub mod page;
pub mod value_objects;

mod validation;

pub use entities::{
    document::{AggregatedDocument, Section},
    layout::SourceLayout,
    source_file::{ReadFailure, SourceFile},
};

pub use error::{DomainError, ErrorCategory};
pub use imports::{ExtractedImports, ImportStatement, extract_imports};
pub use page::{PINNED_MODULES, PageTemplate, PinnedModule};
pub use value_objects::{EmitMode, FileCategory};

pub use validation::DomainValidator;
