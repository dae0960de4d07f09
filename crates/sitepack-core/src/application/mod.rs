//! Application layer for Sitepack.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (BundleService, InlineService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! rendering rules itself. Ordering and page content live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    Aggregation, BuildOptions, BuildReport, BundleService, InlineReport, InlineService,
};

pub use ports::Filesystem;

pub use error::ApplicationError;
