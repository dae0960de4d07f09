//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "build the standalone page" or "inline a dist".

pub mod bundle_service;
pub mod inline_service;

pub use bundle_service::{Aggregation, BuildOptions, BuildReport, BundleService};
pub use inline_service::{InlineReport, InlineService};
