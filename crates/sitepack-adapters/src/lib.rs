//! Infrastructure adapters for Sitepack.
//!
//! This crate implements the ports defined in `sitepack-core::application::ports`.
//! It contains all I/O: directory walking, reading sources and writing the page.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
