//! Sitepack Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sitepack
//! source aggregator and standalone page generator, following hexagonal
//! (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          sitepack-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (BundleService, InlineService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: Filesystem)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    sitepack-adapters (Infrastructure)   │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (SourceLayout, AggregatedDocument, Page)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sitepack_core::{
//!     application::{BuildOptions, BundleService},
//!     domain::SourceLayout,
//! };
//!
//! // 1. Describe where the sources live
//! let layout = SourceLayout::new(".");
//!
//! // 2. Use application service (with injected adapter)
//! let service = BundleService::new(filesystem);
//! let report = service.build(&layout, &BuildOptions::default()).unwrap();
//! println!("wrote {}", report.output_path.display());
//! ```

pub mod domain;

pub mod application;

pub mod error;
