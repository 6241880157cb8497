//! Version compatibility layer for npm packages
//!
//! This module provides the core functionality for fetching a package's full
//! version history from the npm registry and resolving which published
//! versions declare support for a given Node.js version through their
//! `engines.node` range.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│  Resolver   │
//! │  (fetch)    │     │  (filter)   │
//! └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │    Range    │
//! │    (npm)    │     │ (satisfies) │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types for registry and resolution operations
//! - [`range`]: npm-style version range parsing and satisfaction
//! - [`registry`]: Registry trait for fetching packuments
//! - [`registries`]: Concrete registry implementations (npm)
//! - [`resolver`]: Compatibility resolution against a Node.js version
//! - [`semver`]: Shared semver utilities
//! - [`types`]: Packument data model

pub mod error;
pub mod range;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod semver;
pub mod types;
