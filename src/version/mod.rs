//! Version resolution layer for git-hosted components
//!
//! This module answers one question: what is the newest semantic-version tag
//! a git repository advertises?
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────┐     ┌─────────────────┐
//! │ CachingResolver │────▶│ TagResolver │────▶│ RemoteTagLister │
//! │   (memoize)     │     │  (compose)  │     │ (info/refs)     │
//! └─────────────────┘     └─────────────┘     └─────────────────┘
//!                                │
//!                                ▼
//!                         ┌─────────────┐
//!                         │   semver    │
//!                         │ (ordering)  │
//!                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types for remote operations
//! - [`listers`]: Concrete ref listers (git smart HTTP)
//! - [`remote`]: Trait for listing the refs a remote advertises
//! - [`resolver`]: Trait for resolving the latest version of a repository
//! - [`resolvers`]: Network-backed and caching resolver implementations
//! - [`semver`]: Tag parsing and latest-version selection

pub mod error;
pub mod listers;
pub mod remote;
pub mod resolver;
pub mod resolvers;
pub mod semver;
