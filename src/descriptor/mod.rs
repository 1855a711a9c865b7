//! Component descriptor layer
//!
//! - types.rs: serde model of a v2 component descriptor
//! - codec.rs: YAML decoding and encoding with schema stamping
//! - updater.rs: rewrites git sources to their latest tagged version
//! - error.rs: error types for decoding and updating

pub mod codec;
pub mod error;
pub mod types;
pub mod updater;

pub use codec::{decode, encode};
pub use error::{CodecError, UpdateError};
pub use types::{ComponentDescriptor, ComponentSpec, GitHubAccess, Metadata, SourceEntry};
pub use updater::update_component_descriptor;
