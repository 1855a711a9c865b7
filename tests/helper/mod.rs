//! Shared utilities for integration tests

#![allow(dead_code)]

pub mod descriptor;
pub mod git_server;
pub mod resolver;

pub use descriptor::{descriptor_yaml, read_descriptor, write_descriptor};
pub use git_server::serve_refs;
pub use resolver::StubResolver;
