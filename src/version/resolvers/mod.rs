//! Latest version resolvers

mod caching;
mod git;

pub use caching::CachingResolver;
pub use git::TagResolver;
