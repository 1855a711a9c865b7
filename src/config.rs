use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Descriptor-related constants
// =============================================================================

/// File name looked up in every directory handed to the updater
pub const DESCRIPTOR_FILE_NAME: &str = "component-descriptor.yaml";

/// Path suffix that requests a recursive walk (`./components/...`)
pub const RECURSIVE_SUFFIX: &str = "/...";

/// Schema version stamped into every encoded descriptor
pub const SCHEMA_VERSION: &str = "v2";

/// Source type handled by the git resolver
pub const GIT_SOURCE_TYPE: &str = "git";

// =============================================================================
// Network-related constants
// =============================================================================

/// Timeout for a single ref advertisement request in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// User agent sent to git servers. Some hosts only answer smart-HTTP
/// requests from clients that look like git.
pub const USER_AGENT: &str = concat!("git/component-updater-", env!("CARGO_PKG_VERSION"));

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one path is required")]
    NoPaths,

    #[error("fetch timeout must be greater than zero")]
    ZeroTimeout,
}

/// Settings for one updater run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdaterConfig {
    /// Directories (or `dir/...` patterns) to update, in the order given
    pub paths: Vec<String>,
    pub fetch_timeout: Duration,
}

impl UpdaterConfig {
    pub fn new(paths: Vec<String>, fetch_timeout_secs: u64) -> Result<Self, ConfigError> {
        if paths.is_empty() {
            return Err(ConfigError::NoPaths);
        }
        if fetch_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            paths,
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
        })
    }
}

/// Returns the descriptor file path inside `dir`.
pub fn descriptor_path(dir: impl Into<PathBuf>) -> PathBuf {
    dir.into().join(DESCRIPTOR_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updater_config_keeps_paths_in_order() {
        let config =
            UpdaterConfig::new(vec!["b".to_string(), "a/...".to_string()], 5).unwrap();

        assert_eq!(config.paths, vec!["b".to_string(), "a/...".to_string()]);
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
    }

    #[test]
    fn updater_config_rejects_empty_paths() {
        assert_eq!(
            UpdaterConfig::new(vec![], DEFAULT_FETCH_TIMEOUT_SECS),
            Err(ConfigError::NoPaths)
        );
    }

    #[test]
    fn updater_config_rejects_zero_timeout() {
        assert_eq!(
            UpdaterConfig::new(vec![".".to_string()], 0),
            Err(ConfigError::ZeroTimeout)
        );
    }

    #[test]
    fn descriptor_path_appends_file_name() {
        assert_eq!(
            descriptor_path("/repo/components/app"),
            PathBuf::from("/repo/components/app/component-descriptor.yaml")
        );
    }
}
