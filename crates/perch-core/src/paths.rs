//! Well-known filesystem locations

use std::path::PathBuf;

use crate::constants::paths::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, LOGS_DIR_NAME};

/// Base config directory (~/.perch)
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Default config file (~/.perch/config.toml)
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Log directory (~/.perch/logs)
pub fn logs_dir() -> PathBuf {
    config_dir().join(LOGS_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_nest_under_config_dir() {
        let base = config_dir();
        assert!(base.ends_with(CONFIG_DIR_NAME));
        assert!(config_file().starts_with(&base));
        assert!(logs_dir().starts_with(&base));
    }
}
