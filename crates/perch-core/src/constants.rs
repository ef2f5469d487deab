//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

/// Placement defaults
pub mod placement {
    /// Half-width of the arrow triangle
    pub const DEFAULT_ARROW_THICKNESS: f32 = 6.0;
}

/// Popover appearance defaults
pub mod style {
    /// Panel background colour token, also used to tint the arrow
    pub const DEFAULT_BACKGROUND: &str = "white";
}

/// Filesystem layout
pub mod paths {
    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".perch";

    /// Config file name inside the config directory
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Logs subdirectory name
    pub const LOGS_DIR_NAME: &str = "logs";
}
