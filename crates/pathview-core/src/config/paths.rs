//! Standard locations for configuration files

use std::path::PathBuf;

/// Get the config directory for an app
///
/// Returns: `~/.config/{app_name}` (platform config dir, falling back to the
/// home directory, then the working directory)
pub fn default_config_dir(app_name: &str) -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join(app_name)
}

/// Get the default config file path for an app
///
/// Returns: `~/.config/{app_name}/config.yaml`
pub fn default_config_path(app_name: &str) -> PathBuf {
    default_config_dir(app_name).join("config.yaml")
}
