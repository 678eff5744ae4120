//! Shared configuration utilities
//!
//! - Generic YAML config loading/saving
//! - Standard config file locations
//!
//! # Usage
//!
//! ```ignore
//! use pathview_core::config::{load_config, save_config, default_config_path};
//!
//! let path = default_config_path("pathview-player");
//! let config: MyAppConfig = load_config(&path);
//! save_config(&config, &path)?;
//! ```

mod io;
mod paths;

pub use io::{load_config, save_config, try_load_config};
pub use paths::{default_config_dir, default_config_path};
