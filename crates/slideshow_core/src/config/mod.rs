//! Configuration management for the slideshow core.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Defaults for every missing key
//!
//! # Example
//!
//! ```no_run
//! use slideshow_core::config::{ConfigManager, ConfigSection};
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/slideshow.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! println!("Gap tolerance: {}", config.settings().slideshow.max_gap);
//!
//! // Modify a setting
//! config.settings_mut().slideshow.show_thumbs = true;
//!
//! // Save just the slideshow section atomically
//! config.update_section(ConfigSection::Slideshow).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, LoggingSettings, Settings, SlideshowSettings};
