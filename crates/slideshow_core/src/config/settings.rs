//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::clip::{ClipDuration, ClipResult, Timecode};
use crate::logging::LogLevel;
use crate::models::{ImageType, SelectionMethod};
use crate::sequence::{ResolverOptions, DEFAULT_MAX_GAP};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Slideshow dialog defaults and resolver tuning.
    #[serde(default)]
    pub slideshow: SlideshowSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Slideshow defaults.
///
/// Passed explicitly to whatever needs them; nothing reads settings from
/// global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideshowSettings {
    /// Select images by extension (true) or by filename pattern (false).
    #[serde(default = "default_true")]
    pub by_mime: bool,

    /// Generate thumbnails for matched images.
    #[serde(default)]
    pub show_thumbs: bool,

    /// Default display duration of a still image.
    #[serde(default = "default_image_duration")]
    pub image_duration: String,

    /// Default display duration of a sequence frame.
    #[serde(default = "default_sequence_duration")]
    pub sequence_duration: String,

    /// Extension preselected in mime mode.
    #[serde(default)]
    pub image_type: ImageType,

    /// Folder of the last slideshow.
    #[serde(default)]
    pub last_folder: String,

    /// Consecutive missing frames that end a pattern sequence.
    #[serde(default = "default_max_gap")]
    pub max_gap: u32,

    /// Extra folders searched for luma transition files.
    #[serde(default)]
    pub luma_folders: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_image_duration() -> String {
    "00:00:05:00".to_string()
}

fn default_sequence_duration() -> String {
    "00:00:00:01".to_string()
}

fn default_max_gap() -> u32 {
    DEFAULT_MAX_GAP
}

impl Default for SlideshowSettings {
    fn default() -> Self {
        Self {
            by_mime: true,
            show_thumbs: false,
            image_duration: default_image_duration(),
            sequence_duration: default_sequence_duration(),
            image_type: ImageType::default(),
            last_folder: String::new(),
            max_gap: default_max_gap(),
            luma_folders: Vec::new(),
        }
    }
}

impl SlideshowSettings {
    /// Preferred selection method.
    pub fn method(&self) -> SelectionMethod {
        if self.by_mime {
            SelectionMethod::Mime
        } else {
            SelectionMethod::Pattern
        }
    }

    /// Default per-image duration for a selection method.
    pub fn default_duration(&self, method: SelectionMethod) -> ClipDuration {
        let value = match method {
            SelectionMethod::Mime => &self.image_duration,
            SelectionMethod::Pattern => &self.sequence_duration,
        };
        ClipDuration::Timecode(value.clone())
    }

    /// Default per-image duration in frames.
    pub fn default_ttl(&self, method: SelectionMethod, tc: &Timecode) -> ClipResult<u32> {
        self.default_duration(method).to_frames(tc)
    }

    /// Resolver options derived from these settings.
    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            max_gap: self.max_gap,
        }
    }

    /// Luma folders as paths.
    pub fn luma_paths(&self) -> Vec<PathBuf> {
        self.luma_folders.iter().map(PathBuf::from).collect()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum level when `RUST_LOG` is not set.
    #[serde(default)]
    pub level: LogLevel,

    /// Include the module target in log lines.
    #[serde(default = "default_true")]
    pub with_target: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            with_target: true,
        }
    }
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Slideshow,
    Logging,
}

impl ConfigSection {
    /// All sections, in file order.
    pub const ALL: [ConfigSection; 2] = [ConfigSection::Slideshow, ConfigSection::Logging];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Slideshow => "slideshow",
            ConfigSection::Logging => "logging",
        }
    }

    /// Comment written above the section in a fresh config file.
    pub(crate) fn comment(&self) -> &'static str {
        match self {
            ConfigSection::Slideshow => "# Slideshow clip defaults",
            ConfigSection::Logging => "# Logging configuration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[slideshow]"));
        assert!(toml.contains("[logging]"));
        assert!(toml.contains("image_duration"));
    }

    #[test]
    fn settings_round_trip() {
        let mut settings = Settings::default();
        settings.slideshow.image_type = ImageType::Png;
        settings.slideshow.luma_folders = vec!["/usr/share/lumas".to_string()];
        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.slideshow.image_type, ImageType::Png);
        assert_eq!(parsed.slideshow.luma_folders, settings.slideshow.luma_folders);
        assert_eq!(parsed.logging.level, settings.logging.level);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[slideshow]\nby_mime = false";
        let parsed: Settings = toml::from_str(minimal).unwrap();
        // Custom value preserved
        assert!(!parsed.slideshow.by_mime);
        // Defaults applied for missing
        assert_eq!(parsed.slideshow.max_gap, 100);
        assert_eq!(parsed.slideshow.image_duration, "00:00:05:00");
        assert!(parsed.logging.with_target);
    }

    #[test]
    fn durations_follow_selection_method() {
        let settings = SlideshowSettings::default();
        let tc = Timecode::new(25.0).unwrap();
        assert_eq!(settings.method(), SelectionMethod::Mime);
        assert_eq!(settings.default_ttl(SelectionMethod::Mime, &tc).unwrap(), 125);
        assert_eq!(settings.default_ttl(SelectionMethod::Pattern, &tc).unwrap(), 1);
        assert_eq!(settings.resolver_options().max_gap, 100);
    }
}
