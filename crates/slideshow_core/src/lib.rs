//! Slideshow core - image sequence and animation logic for slideshow clips
//!
//! This crate contains the logic behind a video editor's slideshow dialog
//! with zero UI dependencies:
//! - `sequence`: resolve a folder or filename pattern into ordered images
//! - `animation`: pan/zoom keyframe geometry for a per-image duration
//! - `clip`: clip options, durations and producer properties
//! - `config` / `logging`: settings file and tracing setup

pub mod animation;
pub mod clip;
pub mod config;
pub mod logging;
pub mod models;
pub mod sequence;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
