//! Slideshow clip settings.
//!
//! This module provides:
//! - `Timecode` / `ClipDuration`: durations as `hh:mm:ss:ff` or frames
//! - `SlideshowClip`: clip options and their producer properties

mod error;
mod properties;
mod timecode;

pub use error::{ClipError, ClipResult};
pub use properties::SlideshowClip;
pub use timecode::{ClipDuration, Timecode};
