//! Image sequence resolution for slideshow clips.
//!
//! This module provides:
//! - `parse_pattern` / `spec_from_resource`: read user paths and stored
//!   resources into a [`SequenceSpec`](crate::models::SequenceSpec)
//! - `SequenceResolver`: match files in mime or pattern mode
//! - Canonical resource strings (`<folder>/.all.<ext>`,
//!   `<folder>/<prefix>%0Nd.<ext>?begin:N`)
//! - Folder previews and luma file discovery
//!
//! # Example
//!
//! ```no_run
//! use slideshow_core::models::SequenceSpec;
//! use slideshow_core::sequence::{ResolverOptions, SequenceResolver};
//!
//! let resolver = SequenceResolver::new(ResolverOptions::default());
//!
//! let photos = resolver.resolve(&SequenceSpec::mime("/photos", "jpg"));
//! println!("{} -> {} images", photos.canonical_path, photos.len());
//!
//! let frames = resolver.resolve_pattern("/renders/shot_0001.png").unwrap();
//! println!("{} -> {} frames", frames.canonical_path, frames.len());
//! ```

mod error;
mod fs;
mod pattern;
mod preview;
mod resolver;

pub use error::{SequenceError, SequenceResult};
pub use fs::{LocalFs, SequenceFs};
pub use pattern::{
    canonical_mime_path, canonical_path, canonical_pattern_path, get_frame_number_from_path,
    parse_pattern, spec_from_resource, MAX_PRECISION, MIME_MARKER,
};
pub use preview::{find_luma_files, preview_pattern_matches};
pub use resolver::{resolve, ResolverOptions, SequenceResolver, DEFAULT_MAX_GAP};
