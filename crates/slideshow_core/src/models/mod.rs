//! Data models for the slideshow core.
//!
//! - Enums for selection method, animation presets and image types
//! - Sequence specs and resolution results

mod enums;
mod sequence;

// Re-export all public types
pub use enums::{AnimationPreset, ImageType, SelectionMethod};
pub use sequence::{ResolvedSequence, SequenceSpec};
