//! Pan and zoom animation for slideshow clips.
//!
//! [`generate_geometry`] turns an [`AnimationPreset`](crate::models::AnimationPreset)
//! and a per-image duration into a keyframe geometry string for the
//! renderer's affine transform, along with the stretched duration.

mod geometry;
mod keyframe;

pub use geometry::{generate_geometry, AnimatedGeometry};
pub use keyframe::{Framing, Keyframe};
