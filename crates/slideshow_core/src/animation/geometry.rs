//! Pan/zoom geometry generation for slideshow animations.
//!
//! Each preset is a fixed list of framings placed on phase boundaries.
//! With `ttl` frames per phase the boundaries are `0, ttl-1, ttl,
//! 2*ttl-1, 2*ttl, ...`, so the last frame of one phase and the first frame
//! of the next sit next to each other.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::keyframe::{Framing, Keyframe};
use crate::models::AnimationPreset;

const PAN: [Framing; 8] = [
    Framing::new(-5, -5, 110),
    Framing::new(0, 0, 110),
    Framing::new(0, 0, 110),
    Framing::new(0, -5, 110),
    Framing::new(0, -5, 110),
    Framing::new(-5, -5, 110),
    Framing::new(0, -5, 110),
    Framing::new(-5, 0, 110),
];

const PAN_AND_ZOOM: [Framing; 6] = [
    Framing::new(0, 0, 100),
    Framing::new(-14, -14, 120),
    Framing::new(-5, -5, 110),
    Framing::new(0, 0, 110),
    Framing::new(0, -5, 110),
    Framing::new(-5, 0, 110),
];

const ZOOM: [Framing; 2] = [Framing::new(0, 0, 100), Framing::new(-14, -14, 120)];

/// Keyframe geometry plus the effective duration it covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimatedGeometry {
    /// Keyframes, starting with the frame-0 origin. Empty for no animation.
    pub keyframes: Vec<Keyframe>,
    /// Per-image duration multiplied by the preset's phase count.
    pub ttl: u32,
}

impl AnimatedGeometry {
    /// True when the preset has no animation.
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Geometry string, `frame=x/y:w%xh%` keyframes joined by `;`.
    pub fn geometry(&self) -> String {
        self.to_string()
    }

    /// Frame offsets of the keyframes after the frame-0 origin.
    pub fn boundary_frames(&self) -> Vec<u32> {
        self.keyframes.iter().skip(1).map(|kf| kf.frame).collect()
    }
}

impl fmt::Display for AnimatedGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kf) in self.keyframes.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{}", kf)?;
        }
        Ok(())
    }
}

/// Generate the keyframe geometry of `preset` for images shown `ttl` frames.
///
/// Returns the geometry and the adjusted ttl (`ttl * phases`). Animated
/// presets treat a ttl of 0 as 1; `None` passes the ttl through untouched.
///
/// # Examples
///
/// ```
/// use slideshow_core::animation::generate_geometry;
/// use slideshow_core::models::AnimationPreset;
///
/// let zoom = generate_geometry(AnimationPreset::Zoom, 25);
/// assert_eq!(zoom.geometry(), "0=0/0:100%x100%;24=-14%/-14%:120%x120%");
/// assert_eq!(zoom.ttl, 25);
/// ```
pub fn generate_geometry(preset: AnimationPreset, ttl: u32) -> AnimatedGeometry {
    let framings: &[Framing] = match preset.base() {
        AnimationPreset::Pan => &PAN,
        AnimationPreset::PanAndZoom => &PAN_AND_ZOOM,
        AnimationPreset::Zoom => &ZOOM,
        _ => {
            return AnimatedGeometry {
                keyframes: Vec::new(),
                ttl,
            }
        }
    };

    let ttl = ttl.max(1);
    let phases = preset.phase_count();
    let keyframes = phase_boundaries(ttl, phases)
        .into_iter()
        .zip(framings.iter().copied())
        .map(|(frame, framing)| Keyframe::new(frame, framing))
        .collect();

    tracing::trace!("Generated {} geometry for ttl {}", preset, ttl);

    AnimatedGeometry {
        keyframes,
        ttl: ttl.saturating_mul(phases),
    }
}

/// `0`, then the last and first frame of each phase, ending on the last
/// frame of the final phase.
fn phase_boundaries(ttl: u32, phases: u32) -> Vec<u32> {
    let mut frames = vec![0];
    for phase in 1..=phases {
        let end = ttl.saturating_mul(phase);
        frames.push(end - 1);
        if phase < phases {
            frames.push(end);
        }
    }
    frames
}
