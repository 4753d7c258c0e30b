//! Geometry keyframes and their string form.
//!
//! A keyframe is written `frame=x/y:w%xh%`. Offsets are percentages of the
//! frame size; a zero offset is written as a bare `0`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position and scale of the image at a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Framing {
    /// Horizontal offset in percent.
    pub x: i32,
    /// Vertical offset in percent.
    pub y: i32,
    /// Width in percent.
    pub width: u32,
    /// Height in percent.
    pub height: u32,
}

impl Framing {
    /// Framing offset by `(x, y)` and scaled uniformly.
    pub const fn new(x: i32, y: i32, scale: u32) -> Self {
        Self {
            x,
            y,
            width: scale,
            height: scale,
        }
    }
}

/// A framing pinned to a frame offset within the clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Frame offset from the start of the clip.
    pub frame: u32,
    #[serde(flatten)]
    pub framing: Framing,
}

impl Keyframe {
    pub fn new(frame: u32, framing: Framing) -> Self {
        Self { frame, framing }
    }
}

impl fmt::Display for Keyframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}/{}:{}%x{}%",
            self.frame,
            Offset(self.framing.x),
            Offset(self.framing.y),
            self.framing.width,
            self.framing.height
        )
    }
}

struct Offset(i32);

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            write!(f, "0")
        } else {
            write!(f, "{}%", self.0)
        }
    }
}
