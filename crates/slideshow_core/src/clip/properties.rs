//! Slideshow clip settings and their producer properties.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{ClipError, ClipResult};
use crate::animation::{generate_geometry, AnimatedGeometry};
use crate::models::{AnimationPreset, ResolvedSequence, SequenceSpec};
use crate::sequence::{spec_from_resource, SequenceResult};

/// Default luma softness, in percent.
const DEFAULT_SOFTNESS: u32 = 5;

/// Everything the slideshow dialog hands to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideshowClip {
    /// Clip name shown in the project bin.
    pub name: String,
    /// Canonical resource string of the image sequence.
    pub resource: String,
    /// Frames each image stays on screen.
    pub ttl: u32,
    /// Restart from the first image after the last.
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Crop images to the frame instead of letterboxing.
    pub crop: bool,
    /// Crossfade between images.
    pub fade: bool,
    /// Crossfade length in frames.
    pub luma_duration: u32,
    /// Wipe pattern used for the crossfade.
    pub luma_file: Option<String>,
    /// Edge softness of the wipe, in percent.
    pub softness: u32,
    /// Pan/zoom animation.
    pub animation: AnimationPreset,
}

impl SlideshowClip {
    /// New clip over a resolved sequence with default options.
    pub fn new(name: impl Into<String>, sequence: &ResolvedSequence, ttl: u32) -> Self {
        Self {
            name: name.into(),
            resource: sequence.canonical_path.clone(),
            ttl,
            looping: false,
            crop: false,
            fade: false,
            luma_duration: 0,
            luma_file: None,
            softness: DEFAULT_SOFTNESS,
            animation: AnimationPreset::None,
        }
    }

    /// Sequence spec encoded in the resource string.
    pub fn spec(&self) -> SequenceResult<SequenceSpec> {
        spec_from_resource(&self.resource)
    }

    /// Animation geometry for this clip's ttl.
    pub fn geometry(&self) -> AnimatedGeometry {
        generate_geometry(self.animation, self.ttl)
    }

    /// Luma file, only when fading is enabled.
    pub fn effective_luma_file(&self) -> Option<&str> {
        if self.fade {
            self.luma_file.as_deref()
        } else {
            None
        }
    }

    /// Producer properties, as string key/values.
    ///
    /// Empty optional values (no luma file, no animation) are left out.
    pub fn to_properties(&self) -> BTreeMap<String, String> {
        let mut props = BTreeMap::new();
        props.insert("resource".to_string(), self.resource.clone());
        props.insert("name".to_string(), self.name.clone());
        props.insert("ttl".to_string(), self.ttl.to_string());
        props.insert("loop".to_string(), flag(self.looping));
        props.insert("crop".to_string(), flag(self.crop));
        props.insert("fade".to_string(), flag(self.fade));
        props.insert("luma_duration".to_string(), self.luma_duration.to_string());
        props.insert("softness".to_string(), self.softness.to_string());
        if let Some(luma) = self.effective_luma_file() {
            props.insert("luma_file".to_string(), luma.to_string());
        }
        if self.animation != AnimationPreset::None {
            props.insert("animation".to_string(), self.animation.as_str().to_string());
        }
        props
    }

    /// Read a clip back from producer properties.
    ///
    /// Missing keys fall back to defaults; malformed values are errors.
    pub fn from_properties(props: &BTreeMap<String, String>) -> ClipResult<Self> {
        let get = |key: &str| props.get(key).map(String::as_str);

        let animation = match get("animation") {
            Some(value) => {
                AnimationPreset::from_str(value).map_err(|_| invalid("animation", value))?
            }
            None => AnimationPreset::None,
        };

        Ok(Self {
            name: get("name").unwrap_or_default().to_string(),
            resource: get("resource").unwrap_or_default().to_string(),
            ttl: parse_int(props, "ttl", 0)?,
            looping: parse_int(props, "loop", 0)? != 0,
            crop: parse_int(props, "crop", 0)? != 0,
            fade: parse_int(props, "fade", 0)? != 0,
            luma_duration: parse_int(props, "luma_duration", 0)?,
            luma_file: get("luma_file")
                .filter(|v| !v.is_empty())
                .map(str::to_string),
            softness: parse_int(props, "softness", DEFAULT_SOFTNESS)?,
            animation,
        })
    }
}

fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

fn invalid(key: &str, value: &str) -> ClipError {
    ClipError::InvalidProperty {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_int(props: &BTreeMap<String, String>, key: &str, default: u32) -> ClipResult<u32> {
    match props.get(key) {
        Some(value) if value.trim().is_empty() => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| invalid(key, value)),
        None => Ok(default),
    }
}
