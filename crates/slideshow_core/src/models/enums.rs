//! Core enums used throughout the slideshow core.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the images of a slideshow are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMethod {
    /// Every file with a given extension inside a folder.
    #[default]
    Mime,
    /// Files following a numeric filename template.
    Pattern,
}

impl std::fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionMethod::Mime => write!(f, "mime"),
            SelectionMethod::Pattern => write!(f, "pattern"),
        }
    }
}

/// Pan/zoom animation applied across the images of a slideshow.
///
/// The low-pass variants produce the same geometry as their base preset;
/// they only ask the renderer for a filtered interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnimationPreset {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "Pan")]
    Pan,
    #[serde(rename = "Pan, low-pass")]
    PanLowPass,
    #[serde(rename = "Pan and zoom")]
    PanAndZoom,
    #[serde(rename = "Pan and zoom, low-pass")]
    PanAndZoomLowPass,
    #[serde(rename = "Zoom")]
    Zoom,
    #[serde(rename = "Zoom, low-pass")]
    ZoomLowPass,
}

impl AnimationPreset {
    /// All presets in the order they are offered to the user.
    pub const ALL: [AnimationPreset; 7] = [
        AnimationPreset::None,
        AnimationPreset::Pan,
        AnimationPreset::PanLowPass,
        AnimationPreset::PanAndZoom,
        AnimationPreset::PanAndZoomLowPass,
        AnimationPreset::Zoom,
        AnimationPreset::ZoomLowPass,
    ];

    /// Name stored in the producer's `animation` property.
    ///
    /// `None` is stored as an empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationPreset::None => "",
            AnimationPreset::Pan => "Pan",
            AnimationPreset::PanLowPass => "Pan, low-pass",
            AnimationPreset::PanAndZoom => "Pan and zoom",
            AnimationPreset::PanAndZoomLowPass => "Pan and zoom, low-pass",
            AnimationPreset::Zoom => "Zoom",
            AnimationPreset::ZoomLowPass => "Zoom, low-pass",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            AnimationPreset::None => "None",
            other => other.as_str(),
        }
    }

    /// Number of ttl-long phases one image cycle spans.
    pub fn phase_count(&self) -> u32 {
        match self {
            AnimationPreset::None | AnimationPreset::Zoom | AnimationPreset::ZoomLowPass => 1,
            AnimationPreset::PanAndZoom | AnimationPreset::PanAndZoomLowPass => 3,
            AnimationPreset::Pan | AnimationPreset::PanLowPass => 4,
        }
    }

    /// Whether the renderer should low-pass filter the animation.
    pub fn is_low_pass(&self) -> bool {
        matches!(
            self,
            AnimationPreset::PanLowPass
                | AnimationPreset::PanAndZoomLowPass
                | AnimationPreset::ZoomLowPass
        )
    }

    /// The preset with the low-pass hint removed.
    pub fn base(&self) -> AnimationPreset {
        match self {
            AnimationPreset::PanLowPass => AnimationPreset::Pan,
            AnimationPreset::PanAndZoomLowPass => AnimationPreset::PanAndZoom,
            AnimationPreset::ZoomLowPass => AnimationPreset::Zoom,
            other => *other,
        }
    }
}

impl std::fmt::Display for AnimationPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AnimationPreset {
    type Err = String;

    /// Accepts stored names ("Pan and zoom, low-pass") and the "None" label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Ok(AnimationPreset::None);
        }
        AnimationPreset::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("Unknown animation preset: '{}'", s))
    }
}

/// Image formats offered for mime-mode slideshows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    #[default]
    Jpg,
    Jpeg,
    Png,
    Svg,
    Bmp,
    Gif,
    Tga,
    Tif,
    Tiff,
    Exr,
}

impl ImageType {
    /// All supported image types, in display order.
    pub const ALL: [ImageType; 10] = [
        ImageType::Jpg,
        ImageType::Jpeg,
        ImageType::Png,
        ImageType::Svg,
        ImageType::Bmp,
        ImageType::Gif,
        ImageType::Tga,
        ImageType::Tif,
        ImageType::Tiff,
        ImageType::Exr,
    ];

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageType::Jpg => "jpg",
            ImageType::Jpeg => "jpeg",
            ImageType::Png => "png",
            ImageType::Svg => "svg",
            ImageType::Bmp => "bmp",
            ImageType::Gif => "gif",
            ImageType::Tga => "tga",
            ImageType::Tif => "tif",
            ImageType::Tiff => "tiff",
            ImageType::Exr => "exr",
        }
    }

    /// File-dialog style label, e.g. `PNG (*.png)`.
    pub fn label(&self) -> String {
        match self {
            ImageType::Exr => "Open EXR (*.exr)".to_string(),
            other => format!(
                "{} (*.{})",
                other.extension().to_ascii_uppercase(),
                other.extension()
            ),
        }
    }

    /// Look up an image type by its extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        ImageType::ALL
            .into_iter()
            .find(|t| t.extension() == ext)
    }
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_counts_match_presets() {
        assert_eq!(AnimationPreset::None.phase_count(), 1);
        assert_eq!(AnimationPreset::Pan.phase_count(), 4);
        assert_eq!(AnimationPreset::PanLowPass.phase_count(), 4);
        assert_eq!(AnimationPreset::PanAndZoom.phase_count(), 3);
        assert_eq!(AnimationPreset::Zoom.phase_count(), 1);
    }

    #[test]
    fn preset_parses_stored_names() {
        for preset in AnimationPreset::ALL {
            assert_eq!(preset.as_str().parse::<AnimationPreset>().unwrap(), preset);
        }
        assert_eq!("None".parse::<AnimationPreset>().unwrap(), AnimationPreset::None);
        assert!("Spin".parse::<AnimationPreset>().is_err());
    }

    #[test]
    fn low_pass_base_is_plain_preset() {
        assert!(AnimationPreset::ZoomLowPass.is_low_pass());
        assert_eq!(AnimationPreset::ZoomLowPass.base(), AnimationPreset::Zoom);
        assert!(!AnimationPreset::Pan.is_low_pass());
    }

    #[test]
    fn preset_serializes_as_stored_name() {
        let json = serde_json::to_string(&AnimationPreset::PanAndZoomLowPass).unwrap();
        assert_eq!(json, "\"Pan and zoom, low-pass\"");
    }

    #[test]
    fn image_type_labels() {
        assert_eq!(ImageType::Png.label(), "PNG (*.png)");
        assert_eq!(ImageType::Exr.label(), "Open EXR (*.exr)");
        assert_eq!(ImageType::from_extension("tiff"), Some(ImageType::Tiff));
        assert_eq!(ImageType::from_extension("webp"), None);
    }
}
