//! Sequence description and resolution result.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::SelectionMethod;

/// Describes which files make up a slideshow.
///
/// Mime specs only use `folder` and `extension`. Pattern specs are built by
/// [`crate::sequence::parse_pattern`], which derives `precision` and
/// `first_frame` once from the literal path the user picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceSpec {
    /// Selection method.
    pub method: SelectionMethod,
    /// Directory searched for images.
    pub folder: PathBuf,
    /// Extension without the leading dot.
    pub extension: String,
    /// Literal text before the numeric suffix (pattern mode).
    #[serde(default)]
    pub pattern_prefix: String,
    /// Number of digits in the zero-padded suffix (pattern mode).
    #[serde(default)]
    pub precision: usize,
    /// First numeric index (pattern mode).
    #[serde(default)]
    pub first_frame: u32,
    /// Lowest index accepted in the result, from a `?<offset>` suffix.
    #[serde(default)]
    pub offset: Option<u32>,
}

impl SequenceSpec {
    /// Spec matching every `*.<extension>` file in `folder`.
    pub fn mime(folder: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            method: SelectionMethod::Mime,
            folder: folder.into(),
            extension: extension.into(),
            pattern_prefix: String::new(),
            precision: 0,
            first_frame: 0,
            offset: None,
        }
    }

    /// Whether this spec selects by extension.
    pub fn is_mime(&self) -> bool {
        self.method == SelectionMethod::Mime
    }

    /// File name of the frame with the given index (pattern mode).
    ///
    /// Indices wider than `precision` are written in full.
    pub fn frame_file_name(&self, index: u32) -> String {
        let digits = index.to_string();
        let padding = self.precision.saturating_sub(digits.len());
        format!(
            "{}{}{}.{}",
            self.pattern_prefix,
            "0".repeat(padding),
            digits,
            self.extension
        )
    }

    /// Full path of the frame with the given index (pattern mode).
    pub fn frame_path(&self, index: u32) -> PathBuf {
        self.folder.join(self.frame_file_name(index))
    }

    /// Whether `index` passes the offset floor.
    pub fn accepts_index(&self, index: u32) -> bool {
        self.offset.map_or(true, |floor| index >= floor)
    }
}

/// Outcome of resolving a [`SequenceSpec`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSequence {
    /// Resource string stored on the clip; reopening it yields the same spec.
    pub canonical_path: String,
    /// Matched image files, in playback order.
    pub files: Vec<PathBuf>,
}

impl ResolvedSequence {
    /// Number of matched images.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if nothing matched; callers should refuse to create the clip.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// First matched image, used for previews.
    pub fn first(&self) -> Option<&Path> {
        self.files.first().map(PathBuf::as_path)
    }
}
