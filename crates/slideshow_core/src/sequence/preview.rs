//! Folder listings used to preview a selection before the clip is created.

use std::path::{Path, PathBuf};

use super::error::SequenceResult;
use super::fs::SequenceFs;
use super::pattern::parse_pattern;

/// Luma transition files are grayscale PGM or PNG images.
const LUMA_EXTENSIONS: [&str; 2] = ["pgm", "png"];

/// Files in the pattern's folder named `<prefix><digits>.<ext>`.
///
/// Unlike probing, this lists the folder once and accepts any digit count,
/// so it also shows frames outside the gap window. Frames below the
/// pattern's offset are skipped. Sorted by file name.
pub fn preview_pattern_matches<F: SequenceFs>(
    fs: &F,
    pattern: &str,
) -> SequenceResult<Vec<PathBuf>> {
    let spec = parse_pattern(pattern)?;
    let folder = if spec.folder.as_os_str().is_empty() {
        Path::new(".")
    } else {
        spec.folder.as_path()
    };

    if !fs.is_dir(folder) {
        return Ok(Vec::new());
    }

    let listing = match fs.list_files(folder) {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!("Failed to list {}: {}", folder.display(), e);
            return Ok(Vec::new());
        }
    };

    let suffix = format!(".{}", spec.extension);
    let mut matches: Vec<PathBuf> = listing
        .into_iter()
        .filter(|path| {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                return false;
            };
            let Some(digits) = name
                .strip_prefix(spec.pattern_prefix.as_str())
                .and_then(|rest| rest.strip_suffix(suffix.as_str()))
            else {
                return false;
            };
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return false;
            }
            digits
                .parse::<u32>()
                .map(|index| spec.accepts_index(index))
                .unwrap_or(false)
        })
        .collect();

    matches.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(matches)
}

/// Luma transition files (`*.pgm`, `*.png`) found in the given folders.
///
/// Folders are scanned in order and each folder's files are sorted by name.
/// Missing folders are skipped.
pub fn find_luma_files<F: SequenceFs>(fs: &F, folders: &[PathBuf]) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for folder in folders {
        if !fs.is_dir(folder) {
            tracing::debug!("Luma folder not found: {}", folder.display());
            continue;
        }
        let mut files = match fs.list_files(folder) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!("Failed to list luma folder {}: {}", folder.display(), e);
                continue;
            }
        };
        files.retain(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| LUMA_EXTENSIONS.contains(&ext))
        });
        files.sort();
        found.extend(files);
    }
    found
}
