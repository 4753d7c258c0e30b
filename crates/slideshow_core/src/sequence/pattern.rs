//! Sequence pattern parsing and canonical resource strings.
//!
//! Two string forms are understood:
//!
//! - an example file picked by the user: `/shots/img0005.png`, optionally
//!   followed by `?<offset>` or `?begin:<offset>`
//! - the canonical form written back to the clip:
//!   `/shots/img%04d.png?begin:5`
//!
//! Mime selections are stored as `<folder>/.all.<ext>`.
//!
//! # Example
//!
//! ```
//! use slideshow_core::sequence::{canonical_pattern_path, parse_pattern};
//!
//! let spec = parse_pattern("/shots/img0005.png").unwrap();
//! assert_eq!(spec.pattern_prefix, "img");
//! assert_eq!(spec.precision, 4);
//! assert_eq!(spec.first_frame, 5);
//! assert_eq!(canonical_pattern_path(&spec), "/shots/img%04d.png?begin:5");
//! ```

use std::path::{Path, MAIN_SEPARATOR};

use super::error::{SequenceError, SequenceResult};
use crate::models::{SelectionMethod, SequenceSpec};

/// File name prefix marking a mime selection.
pub const MIME_MARKER: &str = ".all.";

/// Query key carrying the first frame in canonical patterns.
const BEGIN_KEY: &str = "begin:";

/// Widest zero padding accepted for the frame number.
pub const MAX_PRECISION: usize = 32;

/// Parse a pattern-mode path into a [`SequenceSpec`].
///
/// Accepts both an example file name and the canonical `%0Nd` form.
pub fn parse_pattern(input: &str) -> SequenceResult<SequenceSpec> {
    let (path_part, offset) = split_query(input);

    let path = Path::new(path_part);
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SequenceError::invalid_pattern(input, "missing file name"))?;

    let (stem, extension) = match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() => (&file_name[..dot], &file_name[dot + 1..]),
        _ => {
            return Err(SequenceError::invalid_pattern(
                input,
                "missing extension separator",
            ))
        }
    };

    let folder = path.parent().map(Path::to_path_buf).unwrap_or_default();

    if let Some((prefix, precision)) = split_printf_suffix(stem) {
        check_precision(input, precision)?;
        // Canonical form: the begin query is the first frame
        let first_frame = offset.unwrap_or(0);
        return Ok(SequenceSpec {
            method: SelectionMethod::Pattern,
            folder,
            extension: extension.to_string(),
            pattern_prefix: prefix.to_string(),
            precision,
            first_frame,
            offset,
        });
    }

    let (prefix, digits) = split_trailing_digits(stem);
    if digits.is_empty() {
        return Err(SequenceError::no_numeric_suffix(input));
    }
    check_precision(input, digits.len())?;
    let first_frame = digits
        .parse::<u32>()
        .map_err(|_| SequenceError::invalid_pattern(input, "frame index out of range"))?;

    Ok(SequenceSpec {
        method: SelectionMethod::Pattern,
        folder,
        extension: extension.to_string(),
        pattern_prefix: prefix.to_string(),
        precision: digits.len(),
        first_frame,
        offset,
    })
}

/// Canonical resource string for a mime selection: `<folder>/.all.<ext>`.
pub fn canonical_mime_path(folder: &Path, extension: &str) -> String {
    format!("{}{}{}", folder_prefix(folder), MIME_MARKER, extension)
}

/// Canonical resource string for a pattern selection.
///
/// `<folder>/<prefix>%0<precision>d.<ext>`, with `?begin:<first>` appended
/// when the sequence does not start at zero.
///
/// An offset floor is not kept: `img0005.png?10` becomes
/// `img%04d.png?begin:5`, which reopens starting at frame 5.
pub fn canonical_pattern_path(spec: &SequenceSpec) -> String {
    let mut out = format!(
        "{}{}%0{}d.{}",
        folder_prefix(&spec.folder),
        spec.pattern_prefix,
        spec.precision,
        spec.extension
    );
    if spec.first_frame > 0 {
        out.push('?');
        out.push_str(BEGIN_KEY);
        out.push_str(&spec.first_frame.to_string());
    }
    out
}

/// Canonical resource string for any spec.
pub fn canonical_path(spec: &SequenceSpec) -> String {
    match spec.method {
        SelectionMethod::Mime => canonical_mime_path(&spec.folder, &spec.extension),
        SelectionMethod::Pattern => canonical_pattern_path(spec),
    }
}

/// Rebuild the spec of a stored slideshow resource.
///
/// A file name starting with `.all.` is a mime selection, anything else is
/// parsed as a pattern.
pub fn spec_from_resource(resource: &str) -> SequenceResult<SequenceSpec> {
    let (path_part, _) = split_query(resource);
    let path = Path::new(path_part);
    let mime_ext = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_prefix(MIME_MARKER));

    match mime_ext {
        Some(ext) if !ext.is_empty() => Ok(SequenceSpec::mime(
            path.parent().map(Path::to_path_buf).unwrap_or_default(),
            ext,
        )),
        Some(_) => Err(SequenceError::invalid_pattern(
            resource,
            "missing extension after .all.",
        )),
        None => parse_pattern(resource),
    }
}

/// Extract the frame number from a file name's trailing digits.
///
/// The extension is ignored. Returns 0 when there are no trailing digits or
/// the number does not fit.
pub fn get_frame_number_from_path(path: impl AsRef<Path>) -> u32 {
    let stem = match path.as_ref().file_stem().and_then(|s| s.to_str()) {
        Some(s) => s,
        None => return 0,
    };
    let (_, digits) = split_trailing_digits(stem);
    digits.parse().unwrap_or(0)
}

/// Split `input` at its `?` and parse the offset after it.
///
/// Both `?10` and `?begin:10` yield `Some(10)`; anything unparseable is
/// treated as no offset.
fn split_query(input: &str) -> (&str, Option<u32>) {
    match input.split_once('?') {
        Some((path, query)) => {
            let value = query.rsplit(':').next().unwrap_or(query);
            (path, value.trim().parse::<u32>().ok())
        }
        None => (input, None),
    }
}

/// Split a stem into `(prefix, trailing digits)`.
pub(crate) fn split_trailing_digits(stem: &str) -> (&str, &str) {
    let digit_start = stem
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map_or(stem.len(), |(i, _)| i);
    stem.split_at(digit_start)
}

/// Recognise a `prefix%0Nd` stem, returning the prefix and `N`.
///
/// A width too large for `usize` saturates so the caller rejects it.
fn split_printf_suffix(stem: &str) -> Option<(&str, usize)> {
    let body = stem.strip_suffix('d')?;
    let percent = body.rfind('%')?;
    let spec = &body[percent + 1..];
    let width = spec.strip_prefix('0')?;
    if width.is_empty() || !width.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((&stem[..percent], width.parse().unwrap_or(usize::MAX)))
}

fn check_precision(input: &str, precision: usize) -> SequenceResult<()> {
    if precision > MAX_PRECISION {
        return Err(SequenceError::invalid_pattern(
            input,
            format!("frame number padding wider than {} digits", MAX_PRECISION),
        ));
    }
    Ok(())
}

/// Folder as a string with a trailing separator; empty for no folder.
fn folder_prefix(folder: &Path) -> String {
    let mut out = folder.to_string_lossy().into_owned();
    if !out.is_empty() && !out.ends_with(MAIN_SEPARATOR) && !out.ends_with('/') {
        out.push(MAIN_SEPARATOR);
    }
    out
}
