//! Sequence resolution: turn a spec into the ordered list of images.

use std::path::{Path, PathBuf};

use super::error::SequenceResult;
use super::fs::{LocalFs, SequenceFs};
use super::pattern::{canonical_mime_path, canonical_pattern_path, parse_pattern};
use crate::models::{ResolvedSequence, SelectionMethod, SequenceSpec};

/// Consecutive missing indices after which pattern probing stops.
pub const DEFAULT_MAX_GAP: u32 = 100;

/// Options controlling resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Stop probing after this many consecutive missing indices (min 1).
    pub max_gap: u32,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            max_gap: DEFAULT_MAX_GAP,
        }
    }
}

/// Resolves [`SequenceSpec`]s against a filesystem.
///
/// Each call rebuilds its result from scratch; nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct SequenceResolver<F = LocalFs> {
    fs: F,
    options: ResolverOptions,
}

impl SequenceResolver<LocalFs> {
    /// Resolver on the local filesystem.
    pub fn new(options: ResolverOptions) -> Self {
        Self::with_fs(LocalFs, options)
    }
}

impl<F: SequenceFs> SequenceResolver<F> {
    /// Resolver on a custom filesystem.
    pub fn with_fs(fs: F, options: ResolverOptions) -> Self {
        Self { fs, options }
    }

    /// Get the resolver options.
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolve a spec into its canonical path and matched files.
    ///
    /// Never fails: a missing folder or no matches give an empty file list
    /// with a well-formed canonical path. Matched files are absolute; a
    /// relative folder is taken from the working directory. The canonical
    /// path keeps the folder as given.
    pub fn resolve(&self, spec: &SequenceSpec) -> ResolvedSequence {
        let result = match spec.method {
            SelectionMethod::Mime => self.resolve_mime(spec),
            SelectionMethod::Pattern => self.resolve_probe(spec),
        };
        tracing::debug!(
            "Resolved {} sequence {} -> {} file(s)",
            spec.method,
            result.canonical_path,
            result.files.len()
        );
        result
    }

    /// Parse a pattern-mode path and resolve it.
    pub fn resolve_pattern(&self, pattern: &str) -> SequenceResult<ResolvedSequence> {
        let spec = parse_pattern(pattern)?;
        Ok(self.resolve(&spec))
    }

    /// Every visible regular file in the folder with the wanted extension,
    /// sorted by file name.
    fn resolve_mime(&self, spec: &SequenceSpec) -> ResolvedSequence {
        let canonical_path = canonical_mime_path(&spec.folder, &spec.extension);
        let folder = absolute_folder(&spec.folder);
        let folder = folder.as_path();

        if !self.fs.is_dir(folder) {
            tracing::debug!("Slideshow folder does not exist: {}", folder.display());
            return ResolvedSequence {
                canonical_path,
                files: Vec::new(),
            };
        }

        let mut files = match self.fs.list_files(folder) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!("Failed to list {}: {}", folder.display(), e);
                Vec::new()
            }
        };
        files.retain(|path| !is_hidden(path) && has_extension(path, &spec.extension));
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        ResolvedSequence {
            canonical_path,
            files,
        }
    }

    /// Probe `prefix + index + ext` upward from the first frame until
    /// `max_gap` consecutive indices are missing.
    fn resolve_probe(&self, spec: &SequenceSpec) -> ResolvedSequence {
        let canonical_path = canonical_pattern_path(spec);
        let folder = absolute_folder(&spec.folder);
        let folder = folder.as_path();
        let mut files = Vec::new();

        if !self.fs.is_dir(folder) {
            tracing::debug!("Sequence folder does not exist: {}", folder.display());
            return ResolvedSequence {
                canonical_path,
                files,
            };
        }

        let max_gap = self.options.max_gap.max(1);
        let mut gap = 0;
        let mut index = spec.first_frame;

        while gap < max_gap {
            let path = folder.join(spec.frame_file_name(index));
            if self.fs.is_file(&path) {
                gap = 0;
                if spec.accepts_index(index) {
                    files.push(path);
                }
            } else {
                gap += 1;
            }

            index = match index.checked_add(1) {
                Some(next) => next,
                None => break,
            };
        }

        ResolvedSequence {
            canonical_path,
            files,
        }
    }
}

/// Resolve a spec on the local filesystem with default options.
pub fn resolve(spec: &SequenceSpec) -> ResolvedSequence {
    SequenceResolver::new(ResolverOptions::default()).resolve(spec)
}

/// The folder joined onto the working directory when relative.
///
/// A bare file name has an empty parent, which is the working directory.
fn absolute_folder(folder: &Path) -> PathBuf {
    if folder.is_absolute() {
        return folder.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) if folder.as_os_str().is_empty() => cwd,
        Ok(cwd) => cwd.join(folder),
        Err(e) => {
            tracing::warn!("Cannot read working directory: {}", e);
            if folder.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                folder.to_path_buf()
            }
        }
    }
}

/// Dotfiles stay out of mime selections.
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map_or(false, |n| n.starts_with('.'))
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::fs::memory::MemoryFs;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn names(result: &ResolvedSequence) -> Vec<String> {
        result
            .files
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn mime_counts_only_matching_extension() {
        let dir = tempdir().unwrap();
        for name in ["b.jpg", "a.jpg", "c.jpg", "notes.txt", "d.png"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("sub.jpg")).unwrap();

        let spec = SequenceSpec::mime(dir.path(), "jpg");
        let result = resolve(&spec);

        assert_eq!(names(&result), vec!["a.jpg", "b.jpg", "c.jpg"]);
        assert!(result.canonical_path.ends_with(".all.jpg"));
        assert!(result
            .files
            .iter()
            .all(|p| p.starts_with(dir.path())));
    }

    #[test]
    fn mime_extension_is_case_sensitive() {
        let fs = MemoryFs::with_files(["/p/a.JPG", "/p/b.jpg"]);
        let resolver = SequenceResolver::with_fs(&fs, ResolverOptions::default());
        let result = resolver.resolve(&SequenceSpec::mime("/p", "jpg"));
        assert_eq!(result.files, vec![PathBuf::from("/p/b.jpg")]);
    }

    #[test]
    fn mime_missing_folder_is_empty() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let result = resolve(&SequenceSpec::mime(&missing, "png"));
        assert!(result.is_empty());
        assert_eq!(
            result.canonical_path,
            format!("{}/.all.png", missing.display())
        );
    }

    #[test]
    fn pattern_stops_after_gap_of_one_hundred() {
        let dir = tempdir().unwrap();
        for i in 5..=9 {
            fs::write(dir.path().join(format!("img{:04}.png", i)), b"x").unwrap();
        }
        // Past the gap window, never reached
        fs::write(dir.path().join("img0110.png"), b"x").unwrap();

        let pattern = dir.path().join("img0005.png");
        let resolver = SequenceResolver::new(ResolverOptions::default());
        let result = resolver
            .resolve_pattern(pattern.to_str().unwrap())
            .unwrap();

        assert_eq!(result.len(), 5);
        assert_eq!(names(&result)[0], "img0005.png");
        assert_eq!(names(&result)[4], "img0009.png");
        assert!(result.canonical_path.ends_with("img%04d.png?begin:5"));
    }

    #[test]
    fn pattern_tolerates_sparse_frames() {
        let fs = MemoryFs::with_files(["/s/f01.png", "/s/f02.png", "/s/f50.png", "/s/f149.png"]);
        let resolver = SequenceResolver::with_fs(&fs, ResolverOptions::default());
        let result = resolver.resolve_pattern("/s/f01.png").unwrap();
        assert_eq!(
            result.files,
            vec![
                PathBuf::from("/s/f01.png"),
                PathBuf::from("/s/f02.png"),
                PathBuf::from("/s/f50.png"),
                PathBuf::from("/s/f149.png"),
            ]
        );
    }

    #[test]
    fn pattern_gap_is_configurable() {
        let fs = MemoryFs::with_files(["/s/f01.png", "/s/f05.png"]);
        let resolver = SequenceResolver::with_fs(&fs, ResolverOptions { max_gap: 3 });
        let result = resolver.resolve_pattern("/s/f01.png").unwrap();
        assert_eq!(result.files, vec![PathBuf::from("/s/f01.png")]);
    }

    #[test]
    fn pattern_offset_excludes_lower_indices() {
        let files: Vec<String> = (5..=14).map(|i| format!("/s/img{:04}.png", i)).collect();
        let fs = MemoryFs::with_files(files);
        let resolver = SequenceResolver::with_fs(&fs, ResolverOptions::default());

        let result = resolver.resolve_pattern("/s/img0005.png?10").unwrap();
        let indices: Vec<u32> = result
            .files
            .iter()
            .map(crate::sequence::get_frame_number_from_path)
            .collect();
        assert_eq!(indices, vec![10, 11, 12, 13, 14]);
        assert_eq!(result.canonical_path, "/s/img%04d.png?begin:5");

        // The floor is not part of the canonical form
        let reopened = resolver.resolve_pattern(&result.canonical_path).unwrap();
        assert_eq!(reopened.len(), 10);
        assert_eq!(reopened.files[0], PathBuf::from("/s/img0005.png"));
    }

    #[test]
    fn pattern_from_zero_has_no_begin() {
        let fs = MemoryFs::with_files(["/s/a000.jpg", "/s/a001.jpg"]);
        let resolver = SequenceResolver::with_fs(&fs, ResolverOptions::default());
        let result = resolver.resolve_pattern("/s/a000.jpg").unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.canonical_path, "/s/a%03d.jpg");
    }

    #[test]
    fn pattern_reopens_canonical_form() {
        let fs = MemoryFs::with_files(["/s/img0005.png", "/s/img0006.png"]);
        let resolver = SequenceResolver::with_fs(&fs, ResolverOptions::default());
        let first = resolver.resolve_pattern("/s/img0005.png").unwrap();
        let reopened = resolver.resolve_pattern(&first.canonical_path).unwrap();
        assert_eq!(first, reopened);
    }

    #[test]
    fn pattern_missing_folder_is_empty() {
        let fs = MemoryFs::default();
        let resolver = SequenceResolver::with_fs(&fs, ResolverOptions::default());
        let result = resolver.resolve_pattern("/nowhere/img0001.png").unwrap();
        assert!(result.is_empty());
        assert_eq!(result.canonical_path, "/nowhere/img%04d.png?begin:1");
    }

    #[test]
    fn pattern_errors_propagate() {
        let resolver = SequenceResolver::new(ResolverOptions::default());
        assert!(resolver.resolve_pattern("/s/cover.png").is_err());
        assert!(resolver.resolve_pattern("/s/img0001").is_err());
    }

    #[test]
    fn mime_skips_hidden_files() {
        let fs = MemoryFs::with_files(["/p/.hidden.jpg", "/p/a.jpg", "/p/.all.jpg"]);
        let resolver = SequenceResolver::with_fs(&fs, ResolverOptions::default());
        let result = resolver.resolve(&SequenceSpec::mime("/p", "jpg"));
        assert_eq!(result.files, vec![PathBuf::from("/p/a.jpg")]);
    }

    #[test]
    fn relative_inputs_give_absolute_files() {
        let cwd = std::env::current_dir().unwrap();
        let fs = MemoryFs::with_files([
            cwd.join("shots/img0001.png"),
            cwd.join("shots/img0002.png"),
            cwd.join("shots/a.jpg"),
            cwd.join("frame01.tga"),
        ]);
        let resolver = SequenceResolver::with_fs(&fs, ResolverOptions::default());

        let frames = resolver.resolve_pattern("shots/img0001.png").unwrap();
        assert_eq!(
            frames.files,
            vec![cwd.join("shots/img0001.png"), cwd.join("shots/img0002.png")]
        );
        assert_eq!(frames.canonical_path, "shots/img%04d.png?begin:1");

        let photos = resolver.resolve(&SequenceSpec::mime("shots", "jpg"));
        assert_eq!(photos.files, vec![cwd.join("shots/a.jpg")]);

        let bare = resolver.resolve_pattern("frame01.tga").unwrap();
        assert_eq!(bare.files, vec![cwd.join("frame01.tga")]);
        assert!(bare.files.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn oversized_padding_is_rejected_before_probing() {
        let fs = MemoryFs::with_files(["/s/img0001.png"]);
        let resolver = SequenceResolver::with_fs(&fs, ResolverOptions::default());
        assert!(matches!(
            resolver.resolve_pattern("/s/img%0999999999999d.png"),
            Err(crate::sequence::SequenceError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn zero_gap_still_probes_first_frame() {
        let fs = MemoryFs::with_files(["/s/f1.png", "/s/f2.png"]);
        let resolver = SequenceResolver::with_fs(&fs, ResolverOptions { max_gap: 0 });
        let result = resolver.resolve_pattern("/s/f1.png").unwrap();
        assert_eq!(result.len(), 2);
    }
}
