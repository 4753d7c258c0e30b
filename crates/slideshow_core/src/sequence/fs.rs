//! Filesystem access used by the resolver.
//!
//! Resolution only needs existence checks and flat directory listings, so
//! the filesystem sits behind a small trait. [`LocalFs`] is the real one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only filesystem operations needed to resolve a sequence.
pub trait SequenceFs {
    /// True if `path` is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// True if `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Full paths of the regular files directly inside `dir`.
    ///
    /// Order is unspecified.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// [`SequenceFs`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl SequenceFs for LocalFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // file_type() does not follow symlinks; path.is_file() does
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }
}

impl<T: SequenceFs + ?Sized> SequenceFs for &T {
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        (**self).list_files(dir)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_lists_only_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let files = LocalFs.list_files(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("a.jpg")]);
        assert!(LocalFs.is_file(&dir.path().join("a.jpg")));
        assert!(!LocalFs.is_file(&dir.path().join("nested")));
        assert!(LocalFs.is_dir(dir.path()));
    }

    #[test]
    fn local_fs_missing_dir_errors() {
        let dir = tempdir().unwrap();
        assert!(LocalFs.list_files(&dir.path().join("missing")).is_err());
    }
}
