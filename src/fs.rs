//! Filesystem collaborator.
//!
//! The resolver never touches disk directly: it goes through the
//! [`Filesystem`] trait so tests can inject an in-memory fake and trigger
//! failure paths (missing directories, unreadable files) without real I/O.

use std::io;
use std::path::Path;

/// Minimal filesystem surface the resolver depends on.
pub trait Filesystem {
    /// Whether `path` exists and is a directory.
    fn dir_exists(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a regular file.
    fn file_exists(&self, path: &Path) -> bool;

    /// Read the whole file at `path` as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create the directory at `path`, including missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// Production implementation backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFilesystem;

impl Filesystem for DiskFilesystem {
    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

/// In-memory fake for unit tests.
///
/// Directories and files are plain path sets; a path listed in
/// `unreadable` exists but fails to read, which is otherwise hard to
/// provoke on a real disk.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemFilesystem {
    dirs: std::collections::HashSet<std::path::PathBuf>,
    files: std::collections::HashMap<std::path::PathBuf, String>,
    unreadable: std::collections::HashSet<std::path::PathBuf>,
}

#[cfg(test)]
impl MemFilesystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_dir(&mut self, path: impl Into<std::path::PathBuf>) {
        self.dirs.insert(path.into());
    }

    pub(crate) fn add_file(&mut self, path: impl Into<std::path::PathBuf>, content: &str) {
        self.files.insert(path.into(), content.to_string());
    }

    pub(crate) fn add_unreadable_file(&mut self, path: impl Into<std::path::PathBuf>) {
        let path = path.into();
        self.files.insert(path.clone(), String::new());
        self.unreadable.insert(path);
    }
}

#[cfg(test)]
impl Filesystem for MemFilesystem {
    fn dir_exists(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "unreadable"));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        // The fake cannot mutate through &self; tests pre-create directories
        // with add_dir, so force-create is exercised on the real filesystem.
        let _ = path;
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "MemFilesystem cannot create directories",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ==================== DiskFilesystem Tests ====================

    #[test]
    fn test_disk_dir_exists() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let fs = DiskFilesystem;
        assert!(fs.dir_exists(dir.path()));
        assert!(!fs.dir_exists(&dir.path().join("missing")));
    }

    #[test]
    fn test_disk_file_exists_and_read() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("en.json");
        std::fs::write(&path, r#"{"hi":"Hi"}"#).expect("write file");

        let fs = DiskFilesystem;
        assert!(fs.file_exists(&path));
        // A directory is not a file.
        assert!(!fs.file_exists(dir.path()));
        assert_eq!(fs.read_to_string(&path).expect("read file"), r#"{"hi":"Hi"}"#);
    }

    #[test]
    fn test_disk_create_dir_all() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let nested = dir.path().join("a").join("b");

        let fs = DiskFilesystem;
        fs.create_dir_all(&nested).expect("create nested dirs");
        assert!(fs.dir_exists(&nested));
    }

    // ==================== MemFilesystem Tests ====================

    #[test]
    fn test_mem_filesystem_round_trip() {
        let mut fs = MemFilesystem::new();
        fs.add_dir("/langs");
        fs.add_file("/langs/en.json", r#"{"hi":"Hi"}"#);

        assert!(fs.dir_exists(Path::new("/langs")));
        assert!(fs.file_exists(Path::new("/langs/en.json")));
        assert_eq!(
            fs.read_to_string(Path::new("/langs/en.json")).expect("read"),
            r#"{"hi":"Hi"}"#
        );
    }

    #[test]
    fn test_mem_filesystem_round_trip_mutation() {
        let mut fs = MemFilesystem::new();
        fs.add_dir("/langs");
        assert!(fs.dir_exists(Path::new("/langs")));
        let err = fs
            .create_dir_all(&PathBuf::from("/other"))
            .expect_err("fake does not support creation");
        assert_eq!(err.kind(), io::ErrorKind::Unsupported);
    }

    #[test]
    fn test_mem_filesystem_unreadable_file() {
        let mut fs = MemFilesystem::new();
        fs.add_unreadable_file("/langs/en.json");

        assert!(fs.file_exists(Path::new("/langs/en.json")));
        let err = fs
            .read_to_string(Path::new("/langs/en.json"))
            .expect_err("read should fail");
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

}
