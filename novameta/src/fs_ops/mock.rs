use std::{
    collections::{HashMap, HashSet},
    ffi::OsString,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use async_trait::async_trait;

use super::FileSystemOps;

/// In-memory filesystem with per-path failure injection.
#[derive(Default)]
pub struct MockFileSystemOps {
    dirs: Mutex<HashSet<PathBuf>>,
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
    fail_create_dir: Mutex<HashSet<PathBuf>>,
    fail_write: Mutex<HashSet<PathBuf>>,
    fail_rename: Mutex<HashSet<PathBuf>>,
    writes: Mutex<Vec<PathBuf>>,
    renames: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl MockFileSystemOps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        self.dirs.lock().unwrap().insert(path.into());
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, contents: &[u8]) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), contents.to_vec());
    }

    pub fn fail_create_dir(&self, path: impl Into<PathBuf>) {
        self.fail_create_dir.lock().unwrap().insert(path.into());
    }

    pub fn fail_write(&self, path: impl Into<PathBuf>) {
        self.fail_write.lock().unwrap().insert(path.into());
    }

    /// Renames with this source path fail with `PermissionDenied`.
    pub fn fail_rename(&self, from: impl Into<PathBuf>) {
        self.fail_rename.lock().unwrap().insert(from.into());
    }

    pub fn has_file(&self, path: impl AsRef<Path>) -> bool {
        self.files.lock().unwrap().contains_key(path.as_ref())
    }

    pub fn file_contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.lock().unwrap().clone()
    }

    pub fn renames(&self) -> Vec<(PathBuf, PathBuf)> {
        self.renames.lock().unwrap().clone()
    }

    fn parent_is_dir(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                self.dirs.lock().unwrap().contains(parent)
            }
            _ => true,
        }
    }
}

fn simulated(kind: io::ErrorKind, path: &Path) -> io::Error {
    io::Error::new(kind, format!("simulated failure for {}", path.display()))
}

#[async_trait]
impl FileSystemOps for MockFileSystemOps {
    async fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }

    async fn create_dir(&self, path: &Path) -> io::Result<()> {
        if self.fail_create_dir.lock().unwrap().contains(path) {
            return Err(simulated(io::ErrorKind::PermissionDenied, path));
        }
        if !self.parent_is_dir(path) {
            return Err(simulated(io::ErrorKind::NotFound, path));
        }
        if self.files.lock().unwrap().contains_key(path) {
            return Err(simulated(io::ErrorKind::AlreadyExists, path));
        }
        if !self.dirs.lock().unwrap().insert(path.into()) {
            return Err(simulated(io::ErrorKind::AlreadyExists, path));
        }
        Ok(())
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if self.fail_write.lock().unwrap().contains(path) {
            return Err(simulated(io::ErrorKind::PermissionDenied, path));
        }
        if !self.parent_is_dir(path) {
            return Err(simulated(io::ErrorKind::NotFound, path));
        }
        self.writes.lock().unwrap().push(path.into());
        self.add_file(path, contents);
        Ok(())
    }

    async fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        if !self.dirs.lock().unwrap().contains(path) {
            return Err(simulated(io::ErrorKind::NotFound, path));
        }
        let files = self.files.lock().unwrap();
        let dirs = self.dirs.lock().unwrap();
        let mut names: Vec<OsString> = files
            .keys()
            .chain(dirs.iter())
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name().map(OsString::from))
            .collect();
        names.sort();
        Ok(names)
    }

    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        if self.fail_rename.lock().unwrap().contains(from) {
            return Err(simulated(io::ErrorKind::PermissionDenied, from));
        }
        let mut files = self.files.lock().unwrap();
        if let Some(contents) = files.remove(from) {
            files.insert(to.into(), contents);
        } else {
            let mut dirs = self.dirs.lock().unwrap();
            if !dirs.remove(from) {
                return Err(simulated(io::ErrorKind::NotFound, from));
            }
            dirs.insert(to.into());
        }
        self.renames.lock().unwrap().push((from.into(), to.into()));
        Ok(())
    }
}
