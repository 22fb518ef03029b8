//! Filesystem primitives used by the generator and the stripper.
//!
//! Both components only talk to the filesystem through [`FileSystemOps`], so
//! tests can swap in [`mock::MockFileSystemOps`] to inject failures that are
//! hard to provoke on a real filesystem (a rename refused by permissions
//! while running as root, for example).

use std::{ffi::OsString, io, path::Path};

use async_trait::async_trait;

#[cfg(test)]
pub mod mock;

#[async_trait]
pub trait FileSystemOps: Send + Sync {
    /// True if `path` exists and is a directory.
    async fn is_dir(&self, path: &Path) -> bool;

    /// Create a single directory. The parent must already exist.
    async fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Create or truncate `path` and write `contents` to it.
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Names of the direct children of `path`, in no particular order.
    async fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>>;

    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// Production implementation on top of `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystemOps;

#[async_trait]
impl FileSystemOps for TokioFileSystemOps {
    async fn is_dir(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }

    async fn create_dir(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir(path).await
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }

    async fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut dir = tokio::fs::read_dir(path).await?;
        let mut names = vec![];
        while let Some(entry) = dir.next_entry().await? {
            names.push(entry.file_name());
        }
        Ok(names)
    }

    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        tokio::fs::rename(from, to).await
    }
}
