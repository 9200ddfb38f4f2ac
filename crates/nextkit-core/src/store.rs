//! File store capability used by resolvers and commands.
//!
//! Everything that touches the disk goes through [`FileStore`], so commands
//! can run against the real filesystem ([`LocalFileStore`]) or record their
//! effects in memory ([`MemoryFileStore`]) for dry runs and tests.

// Internal imports (std, crate)
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Error, Result};

// External imports (alphabetized)
use async_trait::async_trait;

/// Minimal async filesystem surface the scaffolder needs
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Whether `path` exists. Any probe failure counts as "does not exist".
    async fn exists(&self, path: &Path) -> bool;

    /// Read a UTF-8 text file
    async fn read_text(&self, path: &Path) -> Result<String>;

    /// Write a text file, failing with [`Error::AlreadyExists`] when
    /// `overwrite` is false and the file is already there.
    async fn write_text(&self, path: &Path, content: &str, overwrite: bool) -> Result<()>;

    /// Create a directory, optionally with all missing parents
    async fn create_dir(&self, path: &Path, recursive: bool) -> Result<()>;
}

/// [`FileStore`] backed by the local filesystem through `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

#[async_trait]
impl FileStore for LocalFileStore {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn read_text(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::fs(path, e))
    }

    async fn write_text(&self, path: &Path, content: &str, overwrite: bool) -> Result<()> {
        if !overwrite && self.exists(path).await {
            return Err(Error::AlreadyExists(path.to_path_buf()));
        }
        log::debug!("Writing {} ({} bytes)", path.display(), content.len());
        tokio::fs::write(path, content)
            .await
            .map_err(|e| Error::fs(path, e))
    }

    async fn create_dir(&self, path: &Path, recursive: bool) -> Result<()> {
        log::debug!("Creating directory: {}", path.display());
        let result = if recursive {
            tokio::fs::create_dir_all(path).await
        } else {
            tokio::fs::create_dir(path).await
        };
        result.map_err(|e| Error::fs(path, e))
    }
}

/// In-memory [`FileStore`] that records writes instead of performing them.
///
/// With [`MemoryFileStore::over_disk`], paths not written in memory are looked
/// up on the local filesystem, which lets a dry run see existing route files.
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    files: Mutex<BTreeMap<PathBuf, String>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
    disk: Option<LocalFileStore>,
}

impl MemoryFileStore {
    /// Empty store with no disk fallback
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store that falls back to the local filesystem for reads
    pub fn over_disk() -> Self {
        Self {
            disk: Some(LocalFileStore),
            ..Self::default()
        }
    }

    /// Seed a file, creating its parent directories
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.insert_dir_all(parent);
        }
        self.lock_files().insert(path, content.into());
        self
    }

    /// Content written (or seeded) at `path`
    pub fn file(&self, path: &Path) -> Option<String> {
        self.lock_files().get(path).cloned()
    }

    /// All files held in memory, sorted by path
    pub fn files(&self) -> Vec<(PathBuf, String)> {
        self.lock_files()
            .iter()
            .map(|(p, c)| (p.clone(), c.clone()))
            .collect()
    }

    /// All directories created in memory, sorted by path
    pub fn dirs(&self) -> Vec<PathBuf> {
        self.lock_dirs().iter().cloned().collect()
    }

    fn insert_dir_all(&self, path: &Path) {
        let mut dirs = self.lock_dirs();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    fn lock_files(&self) -> std::sync::MutexGuard<'_, BTreeMap<PathBuf, String>> {
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_dirs(&self) -> std::sync::MutexGuard<'_, BTreeSet<PathBuf>> {
        self.dirs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn exists(&self, path: &Path) -> bool {
        let in_memory =
            self.lock_files().contains_key(path) || self.lock_dirs().contains(path);
        if in_memory {
            return true;
        }
        match &self.disk {
            Some(disk) => disk.exists(path).await,
            None => false,
        }
    }

    async fn read_text(&self, path: &Path) -> Result<String> {
        if let Some(content) = self.file(path) {
            return Ok(content);
        }
        match &self.disk {
            Some(disk) => disk.read_text(path).await,
            None => Err(Error::fs(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            )),
        }
    }

    async fn write_text(&self, path: &Path, content: &str, overwrite: bool) -> Result<()> {
        if !overwrite && self.exists(path).await {
            return Err(Error::AlreadyExists(path.to_path_buf()));
        }
        self.lock_files()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    async fn create_dir(&self, path: &Path, recursive: bool) -> Result<()> {
        if recursive {
            self.insert_dir_all(path);
        } else {
            self.lock_dirs().insert(path.to_path_buf());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_local_store_refuses_overwrite() -> crate::Result<()> {
        let dir = tempdir()?;
        let store = LocalFileStore;
        let path = dir.path().join("index.tsx");

        store.write_text(&path, "first", false).await?;
        let err = store.write_text(&path, "second", false).await.unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(ref p) if p == &path));
        assert_eq!(store.read_text(&path).await?, "first");

        store.write_text(&path, "second", true).await?;
        assert_eq!(store.read_text(&path).await?, "second");
        Ok(())
    }

    #[tokio::test]
    async fn test_local_store_create_dir_and_exists() -> crate::Result<()> {
        let dir = tempdir()?;
        let store = LocalFileStore;
        let nested = dir.path().join("a").join("b").join("components");

        assert!(!store.exists(&nested).await);
        assert!(store.create_dir(&nested, false).await.is_err());
        store.create_dir(&nested, true).await?;
        assert!(store.exists(&nested).await);
        Ok(())
    }

    #[tokio::test]
    async fn test_local_store_read_missing_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.ts");
        let err = LocalFileStore.read_text(&path).await.unwrap_err();
        assert!(err.to_string().contains("missing.ts"));
    }

    #[tokio::test]
    async fn test_memory_store_records_writes() -> crate::Result<()> {
        let store = MemoryFileStore::new().with_file("/app/route.ts", "old");
        assert!(store.exists(Path::new("/app")).await);
        assert!(store.exists(Path::new("/app/route.ts")).await);

        let err = store
            .write_text(Path::new("/app/route.ts"), "new", false)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));

        store.write_text(Path::new("/app/route.ts"), "new", true).await?;
        store.create_dir(Path::new("/app/methods"), true).await?;
        assert_eq!(store.read_text(Path::new("/app/route.ts")).await?, "new");
        assert!(store.dirs().contains(&PathBuf::from("/app/methods")));
        assert!(store.read_text(Path::new("/app/GET.ts")).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_memory_store_over_disk_reads_through() -> crate::Result<()> {
        let dir = tempdir()?;
        let on_disk = dir.path().join("route.ts");
        std::fs::write(&on_disk, "export type UsersRouteParams = {};")?;

        let store = MemoryFileStore::over_disk();
        assert!(store.exists(&on_disk).await);
        assert!(store.read_text(&on_disk).await?.contains("UsersRouteParams"));

        store.write_text(&on_disk, "changed", true).await?;
        assert_eq!(std::fs::read_to_string(&on_disk)?, "export type UsersRouteParams = {};");
        assert_eq!(store.read_text(&on_disk).await?, "changed");
        Ok(())
    }
}
