//! File Storage - 文件系统产物存储实现
//!
//! 实现 ArtifactStoragePort trait

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{ArtifactStoragePort, StorageError, AUDIO_PLACEHOLDER};

/// 文件系统产物存储
#[derive(Debug, Clone, Default)]
pub struct FileArtifactStorage;

impl FileArtifactStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ArtifactStoragePort for FileArtifactStorage {
    async fn prepare_dir(&self, output_dir: &Path) -> Result<(), StorageError> {
        fs::create_dir_all(output_dir)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        tracing::debug!(dir = %output_dir.display(), "Output directory ready");
        Ok(())
    }

    async fn read_input(&self, input_path: &Path) -> Result<String, StorageError> {
        let is_file = fs::metadata(input_path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(StorageError::FileNotFound(
                input_path.to_string_lossy().to_string(),
            ));
        }

        fs::read_to_string(input_path)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))
    }

    async fn save_text(
        &self,
        output_dir: &Path,
        index: &str,
        content: &str,
    ) -> Result<PathBuf, StorageError> {
        let path = self.text_path(output_dir, index);
        fs::write(&path, content)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;
        Ok(path)
    }

    async fn save_placeholder(
        &self,
        output_dir: &Path,
        index: &str,
    ) -> Result<PathBuf, StorageError> {
        let path = self.audio_path(output_dir, index);
        fs::write(&path, AUDIO_PLACEHOLDER)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        tracing::debug!(path = %path.display(), "Wrote audio placeholder");
        Ok(path)
    }

    async fn resolve_dir(&self, output_dir: &Path) -> PathBuf {
        fs::canonicalize(output_dir)
            .await
            .unwrap_or_else(|_| output_dir.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_prepare_dir_is_recursive_and_idempotent() {
        let dir = tempdir().unwrap();
        let storage = FileArtifactStorage::new();
        let out = dir.path().join("a").join("b");

        storage.prepare_dir(&out).await.unwrap();
        storage.prepare_dir(&out).await.unwrap();
        assert!(out.is_dir());
    }

    #[tokio::test]
    async fn test_artifact_paths() {
        let storage = FileArtifactStorage::new();
        let out = Path::new("out");
        assert_eq!(storage.text_path(out, "001"), PathBuf::from("out/001.txt"));
        assert_eq!(storage.audio_path(out, "1000"), PathBuf::from("out/1000.wav"));
    }

    #[tokio::test]
    async fn test_save_text_overwrites() {
        let dir = tempdir().unwrap();
        let storage = FileArtifactStorage::new();

        storage.save_text(dir.path(), "001", "first").await.unwrap();
        let path = storage.save_text(dir.path(), "001", "second").await.unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_save_placeholder_uses_audio_path() {
        let dir = tempdir().unwrap();
        let storage = FileArtifactStorage::new();

        let path = storage.save_placeholder(dir.path(), "002").await.unwrap();
        assert_eq!(path, dir.path().join("002.wav"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), AUDIO_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_read_input_missing_and_directory() {
        let dir = tempdir().unwrap();
        let storage = FileArtifactStorage::new();

        let missing = storage.read_input(&dir.path().join("nope.txt")).await;
        assert!(matches!(missing, Err(StorageError::FileNotFound(_))));

        let directory = storage.read_input(dir.path()).await;
        assert!(matches!(directory, Err(StorageError::FileNotFound(_))));
    }

    #[tokio::test]
    async fn test_resolve_dir_is_absolute() {
        let dir = tempdir().unwrap();
        let storage = FileArtifactStorage::new();
        let resolved = storage.resolve_dir(dir.path()).await;
        assert!(resolved.is_absolute());
    }
}
