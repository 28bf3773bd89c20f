//! Artifact Storage Port - 输入读取与产物写入抽象

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 语音合成失败时写入 .wav 路径的占位文本
pub const AUDIO_PLACEHOLDER: &str = "Error during TTS generation.";

/// 存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Artifact Storage Port
///
/// 产物布局: `<output_dir>/<index>.txt` 与 `<output_dir>/<index>.wav`
#[async_trait]
pub trait ArtifactStoragePort: Send + Sync {
    /// 确保输出目录存在（递归创建）
    async fn prepare_dir(&self, output_dir: &Path) -> Result<(), StorageError>;

    /// 读取输入文本；路径不是已存在的文件时返回 FileNotFound
    async fn read_input(&self, input_path: &Path) -> Result<String, StorageError>;

    /// 文本产物路径
    fn text_path(&self, output_dir: &Path, index: &str) -> PathBuf {
        output_dir.join(format!("{}.txt", index))
    }

    /// 音频产物路径
    fn audio_path(&self, output_dir: &Path, index: &str) -> PathBuf {
        output_dir.join(format!("{}.wav", index))
    }

    /// 写入文本产物（覆盖已有文件）
    async fn save_text(
        &self,
        output_dir: &Path,
        index: &str,
        content: &str,
    ) -> Result<PathBuf, StorageError>;

    /// 在音频产物路径写入占位文本
    async fn save_placeholder(&self, output_dir: &Path, index: &str)
        -> Result<PathBuf, StorageError>;

    /// 解析输出目录的绝对路径（用于完成报告）
    async fn resolve_dir(&self, output_dir: &Path) -> PathBuf;
}
