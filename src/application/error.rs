//! 应用层错误定义
//!
//! 客户端与批处理共用的错误类型

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ports::{PlaybackError, StorageError, TtsError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 配置错误（如缺少 API Key），运行中止
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 输入文件不存在，运行中止
    #[error("Input file not found at {}", .0.display())]
    InputNotFound(PathBuf),

    /// 音色选择失败（软失败，仅记录日志）
    #[error("Voice selection failed for '{voice_id}': {reason}")]
    VoiceSelection { voice_id: String, reason: String },

    /// 单句合成失败，由批处理隔离
    #[error("Synthesis failed: {0}")]
    Synthesis(#[from] TtsError),

    /// 提供商返回空音频
    #[error("Provider returned no audio for: {0}")]
    EmptyAudio(String),

    /// 播放错误
    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),

    /// 存储错误
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApplicationError {
    /// 创建配置错误
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// 是否为应中止整次运行的错误
    pub fn is_setup_failure(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::InputNotFound(_))
    }
}

impl From<StorageError> for ApplicationError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::FileNotFound(path) => Self::InputNotFound(PathBuf::from(path)),
            StorageError::IoError(message) => Self::Storage(message),
        }
    }
}

impl From<std::io::Error> for ApplicationError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
