//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TtsProvider、AudioPlayer、ArtifactStorage、ClientFactory）
//! - client: TTS 客户端封装
//! - commands: 批处理命令及处理器
//! - error: 应用层错误定义

pub mod client;
pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use client::{resolve_api_key, SynthesisOutcome, TtsClient, TtsClientSettings, DEFAULT_MODEL_ID};

pub use commands::{
    handlers::{ProcessFileHandler, ProcessReport},
    ProcessFile, DEFAULT_LANGUAGE, DEFAULT_OUTPUT_DIR,
};

pub use error::ApplicationError;

pub use ports::{
    ArtifactStoragePort, AudioPlayerPort, AudioStream, PlaybackError, PlayerKind, StorageError,
    SynthesisRequest, TtsClientFactory, TtsError, TtsProviderPort, AUDIO_PLACEHOLDER,
};
