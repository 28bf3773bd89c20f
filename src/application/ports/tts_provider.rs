//! TTS Provider Port - TTS 提供商抽象
//!
//! 定义对外部 TTS 提供商的最小接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use thiserror::Error;

use crate::domain::{Voice, VoiceId};

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Voice not found: {0}")]
    VoiceNotFound(String),
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 要合成的文本
    pub text: String,
    /// 音色 ID
    pub voice_id: VoiceId,
    /// 模型 ID（如 eleven_multilingual_v2）
    pub model_id: String,
}

/// 流式音频：有限、惰性、不可重启
pub type AudioStream = BoxStream<'static, Result<Vec<u8>, TtsError>>;

/// TTS Provider Port
///
/// 外部 TTS 服务的不透明能力：音色目录、按 ID 查找音色、合成
#[async_trait]
pub trait TtsProviderPort: Send + Sync {
    /// 获取完整音色目录
    async fn list_voices(&self) -> Result<Vec<Voice>, TtsError>;

    /// 按 ID 获取音色
    async fn get_voice(&self, voice_id: &VoiceId) -> Result<Voice, TtsError>;

    /// 非流式合成，返回完整音频数据（可能为空）
    async fn synthesize(&self, request: SynthesisRequest) -> Result<Vec<u8>, TtsError>;

    /// 流式合成
    async fn synthesize_stream(&self, request: SynthesisRequest) -> Result<AudioStream, TtsError>;
}
