//! Client Factory Port - 批处理开始时构造 TTS 客户端

use async_trait::async_trait;

use crate::application::client::TtsClient;
use crate::application::error::ApplicationError;

/// TTS 客户端工厂
///
/// 缺少凭据时返回 ApplicationError::Configuration
#[async_trait]
pub trait TtsClientFactory: Send + Sync {
    async fn connect(&self) -> Result<TtsClient, ApplicationError>;
}
