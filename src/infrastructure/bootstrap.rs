//! Bootstrap - 组装 ElevenLabs 客户端
//!
//! API Key 解析顺序：显式参数 > ELEVEN_API_KEY（含当前目录 .env）> 配置文件 tts.api_key

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::client::{resolve_api_key, TtsClient, TtsClientSettings};
use crate::application::error::ApplicationError;
use crate::application::ports::TtsClientFactory;
use crate::config::AppConfig;
use crate::infrastructure::adapters::{
    suffix_for_output_format, CommandAudioPlayer, ElevenLabsClient, ElevenLabsClientConfig,
};

/// API Key 环境变量
pub const API_KEY_ENV: &str = "ELEVEN_API_KEY";

/// 创建 ElevenLabs 客户端并选择默认音色
pub async fn connect_client(
    config: &AppConfig,
    api_key: Option<String>,
) -> Result<TtsClient, ApplicationError> {
    // 已存在的环境变量不会被 .env 覆盖
    dotenvy::dotenv().ok();

    let api_key = resolve_api_key(
        api_key,
        std::env::var(API_KEY_ENV).ok(),
        config.tts.api_key.clone(),
    )?;

    let provider_config = ElevenLabsClientConfig::new(api_key.clone())
        .with_base_url(config.tts.base_url.clone())
        .with_timeout(config.tts.timeout_secs)
        .with_output_format(config.tts.output_format.clone());
    let provider = ElevenLabsClient::new(provider_config)
        .map_err(|e| ApplicationError::configuration(e.to_string()))?;

    let player = CommandAudioPlayer::new(config.playback.player)
        .with_suffix(suffix_for_output_format(&config.tts.output_format));

    let settings = TtsClientSettings {
        model_id: config.tts.model_id.clone(),
        default_voice_id: config.tts.default_voice_id.clone(),
    };

    tracing::debug!(
        base_url = %config.tts.base_url,
        model_id = %settings.model_id,
        "Connecting to ElevenLabs"
    );

    TtsClient::initialize(api_key, Arc::new(provider), Arc::new(player), settings).await
}

/// 批处理使用的客户端工厂
pub struct ElevenLabsClientFactory {
    config: AppConfig,
    api_key: Option<String>,
}

impl ElevenLabsClientFactory {
    pub fn new(config: AppConfig, api_key: Option<String>) -> Self {
        Self { config, api_key }
    }
}

#[async_trait]
impl TtsClientFactory for ElevenLabsClientFactory {
    async fn connect(&self) -> Result<TtsClient, ApplicationError> {
        connect_client(&self.config, self.api_key.clone()).await
    }
}
