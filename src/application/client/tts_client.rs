//! TTS Client - 提供商调用的唯一入口
//!
//! 所有合成操作都依赖当前选中的音色；未选中时记录诊断并空操作，不返回错误

use futures_util::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioPlayerPort, AudioStream, SynthesisRequest, TtsProviderPort,
};
use crate::domain::{Voice, VoiceId, DEFAULT_VOICE_ID};

/// 固定使用的多语言模型
pub const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";

/// 客户端设置
#[derive(Debug, Clone)]
pub struct TtsClientSettings {
    /// 合成使用的模型 ID
    pub model_id: String,
    /// 默认音色 ID
    pub default_voice_id: String,
}

impl Default for TtsClientSettings {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            default_voice_id: DEFAULT_VOICE_ID.to_string(),
        }
    }
}

/// 合成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisOutcome {
    /// 已写入文件
    Written { path: PathBuf, bytes: usize },
    /// 已送往本地音频输出
    Played { bytes: usize },
    /// 未选中音色，未做任何事
    NoVoice,
}

/// 解析 API Key
///
/// 优先级：显式参数 > 环境变量 > 配置文件。空白值视为缺失
pub fn resolve_api_key(
    explicit: Option<String>,
    from_env: Option<String>,
    from_config: Option<String>,
) -> Result<String, ApplicationError> {
    [explicit, from_env, from_config]
        .into_iter()
        .flatten()
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
        .ok_or_else(|| {
            ApplicationError::configuration(
                "ElevenLabs API key not found. Please set ELEVEN_API_KEY in your .env file or pass it directly.",
            )
        })
}

/// TTS 客户端
pub struct TtsClient {
    api_key: String,
    provider: Arc<dyn TtsProviderPort>,
    player: Arc<dyn AudioPlayerPort>,
    settings: TtsClientSettings,
    /// 音色目录缓存，首次 list_voices 时填充
    voices: Option<Vec<Voice>>,
    current_voice: Option<Voice>,
    language: Option<String>,
}

impl TtsClient {
    /// 创建客户端（不做任何网络调用）
    pub fn new(
        api_key: impl Into<String>,
        provider: Arc<dyn TtsProviderPort>,
        player: Arc<dyn AudioPlayerPort>,
        settings: TtsClientSettings,
    ) -> Result<Self, ApplicationError> {
        let api_key = resolve_api_key(Some(api_key.into()), None, None)?;
        Ok(Self {
            api_key,
            provider,
            player,
            settings,
            voices: None,
            current_voice: None,
            language: None,
        })
    }

    /// 创建客户端并尝试选择默认音色（失败只记录日志）
    pub async fn initialize(
        api_key: impl Into<String>,
        provider: Arc<dyn TtsProviderPort>,
        player: Arc<dyn AudioPlayerPort>,
        settings: TtsClientSettings,
    ) -> Result<Self, ApplicationError> {
        let mut client = Self::new(api_key, provider, player, settings)?;
        client.select_default_voice().await;
        Ok(client)
    }

    /// 当前 API Key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn settings(&self) -> &TtsClientSettings {
        &self.settings
    }

    pub fn current_voice(&self) -> Option<&Voice> {
        self.current_voice.as_ref()
    }

    /// 最近一次请求的语言（仅供展示，不影响合成）
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// 获取音色目录，首次调用时从提供商拉取并缓存
    pub async fn list_voices(&mut self) -> Result<&[Voice], ApplicationError> {
        if self.voices.is_none() {
            let voices = self.provider.list_voices().await?;
            tracing::debug!(count = voices.len(), "Voice catalog cached");
            self.voices = Some(voices);
        }
        Ok(self.voices.as_deref().unwrap_or_default())
    }

    /// 清除音色目录缓存
    pub fn invalidate_voice_cache(&mut self) {
        self.voices = None;
    }

    /// 按 ID 选择音色，失败时记录并返回 false
    pub async fn select_voice(&mut self, voice_id: &str) -> bool {
        match self.try_select_voice(voice_id).await {
            Ok(voice) => {
                tracing::info!(voice_id = %voice.id(), "Voice set to: {}", voice);
                self.current_voice = Some(voice);
                true
            }
            Err(e) => {
                tracing::warn!(
                    voice_id = %voice_id,
                    error = %e,
                    "Voice ID '{}' not found or error occurred",
                    voice_id
                );
                false
            }
        }
    }

    async fn try_select_voice(&self, voice_id: &str) -> Result<Voice, ApplicationError> {
        let id = VoiceId::new(voice_id).map_err(|reason| ApplicationError::VoiceSelection {
            voice_id: voice_id.to_string(),
            reason: reason.to_string(),
        })?;
        self.provider
            .get_voice(&id)
            .await
            .map_err(|e| ApplicationError::VoiceSelection {
                voice_id: voice_id.to_string(),
                reason: e.to_string(),
            })
    }

    /// 选择默认音色，失败时保持"未选中"状态
    pub async fn select_default_voice(&mut self) {
        let default_voice_id = self.settings.default_voice_id.clone();
        if !self.select_voice(&default_voice_id).await {
            tracing::warn!(
                "Failed to set default voice. Please check your API key and internet connection."
            );
        }
    }

    /// 语言设置（仅记录意图）
    ///
    /// 实际输出语言由音色与模型决定，多语言模型会根据文本自动识别
    pub fn set_language(&mut self, language_code: &str) {
        tracing::info!(
            language = %language_code,
            model_id = %self.settings.model_id,
            "Language setting to '{}' requested. Actual language output depends on the selected voice and model capabilities.",
            language_code
        );
        self.language = Some(language_code.to_string());
    }

    /// 流式合成；未选中音色时返回空流
    pub async fn synthesize_to_stream(&self, text: &str) -> Result<AudioStream, ApplicationError> {
        let Some(request) = self.build_request(text) else {
            return Ok(stream::empty().boxed());
        };
        Ok(self.provider.synthesize_stream(request).await?)
    }

    /// 合成并写入文件（覆盖已有文件）
    ///
    /// 提供商返回空音频时不写文件，返回 EmptyAudio
    pub async fn synthesize_to_file(
        &self,
        text: &str,
        path: impl AsRef<Path>,
    ) -> Result<SynthesisOutcome, ApplicationError> {
        let path = path.as_ref();
        let Some(audio) = self.fetch_audio(text).await? else {
            return Ok(SynthesisOutcome::NoVoice);
        };

        tokio::fs::write(path, &audio).await?;
        tracing::info!(path = %path.display(), bytes = audio.len(), "Audio saved to {}", path.display());

        Ok(SynthesisOutcome::Written {
            path: path.to_path_buf(),
            bytes: audio.len(),
        })
    }

    /// 合成并直接播放
    pub async fn play_direct(&self, text: &str) -> Result<SynthesisOutcome, ApplicationError> {
        let Some(audio) = self.fetch_audio(text).await? else {
            return Ok(SynthesisOutcome::NoVoice);
        };

        self.player.play(&audio).await?;
        Ok(SynthesisOutcome::Played { bytes: audio.len() })
    }

    /// 请求完整音频；未选中音色时返回 None
    async fn fetch_audio(&self, text: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
        let Some(request) = self.build_request(text) else {
            return Ok(None);
        };

        let audio = self.provider.synthesize(request).await?;
        if audio.is_empty() {
            tracing::error!("Failed to generate audio for: {}", text);
            return Err(ApplicationError::EmptyAudio(text.to_string()));
        }
        Ok(Some(audio))
    }

    fn build_request(&self, text: &str) -> Option<SynthesisRequest> {
        let Some(voice) = self.current_voice.as_ref() else {
            tracing::warn!("No voice selected. Please set a voice first.");
            return None;
        };
        Some(SynthesisRequest {
            text: text.to_string(),
            voice_id: voice.id().clone(),
            model_id: self.settings.model_id.clone(),
        })
    }
}
