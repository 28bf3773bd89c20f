//! Fake TTS Client - 用于测试的 TTS 提供商
//!
//! 不发起任何网络请求，返回固定音频；可按文本内容模拟失败或空音频

use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{AudioStream, SynthesisRequest, TtsError, TtsProviderPort};
use crate::domain::{Voice, VoiceId, DEFAULT_VOICE_ID};

/// 除默认音色外的另一个内置音色（Adam）
pub const FAKE_ALT_VOICE_ID: &str = "pNInz6obpgDQGcFmaJgB";

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsClientConfig {
    /// 音色目录
    pub voices: Vec<Voice>,
    /// 每次合成返回的音频数据
    pub audio_data: Vec<u8>,
    /// 流式合成时每块的字节数
    pub chunk_size: usize,
    /// 文本包含任一子串时返回 ServiceError
    pub fail_on: Vec<String>,
    /// 文本包含任一子串时返回空音频
    pub empty_on: Vec<String>,
}

impl Default for FakeTtsClientConfig {
    fn default() -> Self {
        Self {
            voices: vec![
                Voice::new(VoiceId::default(), "Rachel").with_category("premade"),
                Voice::new(
                    VoiceId::new(FAKE_ALT_VOICE_ID).unwrap_or_default(),
                    "Adam",
                )
                .with_category("premade"),
            ],
            audio_data: b"RIFF\x24\x00\x00\x00WAVEfake-audio".to_vec(),
            chunk_size: 1024,
            fail_on: Vec::new(),
            empty_on: Vec::new(),
        }
    }
}

/// Fake TTS Client
///
/// 记录所有合成请求，便于断言调用顺序与参数
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
    calls: Mutex<Vec<SynthesisRequest>>,
    list_calls: AtomicUsize,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsClientConfig) -> Self {
        tracing::debug!(
            voices = config.voices.len(),
            audio_size = config.audio_data.len(),
            "FakeTtsClient initialized"
        );
        Self {
            config,
            calls: Mutex::new(Vec::new()),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(FakeTtsClientConfig::default())
    }

    /// 已收到的合成请求（按顺序）
    pub fn calls(&self) -> Vec<SynthesisRequest> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// list_voices 被调用的次数
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn record(&self, request: &SynthesisRequest) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }
    }

    fn render(&self, request: &SynthesisRequest) -> Result<Vec<u8>, TtsError> {
        self.record(request);

        if !self.config.voices.iter().any(|v| v.id() == &request.voice_id) {
            return Err(TtsError::VoiceNotFound(request.voice_id.to_string()));
        }
        if self.config.fail_on.iter().any(|m| request.text.contains(m.as_str())) {
            return Err(TtsError::ServiceError(format!(
                "HTTP 500 Internal Server Error: fake failure for '{}'",
                request.text
            )));
        }
        if self.config.empty_on.iter().any(|m| request.text.contains(m.as_str())) {
            return Ok(Vec::new());
        }
        Ok(self.config.audio_data.clone())
    }
}

#[async_trait]
impl TtsProviderPort for FakeTtsClient {
    async fn list_voices(&self) -> Result<Vec<Voice>, TtsError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.config.voices.clone())
    }

    async fn get_voice(&self, voice_id: &VoiceId) -> Result<Voice, TtsError> {
        self.config
            .voices
            .iter()
            .find(|v| v.id() == voice_id)
            .cloned()
            .ok_or_else(|| TtsError::VoiceNotFound(voice_id.to_string()))
    }

    async fn synthesize(&self, request: SynthesisRequest) -> Result<Vec<u8>, TtsError> {
        tracing::debug!(
            text_len = request.text.len(),
            voice_id = %request.voice_id,
            "FakeTtsClient: returning fixed audio"
        );
        self.render(&request)
    }

    async fn synthesize_stream(&self, request: SynthesisRequest) -> Result<AudioStream, TtsError> {
        let audio = self.render(&request)?;
        let chunk_size = self.config.chunk_size.max(1);
        let chunks: Vec<Result<Vec<u8>, TtsError>> = audio
            .chunks(chunk_size)
            .map(|chunk| Ok(chunk.to_vec()))
            .collect();
        Ok(stream::iter(chunks).boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, voice: &str) -> SynthesisRequest {
        SynthesisRequest {
            text: text.to_string(),
            voice_id: VoiceId::new(voice).unwrap(),
            model_id: "m".to_string(),
        }
    }

    #[tokio::test]
    async fn test_default_voices() {
        let client = FakeTtsClient::with_defaults();
        let voice = client.get_voice(&VoiceId::default()).await.unwrap();
        assert_eq!(voice.id().as_str(), DEFAULT_VOICE_ID);
        assert!(client
            .get_voice(&VoiceId::new(FAKE_ALT_VOICE_ID).unwrap())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_unknown_voice_fails_synthesis() {
        let client = FakeTtsClient::with_defaults();
        let err = client.synthesize(request("hi", "nobody")).await.unwrap_err();
        assert!(matches!(err, TtsError::VoiceNotFound(_)));
        assert_eq!(client.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_fail_and_empty_markers() {
        let client = FakeTtsClient::new(FakeTtsClientConfig {
            fail_on: vec!["bad".to_string()],
            empty_on: vec!["mute".to_string()],
            ..Default::default()
        });
        assert!(client.synthesize(request("a bad line", DEFAULT_VOICE_ID)).await.is_err());
        assert!(client
            .synthesize(request("mute me", DEFAULT_VOICE_ID))
            .await
            .unwrap()
            .is_empty());
        assert!(!client
            .synthesize(request("fine", DEFAULT_VOICE_ID))
            .await
            .unwrap()
            .is_empty());
    }
}
