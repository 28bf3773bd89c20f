//! ElevenLabs Client - 调用 ElevenLabs REST API
//!
//! 实现 TtsProviderPort trait
//!
//! 外部 API:
//! GET  {base}/v1/voices                          -> {"voices": [...]}
//! GET  {base}/v1/voices/{voice_id}               -> {"voice_id", "name", ...}
//! POST {base}/v1/text-to-speech/{voice_id}        -> 音频二进制
//! POST {base}/v1/text-to-speech/{voice_id}/stream -> 分块音频二进制
//! 鉴权: `xi-api-key` 请求头

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{AudioStream, SynthesisRequest, TtsError, TtsProviderPort};
use crate::domain::{Voice, VoiceId};

/// 默认 API 地址
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// 默认输出格式（与提供商默认值一致）
pub const DEFAULT_OUTPUT_FORMAT: &str = "mp3_44100_128";

const API_KEY_HEADER: &str = "xi-api-key";

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct TextToSpeechBody<'a> {
    text: &'a str,
    model_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct VoicesResponse {
    voices: Vec<VoiceData>,
}

#[derive(Debug, Deserialize)]
struct VoiceData {
    voice_id: String,
    name: String,
    #[serde(default)]
    category: Option<String>,
}

impl VoiceData {
    fn into_voice(self) -> Result<Voice, TtsError> {
        let id = VoiceId::new(self.voice_id)
            .map_err(|e| TtsError::InvalidResponse(e.to_string()))?;
        let voice = Voice::new(id, self.name);
        Ok(match self.category {
            Some(category) => voice.with_category(category),
            None => voice,
        })
    }
}

/// ElevenLabs 客户端配置
#[derive(Debug, Clone)]
pub struct ElevenLabsClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// API Key
    pub api_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 音频输出格式
    pub output_format: String,
}

impl ElevenLabsClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout_secs: 120,
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_output_format(mut self, output_format: impl Into<String>) -> Self {
        self.output_format = output_format.into();
        self
    }
}

/// ElevenLabs HTTP 客户端
pub struct ElevenLabsClient {
    client: Client,
    config: ElevenLabsClientConfig,
    base_url: Url,
}

impl ElevenLabsClient {
    /// 创建新的客户端
    pub fn new(config: ElevenLabsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| TtsError::NetworkError(format!("Invalid base URL '{}': {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(TtsError::NetworkError(format!(
                "Invalid base URL '{}': cannot be a base",
                config.base_url
            )));
        }

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// 拼接路径段；每段单独做百分号编码，音色 ID 中的 `#`、`?`、`/` 不会改变请求目标
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn voices_url(&self) -> Url {
        self.endpoint(&["v1", "voices"])
    }

    fn voice_url(&self, voice_id: &VoiceId) -> Url {
        self.endpoint(&["v1", "voices", voice_id.as_str()])
    }

    fn synthesize_url(&self, voice_id: &VoiceId, streaming: bool) -> Url {
        if streaming {
            self.endpoint(&["v1", "text-to-speech", voice_id.as_str(), "stream"])
        } else {
            self.endpoint(&["v1", "text-to-speech", voice_id.as_str()])
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(API_KEY_HEADER, &self.config.api_key)
    }

    /// 发送请求并检查状态码
    async fn send(&self, builder: RequestBuilder) -> Result<Response, TtsError> {
        let response = self.authorized(builder).send().await.map_err(map_send_error)?;
        check_status(response).await
    }

    fn synthesis_request(&self, request: &SynthesisRequest, streaming: bool) -> RequestBuilder {
        let body = TextToSpeechBody {
            text: &request.text,
            model_id: &request.model_id,
        };

        tracing::debug!(
            voice_id = %request.voice_id,
            model_id = %request.model_id,
            text_len = request.text.len(),
            streaming,
            "Sending TTS request"
        );

        self.client
            .post(self.synthesize_url(&request.voice_id, streaming))
            .query(&[("output_format", self.config.output_format.as_str())])
            .json(&body)
    }
}

async fn check_status(response: Response) -> Result<Response, TtsError> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(TtsError::ServiceError(format!(
            "HTTP {}: {}",
            status, error_text
        )));
    }
    Ok(response)
}

fn map_send_error(e: reqwest::Error) -> TtsError {
    if e.is_timeout() {
        TtsError::Timeout
    } else if e.is_connect() {
        TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
    } else {
        TtsError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl TtsProviderPort for ElevenLabsClient {
    async fn list_voices(&self) -> Result<Vec<Voice>, TtsError> {
        let response = self.send(self.client.get(self.voices_url())).await?;

        let body: VoicesResponse = response
            .json()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to parse voices: {}", e)))?;

        let voices = body
            .voices
            .into_iter()
            .map(VoiceData::into_voice)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = voices.len(), "Fetched voice catalog");
        Ok(voices)
    }

    async fn get_voice(&self, voice_id: &VoiceId) -> Result<Voice, TtsError> {
        let response = self
            .authorized(self.client.get(self.voice_url(voice_id)))
            .send()
            .await
            .map_err(map_send_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(TtsError::VoiceNotFound(voice_id.to_string()));
        }
        let response = check_status(response).await?;

        let data: VoiceData = response
            .json()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to parse voice: {}", e)))?;
        data.into_voice()
    }

    async fn synthesize(&self, request: SynthesisRequest) -> Result<Vec<u8>, TtsError> {
        let response = self.send(self.synthesis_request(&request, false)).await?;

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            voice_id = %request.voice_id,
            audio_size = audio_data.len(),
            "TTS synthesis completed"
        );
        Ok(audio_data)
    }

    async fn synthesize_stream(&self, request: SynthesisRequest) -> Result<AudioStream, TtsError> {
        let response = self.send(self.synthesis_request(&request, true)).await?;

        let stream = response
            .bytes_stream()
            .map(|chunk| {
                chunk
                    .map(|bytes| bytes.to_vec())
                    .map_err(|e| TtsError::NetworkError(e.to_string()))
            })
            .boxed();
        Ok(stream)
    }
}
