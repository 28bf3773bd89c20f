//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::application::ports::PlayerKind;
use crate::application::{DEFAULT_LANGUAGE, DEFAULT_MODEL_ID, DEFAULT_OUTPUT_DIR};
use crate::domain::DEFAULT_VOICE_ID;
use crate::infrastructure::adapters::{DEFAULT_BASE_URL, DEFAULT_OUTPUT_FORMAT};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// TTS 提供商配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,

    /// 播放配置
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// TTS 提供商配置
#[derive(Clone, Deserialize)]
pub struct TtsConfig {
    /// API 基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API Key（优先级低于 ELEVEN_API_KEY 环境变量）
    #[serde(default)]
    pub api_key: Option<String>,

    /// 合成模型
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// 默认音色 ID
    #[serde(default = "default_voice_id")]
    pub default_voice_id: String,

    /// 音频输出格式
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model_id() -> String {
    DEFAULT_MODEL_ID.to_string()
}

fn default_voice_id() -> String {
    DEFAULT_VOICE_ID.to_string()
}

fn default_output_format() -> String {
    DEFAULT_OUTPUT_FORMAT.to_string()
}

fn default_tts_timeout() -> u64 {
    120
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            model_id: default_model_id(),
            default_voice_id: default_voice_id(),
            output_format: default_output_format(),
            timeout_secs: default_tts_timeout(),
        }
    }
}

// API Key 不出现在 Debug 输出中
impl std::fmt::Debug for TtsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtsConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model_id", &self.model_id)
            .field("default_voice_id", &self.default_voice_id)
            .field("output_format", &self.output_format)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// 输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// 产物目录
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// 默认语言（仅提示作用）
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            language: default_language(),
        }
    }
}

/// 播放配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaybackConfig {
    /// 外部播放器
    #[serde(default)]
    pub player: PlayerKind,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.tts.base_url, "https://api.elevenlabs.io");
        assert_eq!(config.tts.model_id, "eleven_multilingual_v2");
        assert_eq!(config.tts.default_voice_id, "21m00Tcm4TlvDq8ikWAM");
        assert_eq!(config.output.dir, PathBuf::from("output_tts"));
        assert_eq!(config.output.language, "en");
        assert_eq!(config.playback.player, PlayerKind::Auto);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = TtsConfig {
            api_key: Some("sk-secret".to_string()),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
