//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（sayline.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["sayline", "sayline.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "SAYLINE";

/// 加载应用配置
///
/// # 环境变量示例
/// - `SAYLINE_TTS__MODEL_ID=eleven_turbo_v2_5`
/// - `SAYLINE_TTS__DEFAULT_VOICE_ID=pNInz6obpgDQGcFmaJgB`
/// - `SAYLINE_OUTPUT__DIR=/data/tts`
/// - `SAYLINE_PLAYBACK__PLAYER=ffplay`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径（指定时必须存在），为 None 则搜索默认文件
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("tts.base_url", "https://api.elevenlabs.io")?
        .set_default("tts.model_id", "eleven_multilingual_v2")?
        .set_default("tts.default_voice_id", "21m00Tcm4TlvDq8ikWAM")?
        .set_default("tts.output_format", "mp3_44100_128")?
        .set_default("tts.timeout_secs", 120)?
        .set_default("output.dir", "output_tts")?
        .set_default("output.language", "en")?
        .set_default("playback.player", "auto")?
        .set_default("log.level", "info")?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 层级分隔符: __ (双下划线)，例如 SAYLINE_TTS__BASE_URL
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.tts.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS base URL cannot be empty".to_string(),
        ));
    }

    if config.tts.model_id.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS model ID cannot be empty".to_string(),
        ));
    }

    if config.tts.default_voice_id.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Default voice ID cannot be empty".to_string(),
        ));
    }

    if config.tts.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "TTS timeout cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（API Key 只显示是否已配置）
pub fn print_config(config: &AppConfig) {
    tracing::debug!("=== Application Configuration ===");
    tracing::debug!("TTS Base URL: {}", config.tts.base_url);
    tracing::debug!("TTS API Key configured: {}", config.tts.api_key.is_some());
    tracing::debug!("TTS Model: {}", config.tts.model_id);
    tracing::debug!("TTS Default Voice: {}", config.tts.default_voice_id);
    tracing::debug!("TTS Output Format: {}", config.tts.output_format);
    tracing::debug!("TTS Timeout: {}s", config.tts.timeout_secs);
    tracing::debug!("Output Directory: {:?}", config.output.dir);
    tracing::debug!("Language: {}", config.output.language);
    tracing::debug!("Player: {:?}", config.playback.player);
    tracing::debug!("Log Level: {}", config.log.level);
    tracing::debug!("=================================");
}
