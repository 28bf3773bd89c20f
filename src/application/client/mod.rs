//! TTS Client Wrapper
//!
//! 持有 API Key、提供商会话、音色缓存与当前音色

mod tts_client;

pub use tts_client::{
    resolve_api_key, SynthesisOutcome, TtsClient, TtsClientSettings, DEFAULT_MODEL_ID,
};
