//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod artifact_storage;
mod audio_player;
mod client_factory;
mod tts_provider;

pub use artifact_storage::{ArtifactStoragePort, StorageError, AUDIO_PLACEHOLDER};
pub use audio_player::{AudioPlayerPort, PlaybackError, PlayerKind};
pub use client_factory::TtsClientFactory;
pub use tts_provider::{AudioStream, SynthesisRequest, TtsError, TtsProviderPort};
