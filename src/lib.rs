//! sayline - 逐行文本转语音批处理工具
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice: 提供商音色
//! - Sentence: 句子单元提取与产物编号
//!
//! 应用层 (application/):
//! - Ports: TtsProvider, AudioPlayer, ArtifactStorage, ClientFactory
//! - Client: TTS 客户端封装（音色缓存、当前音色、合成）
//! - Commands: ProcessFile 批处理
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: ElevenLabs Client, Fake Client, File Storage, Command Player
//! - Bootstrap: 客户端组装

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;
