//! Domain Layer - 领域层
//!
//! - Voice Context: 提供商音色
//! - Sentence: 句子单元提取与产物编号

pub mod voice;

mod sentence;

pub use sentence::{artifact_index, extract_sentences, SentenceUnit, INDEX_WIDTH, PREVIEW_CHARS};
pub use voice::{Voice, VoiceId, DEFAULT_VOICE_ID};
