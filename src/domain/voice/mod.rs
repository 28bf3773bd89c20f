//! Voice Context - 音色上下文
//!
//! 职责:
//! - 提供商音色的标识与元数据
//! - 默认音色常量

mod aggregate;
mod value_objects;

pub use aggregate::Voice;
pub use value_objects::{VoiceId, DEFAULT_VOICE_ID};
