//! Voice Context - Value Objects

use serde::{Deserialize, Serialize};

/// 默认音色 ID（Rachel）
pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

/// 音色唯一标识
///
/// 由 TTS 提供商分配，对本系统是不透明字符串
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoiceId(String);

impl VoiceId {
    pub fn new(id: impl Into<String>) -> Result<Self, &'static str> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err("音色 ID 不能为空");
        }
        if trimmed.len() != id.len() {
            return Ok(Self(trimmed.to_string()));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VoiceId {
    fn default() -> Self {
        Self(DEFAULT_VOICE_ID.to_string())
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for VoiceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_id_rejects_blank() {
        assert!(VoiceId::new("").is_err());
        assert!(VoiceId::new("   ").is_err());
    }

    #[test]
    fn test_voice_id_trims() {
        let id = VoiceId::new("  abc123 ").unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_default_voice_id() {
        assert_eq!(VoiceId::default().as_str(), "21m00Tcm4TlvDq8ikWAM");
    }
}
