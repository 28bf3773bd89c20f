//! Voice Context - Entity

use serde::{Deserialize, Serialize};

use super::VoiceId;

/// 提供商音色
///
/// 不变量:
/// - 获取后不再修改（缓存只读）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    id: VoiceId,
    name: String,
    category: Option<String>,
}

impl Voice {
    pub fn new(id: VoiceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    // Getters
    pub fn id(&self) -> &VoiceId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}
