//! Audio Player Port - 本地音频输出抽象

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// 播放错误
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("No audio player found: {0}")]
    PlayerNotFound(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Player failed: {0}")]
    PlayerFailed(String),
}

/// 外部播放器选择
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    /// 按 ffplay > afplay > pw-play > aplay 顺序探测
    #[default]
    Auto,
    Ffplay,
    Afplay,
    PwPlay,
    Aplay,
}

impl PlayerKind {
    /// 可执行文件名（Auto 没有对应程序）
    pub fn program(&self) -> Option<&'static str> {
        match self {
            Self::Auto => None,
            Self::Ffplay => Some("ffplay"),
            Self::Afplay => Some("afplay"),
            Self::PwPlay => Some("pw-play"),
            Self::Aplay => Some("aplay"),
        }
    }
}

/// Audio Player Port
#[async_trait]
pub trait AudioPlayerPort: Send + Sync {
    /// 播放一段完整的编码音频，阻塞到播放结束
    async fn play(&self, audio: &[u8]) -> Result<(), PlaybackError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        player: PlayerKind,
    }

    #[test]
    fn test_player_kind_deserialize() {
        let w: Wrapper = serde_json::from_str(r#"{"player":"pw-play"}"#).unwrap();
        assert_eq!(w.player, PlayerKind::PwPlay);
        assert_eq!(w.player.program(), Some("pw-play"));

        let w: Wrapper = serde_json::from_str(r#"{"player":"auto"}"#).unwrap();
        assert_eq!(w.player, PlayerKind::Auto);
        assert!(w.player.program().is_none());
    }
}
