//! Command Audio Player - 通过外部播放器程序播放音频
//!
//! 音频先写入临时文件，再调用 PATH 中的播放器，阻塞到播放结束

use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

use crate::application::ports::{AudioPlayerPort, PlaybackError, PlayerKind};

/// Auto 模式下的探测顺序
const AUTO_ORDER: &[PlayerKind] = &[
    PlayerKind::Ffplay,
    PlayerKind::Afplay,
    PlayerKind::PwPlay,
    PlayerKind::Aplay,
];

/// 外部命令播放器
#[derive(Debug, Clone)]
pub struct CommandAudioPlayer {
    kind: PlayerKind,
    /// 临时文件后缀，部分播放器依赖扩展名识别格式
    suffix: String,
}

impl CommandAudioPlayer {
    pub fn new(kind: PlayerKind) -> Self {
        Self {
            kind,
            suffix: ".mp3".to_string(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// 解析出实际要调用的播放器
    pub fn detect(&self) -> Result<PlayerKind, PlaybackError> {
        match self.kind {
            PlayerKind::Auto => AUTO_ORDER
                .iter()
                .copied()
                .find(|kind| kind.program().is_some_and(executable_in_path))
                .ok_or_else(|| {
                    PlaybackError::PlayerNotFound(
                        "install 'ffplay', 'afplay', 'pw-play' or 'aplay'".to_string(),
                    )
                }),
            kind => {
                let program = kind.program().unwrap_or_default();
                if executable_in_path(program) {
                    Ok(kind)
                } else {
                    Err(PlaybackError::PlayerNotFound(format!(
                        "player '{}' not found on PATH",
                        program
                    )))
                }
            }
        }
    }
}

/// 按 ElevenLabs output_format（如 `mp3_44100_128`、`pcm_16000`）选择临时文件后缀
pub fn suffix_for_output_format(output_format: &str) -> &'static str {
    let codec = output_format
        .split('_')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match codec.as_str() {
        "wav" => ".wav",
        "opus" => ".opus",
        "pcm" | "ulaw" | "alaw" => ".raw",
        _ => ".mp3",
    }
}

impl Default for CommandAudioPlayer {
    fn default() -> Self {
        Self::new(PlayerKind::Auto)
    }
}

/// 检查可执行文件是否在 PATH 中
fn executable_in_path(program: &str) -> bool {
    let Some(paths) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&paths).any(|dir| dir.join(program).is_file())
}

fn player_command(kind: PlayerKind, path: &Path) -> Command {
    let mut command = Command::new(kind.program().unwrap_or_default());
    if kind == PlayerKind::Ffplay {
        command.args(["-autoexit", "-nodisp", "-loglevel", "error"]);
    }
    command.arg(path);
    command
}

#[async_trait]
impl AudioPlayerPort for CommandAudioPlayer {
    async fn play(&self, audio: &[u8]) -> Result<(), PlaybackError> {
        let kind = self.detect()?;

        let temp_file = tempfile::Builder::new()
            .prefix("sayline-play-")
            .suffix(&self.suffix)
            .tempfile()
            .map_err(|e| PlaybackError::Io(e.to_string()))?;
        tokio::fs::write(temp_file.path(), audio)
            .await
            .map_err(|e| PlaybackError::Io(e.to_string()))?;

        tracing::debug!(
            player = ?kind,
            bytes = audio.len(),
            path = %temp_file.path().display(),
            "Playing audio"
        );

        let status = player_command(kind, temp_file.path())
            .status()
            .await
            .map_err(|e| PlaybackError::Io(format!("failed to launch player: {}", e)))?;

        if !status.success() {
            return Err(PlaybackError::PlayerFailed(format!(
                "audio player exited with failure status: {}",
                status
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_program_is_not_in_path() {
        assert!(!executable_in_path("sayline-definitely-not-a-player"));
    }

    #[test]
    fn test_ffplay_arguments() {
        let command = player_command(PlayerKind::Ffplay, Path::new("/tmp/a.mp3"));
        let args: Vec<_> = command.as_std().get_args().collect();
        assert_eq!(args, vec!["-autoexit", "-nodisp", "-loglevel", "error", "/tmp/a.mp3"]);
        assert_eq!(command.as_std().get_program(), "ffplay");
    }

    #[test]
    fn test_other_players_take_only_the_path() {
        let command = player_command(PlayerKind::Afplay, Path::new("/tmp/a.mp3"));
        let args: Vec<_> = command.as_std().get_args().collect();
        assert_eq!(args, vec!["/tmp/a.mp3"]);
    }

    #[test]
    fn test_suffix_follows_output_format() {
        assert_eq!(suffix_for_output_format("mp3_44100_128"), ".mp3");
        assert_eq!(suffix_for_output_format("wav_44100"), ".wav");
        assert_eq!(suffix_for_output_format("opus_48000_64"), ".opus");
        assert_eq!(suffix_for_output_format("pcm_16000"), ".raw");
        assert_eq!(suffix_for_output_format("ulaw_8000"), ".raw");
        assert_eq!(suffix_for_output_format(""), ".mp3");
    }

    #[test]
    fn test_with_suffix_overrides_default() {
        let player = CommandAudioPlayer::new(PlayerKind::Aplay)
            .with_suffix(suffix_for_output_format("wav_22050"));
        assert_eq!(player.suffix, ".wav");
    }

    #[test]
    fn test_default_is_auto() {
        let player = CommandAudioPlayer::default();
        assert_eq!(player.kind, PlayerKind::Auto);
        assert_eq!(player.suffix, ".mp3");
    }
}
