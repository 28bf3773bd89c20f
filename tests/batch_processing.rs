//! 批处理端到端测试（Fake 提供商 + 真实文件系统）

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

use sayline::application::{
    ApplicationError, AudioPlayerPort, PlaybackError, ProcessFile, ProcessFileHandler, TtsClient,
    TtsClientFactory, TtsClientSettings, AUDIO_PLACEHOLDER,
};
use sayline::infrastructure::adapters::{FakeTtsClient, FakeTtsClientConfig, FileArtifactStorage};

struct MutePlayer;

#[async_trait]
impl AudioPlayerPort for MutePlayer {
    async fn play(&self, _audio: &[u8]) -> Result<(), PlaybackError> {
        Ok(())
    }
}

struct FakeFactory {
    provider: Arc<FakeTtsClient>,
}

#[async_trait]
impl TtsClientFactory for FakeFactory {
    async fn connect(&self) -> Result<TtsClient, ApplicationError> {
        TtsClient::initialize(
            "integration-key",
            self.provider.clone(),
            Arc::new(MutePlayer),
            TtsClientSettings::default(),
        )
        .await
    }
}

fn handler(config: FakeTtsClientConfig) -> (ProcessFileHandler, Arc<FakeTtsClient>) {
    let provider = Arc::new(FakeTtsClient::new(config));
    let handler = ProcessFileHandler::new(
        Arc::new(FakeFactory {
            provider: provider.clone(),
        }),
        Arc::new(FileArtifactStorage::new()),
    );
    (handler, provider)
}

fn sorted_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn produces_one_pair_per_non_blank_line() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("story.txt");
    std::fs::write(&input, "Hello world\n  \nSecond line.\n").unwrap();
    let out = dir.path().join("out");

    let (handler, provider) = handler(FakeTtsClientConfig::default());
    let report = handler
        .handle(ProcessFile::new(&input).with_output_dir(&out).with_language("en"))
        .await
        .unwrap();

    assert_eq!(report.sentences, 2);
    assert!(report.output_dir.is_absolute());
    assert_eq!(
        sorted_entries(&out),
        vec!["001.txt", "001.wav", "002.txt", "002.wav"]
    );
    assert_eq!(std::fs::read_to_string(out.join("001.txt")).unwrap(), "Hello world");
    assert_eq!(std::fs::read_to_string(out.join("002.txt")).unwrap(), "Second line.");

    let texts: Vec<String> = provider.calls().into_iter().map(|c| c.text).collect();
    assert_eq!(texts, vec!["Hello world", "Second line."]);
}

#[tokio::test]
async fn failures_are_isolated_per_line() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("story.txt");
    std::fs::write(&input, "ok one\nexplode here\nok two\nexplode again\nok three\n").unwrap();
    let out = dir.path().join("out");

    let (handler, _) = handler(FakeTtsClientConfig {
        fail_on: vec!["explode".to_string()],
        ..Default::default()
    });
    let report = handler
        .handle(ProcessFile::new(&input).with_output_dir(&out))
        .await
        .unwrap();

    assert_eq!(report.sentences, 5);
    assert_eq!(report.synthesized, 3);
    assert_eq!(report.failed, 2);
    for index in ["002", "004"] {
        let wav = std::fs::read_to_string(out.join(format!("{index}.wav"))).unwrap();
        assert_eq!(wav, AUDIO_PLACEHOLDER);
    }
    for index in ["001", "003", "005"] {
        let wav = std::fs::read(out.join(format!("{index}.wav"))).unwrap();
        assert_eq!(wav, FakeTtsClientConfig::default().audio_data);
    }
}

#[tokio::test]
async fn numbering_grows_past_three_digits() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("long.txt");
    let lines: Vec<String> = (1..=1001).map(|i| format!("line {i}")).collect();
    std::fs::write(&input, lines.join("\n\n")).unwrap();
    let out = dir.path().join("out");

    let (handler, _) = handler(FakeTtsClientConfig::default());
    let report = handler
        .handle(ProcessFile::new(&input).with_output_dir(&out))
        .await
        .unwrap();

    assert_eq!(report.sentences, 1001);
    assert_eq!(std::fs::read_to_string(out.join("999.txt")).unwrap(), "line 999");
    assert_eq!(std::fs::read_to_string(out.join("1000.txt")).unwrap(), "line 1000");
    assert_eq!(std::fs::read_to_string(out.join("1001.txt")).unwrap(), "line 1001");
}

#[tokio::test]
async fn missing_input_reports_not_found() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("fresh");

    let (handler, _) = handler(FakeTtsClientConfig::default());
    let err = handler
        .handle(ProcessFile::new(dir.path().join("absent.txt")).with_output_dir(&out))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::InputNotFound(_)));
    assert!(err.is_setup_failure());
    assert!(out.is_dir());
    assert!(sorted_entries(&out).is_empty());
}
