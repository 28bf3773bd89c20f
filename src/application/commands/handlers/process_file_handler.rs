//! Process File Handler - 批处理驱动
//!
//! 逐行处理输入文件，每个句子单元产出一对 `<index>.txt` / `<index>.wav`。
//! 单句合成失败只影响该句：记录诊断、写入占位内容后继续下一句。

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::client::SynthesisOutcome;
use crate::application::commands::ProcessFile;
use crate::application::error::ApplicationError;
use crate::application::ports::{ArtifactStoragePort, TtsClientFactory};
use crate::domain::extract_sentences;

/// 批处理结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessReport {
    /// 解析后的输出目录
    pub output_dir: PathBuf,
    /// 句子单元数量
    pub sentences: usize,
    /// 成功写入音频的数量
    pub synthesized: usize,
    /// 合成失败（已写占位内容）的数量
    pub failed: usize,
    /// 因未选中音色而跳过的数量
    pub skipped: usize,
}

impl ProcessReport {
    pub fn is_empty(&self) -> bool {
        self.sentences == 0
    }
}

/// ProcessFile Handler
pub struct ProcessFileHandler {
    client_factory: Arc<dyn TtsClientFactory>,
    storage: Arc<dyn ArtifactStoragePort>,
}

impl ProcessFileHandler {
    pub fn new(
        client_factory: Arc<dyn TtsClientFactory>,
        storage: Arc<dyn ArtifactStoragePort>,
    ) -> Self {
        Self {
            client_factory,
            storage,
        }
    }

    /// 执行批处理
    ///
    /// 准备阶段（客户端、输入文件）的失败以错误返回；
    /// 循环内的合成失败被逐句隔离
    pub async fn handle(&self, command: ProcessFile) -> Result<ProcessReport, ApplicationError> {
        let mut client = self.client_factory.connect().await?;

        // 选择失败只记录日志，后续合成会空操作
        let voice_id = command
            .voice_id
            .clone()
            .unwrap_or_else(|| client.settings().default_voice_id.clone());
        client.select_voice(&voice_id).await;

        client.set_language(&command.language);

        // 输出目录先于输入检查创建
        self.storage.prepare_dir(&command.output_dir).await?;

        let content = self.storage.read_input(&command.input_path).await?;

        let sentences = extract_sentences(&content);
        let mut report = ProcessReport {
            output_dir: command.output_dir.clone(),
            sentences: sentences.len(),
            ..Default::default()
        };

        if sentences.is_empty() {
            tracing::warn!(
                input = %command.input_path.display(),
                "No non-empty lines found in {}",
                command.input_path.display()
            );
            return Ok(report);
        }

        tracing::info!(count = sentences.len(), "Found {} sentences to process.", sentences.len());

        for sentence in &sentences {
            let index = sentence.index();

            tracing::info!(
                "Processing sentence {}/{}: '{}...'",
                sentence.position,
                sentences.len(),
                sentence.preview()
            );

            let text_path = self
                .storage
                .save_text(&command.output_dir, &index, &sentence.text)
                .await?;
            tracing::info!("Saved text to {}", text_path.display());

            let audio_path = self.storage.audio_path(&command.output_dir, &index);
            match client.synthesize_to_file(&sentence.text, &audio_path).await {
                Ok(SynthesisOutcome::NoVoice) => report.skipped += 1,
                Ok(_) => report.synthesized += 1,
                Err(e) => {
                    report.failed += 1;
                    tracing::error!(
                        index = %index,
                        "Error generating TTS for sentence '{}': {}",
                        sentence.text,
                        e
                    );
                    if let Err(e) = self
                        .storage
                        .save_placeholder(&command.output_dir, &index)
                        .await
                    {
                        tracing::error!(index = %index, error = %e, "Failed to write audio placeholder");
                    }
                }
            }
        }

        report.output_dir = self.storage.resolve_dir(&command.output_dir).await;

        tracing::info!(
            sentences = report.sentences,
            synthesized = report.synthesized,
            failed = report.failed,
            skipped = report.skipped,
            "Processing complete."
        );
        tracing::info!("Output files saved in: {}", report.output_dir.display());

        Ok(report)
    }
}
