//! Process File Commands

use std::path::PathBuf;

/// 默认输出目录
pub const DEFAULT_OUTPUT_DIR: &str = "output_tts";

/// 默认语言（仅提示作用）
pub const DEFAULT_LANGUAGE: &str = "en";

/// 批量处理文本文件命令
#[derive(Debug, Clone)]
pub struct ProcessFile {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub language: String,
    /// 覆盖默认音色
    pub voice_id: Option<String>,
}

impl ProcessFile {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            language: DEFAULT_LANGUAGE.to_string(),
            voice_id: None,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_voice(mut self, voice_id: Option<String>) -> Self {
        self.voice_id = voice_id;
        self
    }
}
