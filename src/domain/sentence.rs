//! 句子单元提取
//!
//! 每一个去除首尾空白后非空的行就是一个句子单元，不做自然语言分句

/// 产物编号的最小宽度（001, 002, ...）
pub const INDEX_WIDTH: usize = 3;

/// 进度日志中句子预览的最大字符数
pub const PREVIEW_CHARS: usize = 50;

/// 句子单元
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceUnit {
    /// 从 1 开始的序号（空行不占序号）
    pub position: usize,
    /// 去除首尾空白后的行内容
    pub text: String,
}

impl SentenceUnit {
    /// 产物文件名主干，至少三位补零，超过 999 自然增长
    pub fn index(&self) -> String {
        artifact_index(self.position)
    }

    /// 截断后的预览文本
    pub fn preview(&self) -> &str {
        preview(&self.text, PREVIEW_CHARS)
    }
}

/// 将序号格式化为产物编号
#[inline]
pub fn artifact_index(position: usize) -> String {
    format!("{:0width$}", position, width = INDEX_WIDTH)
}

/// 从文本中提取句子单元
///
/// 保留原始行序；空白行被整体丢弃，不影响后续编号。
/// `\n`、`\r\n` 与单独的 `\r` 都视为行尾
pub fn extract_sentences(text: &str) -> Vec<SentenceUnit> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| SentenceUnit {
            position: i + 1,
            text: line.to_string(),
        })
        .collect()
}

/// 按字符截断（不会切断多字节字符）
fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_do_not_shift_numbering() {
        let sentences = extract_sentences("a\n\nb\n");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "a");
        assert_eq!(sentences[0].index(), "001");
        assert_eq!(sentences[1].text, "b");
        assert_eq!(sentences[1].index(), "002");
    }

    #[test]
    fn test_lines_are_trimmed() {
        let sentences = extract_sentences("  Hello world \t\n   \nSecond line.");
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello world", "Second line."]);
    }

    #[test]
    fn test_crlf_input() {
        let sentences = extract_sentences("first\r\n\r\nsecond\r\n");
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_lone_carriage_return_ends_a_line() {
        let sentences = extract_sentences("first\rsecond\r\rthird");
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(sentences[2].index(), "003");
    }

    #[test]
    fn test_mixed_line_endings() {
        let sentences = extract_sentences("a\r\nb\rc\n\r\nd");
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(extract_sentences("").is_empty());
        assert!(extract_sentences("   \n\t\n\n").is_empty());
    }

    #[test]
    fn test_index_grows_past_three_digits() {
        assert_eq!(artifact_index(7), "007");
        assert_eq!(artifact_index(999), "999");
        assert_eq!(artifact_index(1000), "1000");
        assert_eq!(artifact_index(12345), "12345");
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let text = "你好世界".repeat(20);
        let unit = SentenceUnit {
            position: 1,
            text,
        };
        assert_eq!(unit.preview().chars().count(), PREVIEW_CHARS);

        let short = SentenceUnit {
            position: 1,
            text: "short".to_string(),
        };
        assert_eq!(short.preview(), "short");
    }
}
