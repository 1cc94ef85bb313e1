//! 文本清洗 - 业务能力层
//!
//! 发送前把 ASCII 控制字符替换为空格

/// 把 0x00–0x1F 和 0x7F 逐个替换为一个空格
///
/// 引号、反斜杠、非 ASCII 字符保持不变。
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_characters_become_spaces() {
        assert_eq!(sanitize("a\tb\nc\r\u{0}d\u{7f}"), "a b c  d ");
        assert_eq!(sanitize("line\u{0b}break"), "line break");
    }

    #[test]
    fn test_quotes_backslashes_and_unicode_untouched() {
        let text = r#"„Receiving Party“ said "ok" \ ß 保密"#;
        assert_eq!(sanitize(text), text);
    }

    #[test]
    fn test_c1_controls_are_kept() {
        // 只处理 ASCII 范围
        assert_eq!(sanitize("\u{85}"), "\u{85}");
    }

    #[test]
    fn test_empty() {
        assert_eq!(sanitize(""), "");
    }
}
