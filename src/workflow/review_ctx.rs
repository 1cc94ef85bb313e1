//! 段落审阅上下文
//!
//! 封装"我正在审阅哪一段、它有几处修订"这一信息

use std::fmt::Display;

/// 段落审阅上下文
#[derive(Debug, Clone)]
pub struct ReviewCtx {
    /// 段落索引（从0开始）
    pub paragraph_index: usize,

    /// 该段落的修订数量
    pub change_count: usize,
}

impl ReviewCtx {
    pub fn new(paragraph_index: usize, change_count: usize) -> Self {
        Self {
            paragraph_index,
            change_count,
        }
    }
}

impl Display for ReviewCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[段落 #{} 修订 {} 处]",
            self.paragraph_index, self.change_count
        )
    }
}
