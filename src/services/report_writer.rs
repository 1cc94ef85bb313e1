//! 审阅报告写入服务 - 业务能力层
//!
//! 只负责"写报告文件"能力，不关心流程

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::{AppResult, FileError};

/// 审阅报告写入服务
///
/// 职责：
/// - 创建带时间戳抬头的报告文件
/// - 每个段落追加一段记录
/// - 不关心分析结果从哪里来
pub struct ReportWriter {
    report_file_path: String,
}

impl ReportWriter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            report_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.report_file_path
    }

    /// 初始化报告文件（覆盖旧内容）
    pub async fn init(&self) -> AppResult<()> {
        let header = format!(
            "{}\n条款审阅报告 - {}\n{}\n\n",
            "=".repeat(60),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            "=".repeat(60)
        );
        fs::write(&self.report_file_path, header)
            .await
            .map_err(|source| self.write_failed(source))?;
        Ok(())
    }

    /// 追加一个段落的审阅记录
    ///
    /// # 参数
    /// - `paragraph_index`: 段落索引
    /// - `heading`: 标题行（条款类别或失败说明）
    /// - `body`: 正文（建议措辞等）
    pub async fn write(&self, paragraph_index: usize, heading: &str, body: &str) -> AppResult<()> {
        debug!("写入报告: 段落 {} | {}", paragraph_index, heading);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.report_file_path)
            .await
            .map_err(|source| self.write_failed(source))?;

        let entry = format!(
            "段落 {} | {}\n{}\n{}\n",
            paragraph_index,
            heading,
            body,
            "-".repeat(60)
        );

        file.write_all(entry.as_bytes())
            .await
            .map_err(|source| self.write_failed(source))?;

        Ok(())
    }

    fn write_failed(&self, source: std::io::Error) -> FileError {
        FileError::WriteFailed {
            path: self.report_file_path.clone(),
            source,
        }
    }
}
