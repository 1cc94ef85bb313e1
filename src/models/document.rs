//! 文档模型
//!
//! 段落文本、修订记录，以及一次提取得到的文档快照

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 修订类型
///
/// 宿主可能用 `Added` / `Deleted` / `Formatted` 这类名称，也可能直接给
/// `insertion` / `deletion` / `formatChange`，两种写法都归一到同一个变体。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChangeType {
    Insertion,
    Deletion,
    FormatChange,
    /// 其他类型，原样保留
    Other(String),
}

impl ChangeType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "insertion" | "Added" | "added" => ChangeType::Insertion,
            "deletion" | "Deleted" | "deleted" => ChangeType::Deletion,
            "formatChange" | "Formatted" | "formatted" => ChangeType::FormatChange,
            other => ChangeType::Other(other.to_string()),
        }
    }

    /// 线上传输使用的名称
    pub fn as_str(&self) -> &str {
        match self {
            ChangeType::Insertion => "insertion",
            ChangeType::Deletion => "deletion",
            ChangeType::FormatChange => "formatChange",
            ChangeType::Other(raw) => raw,
        }
    }
}

impl From<String> for ChangeType {
    fn from(raw: String) -> Self {
        ChangeType::parse(&raw)
    }
}

impl From<ChangeType> for String {
    fn from(change_type: ChangeType) -> Self {
        change_type.as_str().to_string()
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 宿主返回的单条修订（尚未归属到段落）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostTrackedChange {
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub text: String,
}

impl HostTrackedChange {
    /// 时间戳的规范字符串形式（RFC 3339），缺失时为空串
    pub fn date_string(&self) -> String {
        self.date.map(|d| d.to_rfc3339()).unwrap_or_default()
    }
}

/// 归属到段落的修订记录
///
/// 每次提取时重新生成，生成后不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedChange {
    /// `"{段落索引}-{段内索引}"`
    pub key: String,
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    pub author: String,
    pub date: String,
    pub text: String,
    pub paragraph_index: usize,
}

impl TrackedChange {
    pub fn from_host(paragraph_index: usize, local_index: usize, change: HostTrackedChange) -> Self {
        let date = change.date_string();
        Self {
            key: format!("{}-{}", paragraph_index, local_index),
            change_type: change.change_type,
            author: change.author,
            date,
            text: change.text,
            paragraph_index,
        }
    }
}

/// 整篇文档范围查询得到的修订，没有段落归属
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnattributedChange {
    /// 在文档级修订列表中的位置
    pub key: String,
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    pub author: String,
    pub date: String,
    pub text: String,
}

/// 同一轮读取得到的段落和修订
///
/// 段落与修订必须一起读取，`paragraph_index` 才能和 `paragraphs` 对得上。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub paragraphs: Vec<String>,
    pub tracked_changes: Vec<TrackedChange>,
}

impl DocumentSnapshot {
    /// 某个段落的全部修订
    pub fn changes_for_paragraph(&self, paragraph_index: usize) -> Vec<&TrackedChange> {
        self.tracked_changes
            .iter()
            .filter(|change| change.paragraph_index == paragraph_index)
            .collect()
    }

    pub fn paragraph(&self, paragraph_index: usize) -> Option<&str> {
        self.paragraphs.get(paragraph_index).map(String::as_str)
    }
}

/// 当前选区
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// 选中的文本
    pub text: String,
    /// 选区所在的第一个段落的文本
    pub paragraph_text: Option<String>,
}

/// 选区与段落索引的对应结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedParagraph {
    pub selection_text: String,
    pub paragraph_index: Option<usize>,
}
