//! 文档快照文件
//!
//! 离线运行时用 TOML 描述一篇文档：文档属性、段落、每段的修订与批注、当前选区。

use serde::{Deserialize, Serialize};

use crate::models::annotation::{DocumentProperties, HostAnnotation};
use crate::models::document::HostTrackedChange;

/// 快照文件根结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentSnapshotFile {
    #[serde(default)]
    pub properties: DocumentProperties,
    #[serde(default)]
    pub paragraphs: Vec<SnapshotParagraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<SnapshotSelection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotParagraph {
    pub text: String,
    #[serde(default)]
    pub tracked_changes: Vec<HostTrackedChange>,
    #[serde(default)]
    pub annotations: Vec<HostAnnotation>,
}

/// 选区：落在哪个段落，选中了哪段文字（缺省为整段）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotSelection {
    pub paragraph_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl DocumentSnapshotFile {
    pub fn change_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.tracked_changes.len()).sum()
    }

    pub fn annotation_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.annotations.len()).sum()
    }
}
