//! 宿主编辑器能力 - 基础设施层
//!
//! 宿主文档由宿主进程持有，每次读写都是一次"请求 → 确认"的往返（同步点）。
//! 这里只描述能力本身；提取、分组等逻辑都通过显式传入的 `&dyn DocumentHost` 使用它。

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::annotation::{DocumentObject, HostAnnotation};
use crate::models::document::{HostTrackedChange, Selection};

/// 修订跟踪模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeTrackingMode {
    #[default]
    Off,
    TrackAll,
    TrackMineOnly,
}

/// 比较结果写入的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareTarget {
    /// 直接在当前文档中显示差异
    #[default]
    Current,
    /// 在新文档中显示差异
    New,
}

/// 文档比较选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    pub compare_target: CompareTarget,
    pub detect_format_changes: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            compare_target: CompareTarget::Current,
            detect_format_changes: true,
        }
    }
}

/// 宿主编辑器
///
/// 职责：
/// - 暴露读取段落、修订、批注、选区、文档属性的能力
/// - 暴露替换选区、比较文档、追加段落的能力
/// - 不认识批量请求 / 分析结果
///
/// 每个方法都是一次独立的同步点，调用方必须等上一次返回后再发起下一次。
#[async_trait]
pub trait DocumentHost: Send + Sync {
    /// 按文档顺序读取所有段落文本
    async fn paragraphs(&self) -> AppResult<Vec<String>>;

    /// 读取某个段落自己的修订列表
    async fn paragraph_tracked_changes(&self, paragraph_index: usize) -> AppResult<Vec<HostTrackedChange>>;

    /// 读取某个段落的批注列表
    async fn paragraph_annotations(&self, paragraph_index: usize) -> AppResult<Vec<HostAnnotation>>;

    /// 读取文档属性与正文文本
    async fn document_object(&self) -> AppResult<DocumentObject>;

    /// 读取整篇文档的修订列表（不带段落归属）
    async fn document_tracked_changes(&self) -> AppResult<Vec<HostTrackedChange>>;

    /// 读取当前选区
    async fn selection(&self) -> AppResult<Selection>;

    /// 用给定文本替换当前选区
    async fn replace_selection(&self, text: &str) -> AppResult<()>;

    /// 设置修订跟踪模式
    async fn set_change_tracking(&self, mode: ChangeTrackingMode) -> AppResult<()>;

    /// 与参考文档比较，差异以修订形式写入
    async fn compare_with(&self, path: &str, options: &CompareOptions) -> AppResult<()>;

    /// 在正文末尾追加一个段落
    async fn append_paragraph(&self, text: &str) -> AppResult<()>;
}
