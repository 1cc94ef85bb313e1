//! 快照宿主 - 基础设施层
//!
//! 内存中的 `DocumentHost` 实现，数据来自 `DocumentSnapshotFile`。
//! 用于离线运行流水线以及测试。

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::infrastructure::document_host::{ChangeTrackingMode, CompareOptions, DocumentHost};
use crate::models::annotation::{DocumentBody, DocumentObject, DocumentProperties, HostAnnotation};
use crate::models::document::{HostTrackedChange, Selection};
use crate::models::snapshot::{DocumentSnapshotFile, SnapshotParagraph, SnapshotSelection};

/// 一次比较请求的记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareRecord {
    pub path: String,
    pub options: CompareOptions,
    pub tracking_mode: ChangeTrackingMode,
}

#[derive(Debug, Default)]
struct HostState {
    properties: DocumentProperties,
    paragraphs: Vec<SnapshotParagraph>,
    selection: Option<SnapshotSelection>,
    tracking_mode: ChangeTrackingMode,
    compares: Vec<CompareRecord>,
}

/// 快照宿主
///
/// - 每次调用计一次同步点
/// - `set_online(false)` 之后所有调用都返回宿主不可用
/// - 替换选区作用在选区所在的段落上
pub struct SnapshotHost {
    state: Mutex<HostState>,
    online: AtomicBool,
    sync_count: AtomicUsize,
}

impl SnapshotHost {
    pub fn new(snapshot: DocumentSnapshotFile) -> Self {
        Self {
            state: Mutex::new(HostState {
                properties: snapshot.properties,
                paragraphs: snapshot.paragraphs,
                selection: snapshot.selection,
                ..Default::default()
            }),
            online: AtomicBool::new(true),
            sync_count: AtomicUsize::new(0),
        }
    }

    /// 只有段落文本、没有修订的文档
    pub fn from_paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(DocumentSnapshotFile {
            paragraphs: paragraphs
                .into_iter()
                .map(|text| SnapshotParagraph {
                    text: text.into(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        })
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    /// 已发生的同步点次数
    pub fn sync_count(&self) -> usize {
        self.sync_count.load(Ordering::SeqCst)
    }

    pub async fn select_paragraph(&self, paragraph_index: usize, text: Option<String>) {
        self.state.lock().await.selection = Some(SnapshotSelection { paragraph_index, text });
    }

    pub async fn paragraph_text(&self, paragraph_index: usize) -> Option<String> {
        self.state
            .lock()
            .await
            .paragraphs
            .get(paragraph_index)
            .map(|p| p.text.clone())
    }

    pub async fn tracking_mode(&self) -> ChangeTrackingMode {
        self.state.lock().await.tracking_mode
    }

    pub async fn compares(&self) -> Vec<CompareRecord> {
        self.state.lock().await.compares.clone()
    }

    fn sync(&self, operation: &str) -> AppResult<()> {
        self.sync_count.fetch_add(1, Ordering::SeqCst);
        if !self.online.load(Ordering::SeqCst) {
            return Err(AppError::host_unavailable(operation, "宿主上下文已断开"));
        }
        debug!("宿主同步: {}", operation);
        Ok(())
    }
}

#[async_trait]
impl DocumentHost for SnapshotHost {
    async fn paragraphs(&self) -> AppResult<Vec<String>> {
        self.sync("paragraphs")?;
        let state = self.state.lock().await;
        Ok(state.paragraphs.iter().map(|p| p.text.clone()).collect())
    }

    async fn paragraph_tracked_changes(&self, paragraph_index: usize) -> AppResult<Vec<HostTrackedChange>> {
        self.sync("paragraph_tracked_changes")?;
        let state = self.state.lock().await;
        let paragraph = state.paragraphs.get(paragraph_index).ok_or_else(|| {
            AppError::host_unavailable(
                "paragraph_tracked_changes",
                format!("段落 {} 已不存在", paragraph_index),
            )
        })?;
        Ok(paragraph.tracked_changes.clone())
    }

    async fn paragraph_annotations(&self, paragraph_index: usize) -> AppResult<Vec<HostAnnotation>> {
        self.sync("paragraph_annotations")?;
        let state = self.state.lock().await;
        let paragraph = state.paragraphs.get(paragraph_index).ok_or_else(|| {
            AppError::host_unavailable(
                "paragraph_annotations",
                format!("段落 {} 已不存在", paragraph_index),
            )
        })?;
        Ok(paragraph.annotations.clone())
    }

    async fn document_object(&self) -> AppResult<DocumentObject> {
        self.sync("document_object")?;
        let state = self.state.lock().await;
        let text = state
            .paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Ok(DocumentObject {
            properties: state.properties.clone(),
            body: DocumentBody { text },
        })
    }

    async fn document_tracked_changes(&self) -> AppResult<Vec<HostTrackedChange>> {
        self.sync("document_tracked_changes")?;
        let state = self.state.lock().await;
        Ok(state
            .paragraphs
            .iter()
            .flat_map(|p| p.tracked_changes.iter().cloned())
            .collect())
    }

    async fn selection(&self) -> AppResult<Selection> {
        self.sync("selection")?;
        let state = self.state.lock().await;
        let Some(selection) = &state.selection else {
            return Ok(Selection::default());
        };
        let paragraph_text = state
            .paragraphs
            .get(selection.paragraph_index)
            .map(|p| p.text.clone());
        let text = selection
            .text
            .clone()
            .or_else(|| paragraph_text.clone())
            .unwrap_or_default();
        Ok(Selection { text, paragraph_text })
    }

    async fn replace_selection(&self, text: &str) -> AppResult<()> {
        self.sync("replace_selection")?;
        let mut state = self.state.lock().await;
        let Some(selection) = state.selection.clone() else {
            return Err(AppError::host_unavailable("replace_selection", "没有选区"));
        };
        let paragraph = state
            .paragraphs
            .get_mut(selection.paragraph_index)
            .ok_or_else(|| AppError::host_unavailable("replace_selection", "选区所在段落已不存在"))?;

        match selection.text.as_deref() {
            None => paragraph.text = text.to_string(),
            // 折叠的光标：快照里没有光标位置，插入到段尾
            Some("") => paragraph.text.push_str(text),
            Some(selected) if paragraph.text.contains(selected) => {
                paragraph.text = paragraph.text.replacen(selected, text, 1);
            }
            Some(_) => {
                return Err(AppError::host_unavailable("replace_selection", "选区已失效"));
            }
        }
        // 新内容不带修订，选区变为替换后的整段
        paragraph.tracked_changes.clear();
        state.selection = Some(SnapshotSelection {
            paragraph_index: selection.paragraph_index,
            text: None,
        });
        Ok(())
    }

    async fn set_change_tracking(&self, mode: ChangeTrackingMode) -> AppResult<()> {
        self.sync("set_change_tracking")?;
        self.state.lock().await.tracking_mode = mode;
        Ok(())
    }

    async fn compare_with(&self, path: &str, options: &CompareOptions) -> AppResult<()> {
        self.sync("compare_with")?;
        let mut state = self.state.lock().await;
        let tracking_mode = state.tracking_mode;
        state.compares.push(CompareRecord {
            path: path.to_string(),
            options: options.clone(),
            tracking_mode,
        });
        Ok(())
    }

    async fn append_paragraph(&self, text: &str) -> AppResult<()> {
        self.sync("append_paragraph")?;
        self.state.lock().await.paragraphs.push(SnapshotParagraph {
            text: text.to_string(),
            ..Default::default()
        });
        Ok(())
    }
}
