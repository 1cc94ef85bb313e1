//! 修订提取 - 业务能力层
//!
//! 逐段查询修订，保证每条修订的段落归属准确。
//! 文档级的修订列表不带可靠的段落信息，所以每个段落单独往返一次，
//! 总耗时随段落数线性增长；各段落的查询依次等待，不并发。

use tracing::{debug, info};

use crate::error::AppResult;
use crate::infrastructure::DocumentHost;
use crate::models::document::{DocumentSnapshot, TrackedChange, UnattributedChange};
use crate::services::paragraph_extractor::extract_paragraphs;

/// 读取所有修订，按段落顺序排列
///
/// 空文档返回空列表。
pub async fn extract_tracked_changes(host: &dyn DocumentHost) -> AppResult<Vec<TrackedChange>> {
    Ok(extract_snapshot(host).await?.tracked_changes)
}

/// 在同一轮中读取段落和修订
pub async fn extract_snapshot(host: &dyn DocumentHost) -> AppResult<DocumentSnapshot> {
    let paragraphs = extract_paragraphs(host).await?;
    let mut tracked_changes = Vec::new();

    for paragraph_index in 0..paragraphs.len() {
        let changes = host.paragraph_tracked_changes(paragraph_index).await?;
        if !changes.is_empty() {
            debug!("段落 {} 有 {} 处修订", paragraph_index, changes.len());
        }
        tracked_changes.extend(
            changes
                .into_iter()
                .enumerate()
                .map(|(local_index, change)| TrackedChange::from_host(paragraph_index, local_index, change)),
        );
    }

    info!(
        "✓ 文档快照: {} 个段落, {} 处修订",
        paragraphs.len(),
        tracked_changes.len()
    );

    Ok(DocumentSnapshot {
        paragraphs,
        tracked_changes,
    })
}

/// 快照中某个段落的全部修订，保持原有顺序
pub fn changes_for_paragraph(snapshot: &DocumentSnapshot, paragraph_index: usize) -> Vec<&TrackedChange> {
    snapshot.changes_for_paragraph(paragraph_index)
}

/// 整篇文档一次性查询的修订列表
///
/// 没有段落归属，`key` 只是列表中的位置，仅用于诊断展示。
pub async fn extract_unattributed_changes(host: &dyn DocumentHost) -> AppResult<Vec<UnattributedChange>> {
    let changes = host.document_tracked_changes().await?;
    Ok(changes
        .into_iter()
        .enumerate()
        .map(|(index, change)| UnattributedChange {
            key: index.to_string(),
            date: change.date_string(),
            change_type: change.change_type,
            author: change.author,
            text: change.text,
        })
        .collect())
}
