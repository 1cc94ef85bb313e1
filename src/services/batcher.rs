//! 修订分组与批量请求构建 - 业务能力层

use std::collections::BTreeMap;

use crate::models::analysis::{AnalysisRequest, AnalysisRequestBatch, BatchItem, ChangeLogEntry};
use crate::models::document::TrackedChange;
use crate::services::sanitizer::sanitize;

/// 清洗后的修订日志条目
fn sanitized_entry(change: &TrackedChange) -> ChangeLogEntry {
    ChangeLogEntry {
        change_type: sanitize(change.change_type.as_str()),
        author: sanitize(&change.author),
        text: sanitize(&change.text),
    }
}

/// 按段落分组，构建批量请求
///
/// - 只为出现在 `changes` 中的段落生成条目，没有修订的段落不会出现
/// - 段落索引越界时段落文本用空串代替
/// - 条目按 `paragraph_index` 升序
pub fn build_batch(changes: &[TrackedChange], paragraphs: &[String]) -> AnalysisRequestBatch {
    let mut groups: BTreeMap<usize, Vec<ChangeLogEntry>> = BTreeMap::new();
    for change in changes {
        groups
            .entry(change.paragraph_index)
            .or_default()
            .push(sanitized_entry(change));
    }

    let items = groups
        .into_iter()
        .filter(|(_, changelog)| !changelog.is_empty())
        .map(|(paragraph_index, changelog)| BatchItem {
            paragraph_index,
            paragraph: sanitize(paragraphs.get(paragraph_index).map(String::as_str).unwrap_or("")),
            changelog,
        })
        .collect();

    AnalysisRequestBatch { items }
}

/// 为单个段落构建分析请求
pub fn build_request(paragraph: &str, changes: &[&TrackedChange]) -> AnalysisRequest {
    AnalysisRequest {
        paragraph: sanitize(paragraph),
        changelog: changes.iter().map(|change| sanitized_entry(change)).collect(),
    }
}
