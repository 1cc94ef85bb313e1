//! 文档修改 - 业务能力层
//!
//! 替换选区、与参考文档比较、追加段落

use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::infrastructure::{ChangeTrackingMode, CompareOptions, DocumentHost};

/// 用建议文本替换当前选区
pub async fn replace_selection_with(host: &dyn DocumentHost, text: &str) -> AppResult<()> {
    debug!("替换选区, 新文本长度: {} 字符", text.chars().count());
    host.replace_selection(text).await
}

/// 与参考文档比较
///
/// 先把修订跟踪切到"全部跟踪"并同步，再发起比较，差异以修订形式出现在当前文档中。
pub async fn compare_documents(
    host: &dyn DocumentHost,
    path: &str,
    options: &CompareOptions,
) -> AppResult<()> {
    if path.trim().is_empty() {
        return Err(AppError::Validation("请选择要比较的文档".to_string()));
    }

    host.set_change_tracking(ChangeTrackingMode::TrackAll).await?;
    host.compare_with(path, options).await?;

    info!("✓ 已与参考文档比较: {}", path);
    Ok(())
}

/// 在正文末尾追加段落
pub async fn append_paragraph(host: &dyn DocumentHost, text: &str) -> AppResult<()> {
    host.append_paragraph(text).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{CompareTarget, SnapshotHost};
    use crate::services::paragraph_extractor::extract_paragraphs;

    #[tokio::test]
    async fn test_replace_selection_with() {
        let host = SnapshotHost::from_paragraphs(["old clause", "other"]);
        host.select_paragraph(0, None).await;
        replace_selection_with(&host, "new clause").await.unwrap();
        assert_eq!(extract_paragraphs(&host).await.unwrap(), vec!["new clause", "other"]);
    }

    #[tokio::test]
    async fn test_replace_on_lost_host() {
        let host = SnapshotHost::from_paragraphs(["A"]);
        host.select_paragraph(0, None).await;
        host.set_online(false);
        assert!(replace_selection_with(&host, "B").await.unwrap_err().is_host_unavailable());
    }

    #[tokio::test]
    async fn test_compare_turns_on_tracking_first() {
        let host = SnapshotHost::from_paragraphs(["A"]);
        compare_documents(&host, "reference.docx", &CompareOptions::default())
            .await
            .unwrap();

        let compares = host.compares().await;
        assert_eq!(compares.len(), 1);
        assert_eq!(compares[0].path, "reference.docx");
        assert_eq!(compares[0].tracking_mode, ChangeTrackingMode::TrackAll);
        assert_eq!(compares[0].options.compare_target, CompareTarget::Current);
        assert!(compares[0].options.detect_format_changes);
    }

    #[tokio::test]
    async fn test_compare_rejects_empty_path() {
        let host = SnapshotHost::from_paragraphs(["A"]);
        let err = compare_documents(&host, "  ", &CompareOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(host.sync_count(), 0);
    }

    #[tokio::test]
    async fn test_append_paragraph() {
        let host = SnapshotHost::from_paragraphs(["A"]);
        append_paragraph(&host, "B").await.unwrap();
        assert_eq!(extract_paragraphs(&host).await.unwrap(), vec!["A", "B"]);
    }
}
