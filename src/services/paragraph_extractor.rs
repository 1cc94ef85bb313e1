//! 段落提取 - 业务能力层

use tracing::{debug, info};

use crate::error::AppResult;
use crate::infrastructure::DocumentHost;
use crate::models::annotation::DocumentObject;
use crate::models::document::SelectedParagraph;

/// 按文档顺序读取所有段落文本
pub async fn extract_paragraphs(host: &dyn DocumentHost) -> AppResult<Vec<String>> {
    let paragraphs = host.paragraphs().await?;
    debug!("读取到 {} 个段落", paragraphs.len());
    Ok(paragraphs)
}

/// 读取文档属性和正文文本
pub async fn extract_document_object(host: &dyn DocumentHost) -> AppResult<DocumentObject> {
    let object = host.document_object().await?;
    info!(
        "✓ 文档对象: 标题 \"{}\", 正文 {} 字符",
        object.properties.title,
        object.body.text.chars().count()
    );
    Ok(object)
}

/// 读取当前选区，并在 `paragraphs` 中找到选区所在段落
///
/// 以选区第一个段落的文本做匹配，取第一个文本相同的段落；找不到时索引为 `None`。
pub async fn locate_selection(
    host: &dyn DocumentHost,
    paragraphs: &[String],
) -> AppResult<SelectedParagraph> {
    let selection = host.selection().await?;
    let paragraph_index = selection
        .paragraph_text
        .as_deref()
        .and_then(|text| paragraphs.iter().position(|p| p == text));

    debug!("选区所在段落: {:?}", paragraph_index);

    Ok(SelectedParagraph {
        selection_text: selection.text,
        paragraph_index,
    })
}
