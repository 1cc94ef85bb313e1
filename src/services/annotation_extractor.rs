//! 批注提取 - 业务能力层
//!
//! 和修订一样逐段查询，批注的段落归属才可靠；各段依次等待，不并发。

use tracing::{debug, info};

use crate::error::AppResult;
use crate::infrastructure::DocumentHost;
use crate::models::annotation::Annotation;
use crate::services::paragraph_extractor::extract_paragraphs;

/// 读取所有段落的批注，按段落顺序排列
pub async fn extract_annotations(host: &dyn DocumentHost) -> AppResult<Vec<Annotation>> {
    let paragraph_count = extract_paragraphs(host).await?.len();
    let mut annotations = Vec::new();

    for paragraph_index in 0..paragraph_count {
        let found = host.paragraph_annotations(paragraph_index).await?;
        if !found.is_empty() {
            debug!("段落 {} 有 {} 条批注", paragraph_index, found.len());
        }
        annotations.extend(
            found
                .into_iter()
                .map(|annotation| Annotation::from_host(paragraph_index, annotation)),
        );
    }

    info!("✓ 读取批注 {} 条", annotations.len());
    Ok(annotations)
}
