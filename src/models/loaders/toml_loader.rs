use crate::error::{AppResult, FileError};
use crate::models::snapshot::DocumentSnapshotFile;
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载文档快照
pub async fn load_snapshot_file(toml_file_path: &Path) -> AppResult<DocumentSnapshotFile> {
    let path = toml_file_path.display().to_string();

    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|source| FileError::ReadFailed {
            path: path.clone(),
            source,
        })?;

    let snapshot = parse_snapshot(&content).map_err(|source| FileError::TomlParseFailed {
        path: path.clone(),
        source,
    })?;

    tracing::info!(
        "成功加载快照 {}: {} 个段落, {} 处修订",
        path,
        snapshot.paragraphs.len(),
        snapshot.change_count()
    );

    Ok(snapshot)
}

/// 解析 TOML 文本
pub fn parse_snapshot(content: &str) -> Result<DocumentSnapshotFile, toml::de::Error> {
    toml::from_str(content)
}
