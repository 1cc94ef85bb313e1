//! 分析服务的请求与响应模型

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// 修订日志条目（`TrackedChange` 的线上子集）
///
/// 字段顺序即序列化顺序：`type`、`author`、`text`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLogEntry {
    #[serde(rename = "type")]
    pub change_type: String,
    pub author: String,
    pub text: String,
}

impl ChangeLogEntry {
    pub fn new(change_type: impl Into<String>, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            change_type: change_type.into(),
            author: author.into(),
            text: text.into(),
        }
    }
}

/// 单段落分析请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub paragraph: String,
    pub changelog: Vec<ChangeLogEntry>,
}

/// 批量请求中的一项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    pub paragraph_index: usize,
    pub paragraph: String,
    pub changelog: Vec<ChangeLogEntry>,
}

/// 批量分析请求
///
/// 每个至少有一条修订的段落对应一项，按 `paragraph_index` 升序排列。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequestBatch {
    pub items: Vec<BatchItem>,
}

impl AnalysisRequestBatch {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// 分析结果
///
/// 服务返回什么就保存什么，不做字段裁剪。常用字段既可能在顶层，
/// 也可能嵌套在 `analysis` 下（`{clauseIdentifier, originalClauseText, analysis}`）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(JsonValue);

impl AnalysisResult {
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &JsonValue {
        &self.0
    }

    /// 读取字符串字段，先查顶层，再查 `analysis`
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .and_then(JsonValue::as_str)
            .or_else(|| {
                self.0
                    .get("analysis")
                    .and_then(|analysis| analysis.get(name))
                    .and_then(JsonValue::as_str)
            })
    }

    pub fn clause_category(&self) -> Option<&str> {
        self.field("clauseCategory")
    }

    pub fn summary(&self) -> Option<&str> {
        self.field("summary")
    }

    pub fn risks_disclosing_party(&self) -> Option<&str> {
        self.field("risksDisclosingParty")
    }

    pub fn risks_receiving_party(&self) -> Option<&str> {
        self.field("risksReceivingParty")
    }

    pub fn improvements_disclosing_party(&self) -> Option<&str> {
        self.field("improvementsDisclosingParty")
    }

    pub fn improvements_receiving_party(&self) -> Option<&str> {
        self.field("improvementsReceivingParty")
    }

    pub fn suggested_wording(&self) -> Option<&str> {
        self.field("suggestedWording")
    }

    pub fn comments_on_changes(&self) -> Option<&str> {
        self.field("comments_on_changes")
    }

    /// 批量接口对单项失败返回 `{paragraphIndex, error}`
    pub fn error(&self) -> Option<&str> {
        self.0.get("error").and_then(JsonValue::as_str)
    }
}

/// 段落索引（字符串形式）到分析结果的映射
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResultMap(BTreeMap<String, AnalysisResult>);

impl AnalysisResultMap {
    /// 从 `{results: {...}}` 形状的响应中取出结果
    ///
    /// 缺少 `results` 或它不是对象时返回 `None`，由调用方决定如何兜底。
    pub fn from_response(response: &JsonValue) -> Option<Self> {
        let results = response.get("results")?.as_object()?;
        Some(Self(
            results
                .iter()
                .map(|(index, value)| (index.clone(), AnalysisResult::new(value.clone())))
                .collect(),
        ))
    }

    pub fn get(&self, paragraph_index: usize) -> Option<&AnalysisResult> {
        self.0.get(&paragraph_index.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_request_serialization_order() {
        let request = AnalysisRequest {
            paragraph: "The Receiving Party shall keep information confidential.".to_string(),
            changelog: vec![ChangeLogEntry::new("insertion", "Alice", "for 5 years")],
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"paragraph":"The Receiving Party shall keep information confidential.","changelog":[{"type":"insertion","author":"Alice","text":"for 5 years"}]}"#
        );
    }

    #[test]
    fn test_batch_item_uses_paragraph_index_key() {
        let batch = AnalysisRequestBatch {
            items: vec![BatchItem {
                paragraph_index: 2,
                paragraph: "C".to_string(),
                changelog: vec![],
            }],
        };
        let value = serde_json::to_value(&batch).unwrap();
        assert_eq!(value, json!({"items": [{"paragraphIndex": 2, "paragraph": "C", "changelog": []}]}));
    }

    #[test]
    fn test_result_fields_top_level_and_nested() {
        let flat = AnalysisResult::new(json!({"clauseCategory": "Confidentiality", "suggestedWording": "X"}));
        assert_eq!(flat.clause_category(), Some("Confidentiality"));
        assert_eq!(flat.suggested_wording(), Some("X"));

        let nested = AnalysisResult::new(json!({
            "clauseIdentifier": "Clause 2",
            "analysis": {"clauseCategory": "Use of Confidential Information", "summary": "S"}
        }));
        assert_eq!(nested.clause_category(), Some("Use of Confidential Information"));
        assert_eq!(nested.summary(), Some("S"));
        assert_eq!(nested.comments_on_changes(), None);
    }

    #[test]
    fn test_result_map_from_response() {
        let response = json!({"results": {"0": {"clauseCategory": "Parties"}, "7": {"paragraphIndex": 7, "error": "boom"}}});
        let map = AnalysisResultMap::from_response(&response).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(0).and_then(AnalysisResult::clause_category), Some("Parties"));
        assert_eq!(map.get(7).and_then(AnalysisResult::error), Some("boom"));
        assert!(map.get(1).is_none());
    }

    #[test]
    fn test_result_map_rejects_missing_results() {
        assert!(AnalysisResultMap::from_response(&json!({"items": []})).is_none());
        assert!(AnalysisResultMap::from_response(&json!({"results": [1, 2]})).is_none());
    }
}
