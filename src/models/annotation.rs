//! 段落批注与文档属性

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// 批注的评语部分
///
/// 宿主有时直接给字符串，有时给一个带 `critique` 字段的对象。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CritiqueAnnotation {
    Text(String),
    Detail {
        #[serde(default)]
        critique: Option<JsonValue>,
    },
}

impl CritiqueAnnotation {
    pub fn text(&self) -> String {
        match self {
            CritiqueAnnotation::Text(text) => text.clone(),
            CritiqueAnnotation::Detail { critique } => match critique {
                None | Some(JsonValue::Null) => String::new(),
                Some(JsonValue::String(text)) => text.clone(),
                Some(other) => other.to_string(),
            },
        }
    }
}

/// 宿主返回的单条批注
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostAnnotation {
    pub id: String,
    #[serde(default)]
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critique_annotation: Option<CritiqueAnnotation>,
}

/// 归属到段落的批注
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: String,
    pub state: String,
    /// 没有评语时为空串
    pub critique: String,
    pub paragraph_index: usize,
}

impl Annotation {
    pub fn from_host(paragraph_index: usize, annotation: HostAnnotation) -> Self {
        let critique = annotation
            .critique_annotation
            .as_ref()
            .map(CritiqueAnnotation::text)
            .unwrap_or_default();
        Self {
            id: annotation.id,
            state: annotation.state,
            critique,
            paragraph_index,
        }
    }
}

/// 文档属性（只含宿主已加载的字段）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentProperties {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub last_author: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentBody {
    pub text: String,
}

/// 文档对象：属性加正文文本，一次同步读出
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentObject {
    pub properties: DocumentProperties,
    pub body: DocumentBody,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn annotation(critique: Option<CritiqueAnnotation>) -> HostAnnotation {
        HostAnnotation {
            id: "a1".to_string(),
            state: "Accepted".to_string(),
            critique_annotation: critique,
        }
    }

    #[test]
    fn test_critique_as_plain_text() {
        let value: HostAnnotation =
            serde_json::from_value(json!({"id": "a1", "state": "Accepted", "critique_annotation": "Define the term"}))
                .unwrap();
        assert_eq!(Annotation::from_host(2, value).critique, "Define the term");
    }

    #[test]
    fn test_critique_as_object() {
        let value: HostAnnotation = serde_json::from_value(json!({
            "id": "a2",
            "critique_annotation": {"critique": "Too broad", "suggestions": []}
        }))
        .unwrap();
        let converted = Annotation::from_host(0, value);
        assert_eq!(converted.critique, "Too broad");
        assert_eq!(converted.state, "");
    }

    #[test]
    fn test_missing_critique_is_empty() {
        assert_eq!(Annotation::from_host(1, annotation(None)).critique, "");
        let empty = CritiqueAnnotation::Detail { critique: None };
        assert_eq!(Annotation::from_host(1, annotation(Some(empty))).critique, "");
    }

    #[test]
    fn test_non_string_critique_keeps_json() {
        let numeric = CritiqueAnnotation::Detail {
            critique: Some(json!(42)),
        };
        assert_eq!(numeric.text(), "42");
    }

    #[test]
    fn test_annotation_serializes_camel_case() {
        let value = serde_json::to_value(Annotation::from_host(3, annotation(None))).unwrap();
        assert_eq!(value, json!({"id": "a1", "state": "Accepted", "critique": "", "paragraphIndex": 3}));
    }
}
