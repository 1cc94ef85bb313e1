/// 条款分析服务客户端
///
/// 封装所有与分析服务相关的 HTTP 调用
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::clients::diagnostics::DiagnosticSink;
use crate::config::Config;
use crate::error::{AppError, AppResult, ApiError};
use crate::models::analysis::{
    AnalysisRequest, AnalysisRequestBatch, AnalysisResult, AnalysisResultMap, ChangeLogEntry,
};

/// 条款分析客户端
///
/// 不重试、不设超时、不可取消：请求发出后要么完成，要么在网络层失败。
#[derive(Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    single_endpoint: String,
    batch_endpoint: String,
}

impl AnalysisClient {
    /// 创建新的分析客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            single_endpoint: config.single_endpoint(),
            batch_endpoint: config.batch_endpoint(),
        }
    }

    /// 指定服务地址创建客户端
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let config = Config {
            analysis_api_base_url: base_url.into(),
            ..Config::default()
        };
        Self::new(&config)
    }

    pub fn single_endpoint(&self) -> &str {
        &self.single_endpoint
    }

    pub fn batch_endpoint(&self) -> &str {
        &self.batch_endpoint
    }

    /// 分析单个段落
    ///
    /// # 参数
    /// - `paragraph`: 段落文本
    /// - `changelog`: 该段落的修订日志
    /// - `sink`: 诊断接收器（可选）
    ///
    /// # 返回
    /// 返回服务给出的分析结果，原样不动
    pub async fn analyze_single(
        &self,
        paragraph: &str,
        changelog: &[ChangeLogEntry],
        sink: Option<&dyn DiagnosticSink>,
    ) -> AppResult<AnalysisResult> {
        let request = AnalysisRequest {
            paragraph: paragraph.to_string(),
            changelog: changelog.to_vec(),
        };

        let body = self.post_json(&self.single_endpoint, &request, sink).await?;
        let value: JsonValue = serde_json::from_str(&body)
            .map_err(|e| AppError::malformed_response(&self.single_endpoint, e))?;

        debug!("单段落分析完成");
        Ok(AnalysisResult::new(value))
    }

    /// 批量分析
    ///
    /// 响应应为 `{results: {段落索引: 分析结果}}`；不是这个形状时返回空映射。
    pub async fn analyze_batch(
        &self,
        batch: &AnalysisRequestBatch,
        sink: Option<&dyn DiagnosticSink>,
    ) -> AppResult<AnalysisResultMap> {
        let body = self.post_json(&self.batch_endpoint, batch, sink).await?;
        let value: JsonValue = serde_json::from_str(&body)
            .map_err(|e| AppError::malformed_response(&self.batch_endpoint, e))?;

        match AnalysisResultMap::from_response(&value) {
            Some(results) => {
                debug!("批量分析完成，返回 {} 个结果", results.len());
                Ok(results)
            }
            None => {
                warn!("批量分析响应缺少 results 字段，按空结果处理");
                Ok(AnalysisResultMap::default())
            }
        }
    }

    /// 发送 JSON POST 请求，返回成功响应的原始响应体
    async fn post_json<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &T,
        sink: Option<&dyn DiagnosticSink>,
    ) -> AppResult<String> {
        let payload_json = serde_json::to_string(payload).map_err(ApiError::InvalidPayload)?;

        debug!("POST {} ({} 字节)", endpoint, payload_json.len());
        trace(sink, &format!("POST {} 请求体: {}", endpoint, payload_json));

        let response = self
            .http
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload_json)
            .send()
            .await
            .map_err(|e| {
                warn!("请求 {} 失败: {}", endpoint, e);
                AppError::transport(endpoint, e)
            })?;

        let status = response.status();
        trace(sink, &format!("响应状态: {}", status));

        let body = response
            .text()
            .await
            .map_err(|e| AppError::transport(endpoint, e))?;
        trace(sink, &format!("响应体: {}", body));

        if !status.is_success() {
            warn!("{} 返回错误状态 {}", endpoint, status);
            return Err(AppError::remote(endpoint, status.as_u16(), body));
        }

        Ok(body)
    }
}

fn trace(sink: Option<&dyn DiagnosticSink>, line: &str) {
    if let Some(sink) = sink {
        sink.trace(line);
    }
}
