//! 条款审阅流程 - 流程层
//!
//! 核心职责：定义"一篇文档 / 一个选区"的完整审阅流程
//!
//! 流程顺序：
//! 1. 读取快照（段落 + 逐段修订）
//! 2. 按段落分组构建请求
//! 3. 发送到分析服务
//! 4. （可选）用建议措辞替换选区
//!
//! 本层是唯一把错误转换为用户提示的地方，提示对所有错误类型都一样。

use tracing::{error, info, warn};

use crate::clients::{AnalysisClient, DiagnosticSink, TracingSink};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::DocumentHost;
use crate::models::analysis::AnalysisResult;
use crate::services::{
    build_batch, build_request, extract_snapshot, locate_selection, replace_selection_with,
};
use crate::utils::logging::truncate_text;
use crate::workflow::review_ctx::ReviewCtx;

/// 所有失败共用的用户提示
pub const FAILURE_MESSAGE: &str = "The request failed. See diagnostics for details.";
/// 建议措辞已写入文档
pub const REPLACED_MESSAGE: &str = "Paragraph replaced with the suggested wording.";
/// 批量结果里没有该段落
pub const MISSING_RESULT_MESSAGE: &str = "The analysis service returned no result for this paragraph.";
/// 分析结果里没有建议措辞
pub const NO_SUGGESTION_MESSAGE: &str = "No suggested wording available for this paragraph.";

static TRACING_SINK: TracingSink = TracingSink;

/// 把错误转换为面向用户的提示
///
/// 错误类型不影响提示内容，详细信息只进日志和诊断输出。
pub fn user_message(err: &AppError) -> String {
    error!("❌ {}", err);
    FAILURE_MESSAGE.to_string()
}

/// 单个段落的审阅结果
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphReview {
    pub paragraph_index: usize,
    pub paragraph: String,
    pub change_count: usize,
    /// 服务没有返回该段落时为 `None`
    pub result: Option<AnalysisResult>,
}

impl ParagraphReview {
    /// 该段落失败的原因；分析成功时为 `None`
    pub fn failure(&self) -> Option<&str> {
        match &self.result {
            None => Some(MISSING_RESULT_MESSAGE),
            Some(result) => result.error(),
        }
    }

    pub fn is_analyzed(&self) -> bool {
        self.failure().is_none()
    }
}

/// 条款审阅流程
///
/// - 编排 提取 → 分组 → 分析 → 替换
/// - 宿主由调用方传入，本结构不持有文档
/// - 只依赖业务能力（services / clients）
pub struct ReviewFlow {
    client: AnalysisClient,
    verbose_logging: bool,
}

impl ReviewFlow {
    pub fn new(config: &Config) -> Self {
        Self {
            client: AnalysisClient::new(config),
            verbose_logging: config.verbose_logging,
        }
    }

    pub fn with_client(client: AnalysisClient, verbose_logging: bool) -> Self {
        Self {
            client,
            verbose_logging,
        }
    }

    /// 审阅整篇文档中所有有修订的段落（一次批量请求）
    ///
    /// 没有修订时不调用分析服务，直接返回空列表。
    pub async fn review_document(
        &self,
        host: &dyn DocumentHost,
        sink: Option<&dyn DiagnosticSink>,
    ) -> AppResult<Vec<ParagraphReview>> {
        let snapshot = extract_snapshot(host).await?;
        let batch = build_batch(&snapshot.tracked_changes, &snapshot.paragraphs);

        if batch.is_empty() {
            info!("文档中没有修订，无需分析");
            return Ok(Vec::new());
        }

        info!("📤 发送 {} 个段落到分析服务...", batch.len());
        let results = self.client.analyze_batch(&batch, self.sink(sink)).await?;

        let reviews: Vec<ParagraphReview> = batch
            .items
            .into_iter()
            .map(|item| {
                let ctx = ReviewCtx::new(item.paragraph_index, item.changelog.len());
                let result = results.get(item.paragraph_index).cloned();
                let review = ParagraphReview {
                    paragraph_index: item.paragraph_index,
                    paragraph: item.paragraph,
                    change_count: item.changelog.len(),
                    result,
                };
                self.log_review(&ctx, &review);
                review
            })
            .collect();

        Ok(reviews)
    }

    /// 审阅当前选区所在的段落（单段落请求）
    ///
    /// 选区对应不到段落、或该段落没有修订时返回 `None`。
    pub async fn review_selection(
        &self,
        host: &dyn DocumentHost,
        sink: Option<&dyn DiagnosticSink>,
    ) -> AppResult<Option<ParagraphReview>> {
        let snapshot = extract_snapshot(host).await?;
        let selected = locate_selection(host, &snapshot.paragraphs).await?;

        let Some(paragraph_index) = selected.paragraph_index else {
            info!("选区不在任何已知段落中");
            return Ok(None);
        };

        let changes = snapshot.changes_for_paragraph(paragraph_index);
        let ctx = ReviewCtx::new(paragraph_index, changes.len());
        if changes.is_empty() {
            info!("{} 没有修订，跳过分析", ctx);
            return Ok(None);
        }

        let request = build_request(snapshot.paragraph(paragraph_index).unwrap_or(""), &changes);
        info!("{} 📤 发送到分析服务...", ctx);

        let result = self
            .client
            .analyze_single(&request.paragraph, &request.changelog, self.sink(sink))
            .await?;

        let review = ParagraphReview {
            paragraph_index,
            paragraph: request.paragraph,
            change_count: ctx.change_count,
            result: Some(result),
        };
        self.log_review(&ctx, &review);

        Ok(Some(review))
    }

    /// 用分析结果中的建议措辞替换选区
    ///
    /// 总是返回一条给用户看的提示，不返回错误。
    pub async fn apply_suggestion(&self, host: &dyn DocumentHost, result: &AnalysisResult) -> String {
        let Some(wording) = result.suggested_wording().filter(|w| !w.trim().is_empty()) else {
            warn!("分析结果中没有建议措辞");
            return NO_SUGGESTION_MESSAGE.to_string();
        };

        match replace_selection_with(host, wording).await {
            Ok(()) => {
                info!("✓ 已用建议措辞替换选区");
                REPLACED_MESSAGE.to_string()
            }
            Err(e) => user_message(&e),
        }
    }

    /// 调用方没给诊断接收器时，详细日志模式下转发到 tracing
    fn sink<'a>(&self, sink: Option<&'a dyn DiagnosticSink>) -> Option<&'a dyn DiagnosticSink> {
        match sink {
            Some(sink) => Some(sink),
            None if self.verbose_logging => Some(&TRACING_SINK),
            None => None,
        }
    }

    fn log_review(&self, ctx: &ReviewCtx, review: &ParagraphReview) {
        match review.failure() {
            None => {
                let category = review
                    .result
                    .as_ref()
                    .and_then(AnalysisResult::clause_category)
                    .unwrap_or("(未分类)");
                info!("{} ✓ 条款类别: {}", ctx, category);
                if self.verbose_logging {
                    info!("{} 段落: {}", ctx, truncate_text(&review.paragraph, 80));
                }
            }
            Some(reason) => warn!("{} ⚠️ 分析失败: {}", ctx, reason),
        }
    }
}
