//! 应用入口 - 编排层
//!
//! 加载文档快照，跑一遍整篇文档的审阅，把结果和已有批注写入报告

use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::infrastructure::SnapshotHost;
use crate::models::load_snapshot_file;
use crate::services::{extract_annotations, extract_document_object, ReportWriter};
use crate::utils::logging::{log_startup, print_final_stats};
use crate::workflow::{user_message, ParagraphReview, ReviewFlow};

/// 应用主结构
pub struct App {
    host: SnapshotHost,
    flow: ReviewFlow,
    report: ReportWriter,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let snapshot = load_snapshot_file(Path::new(&config.snapshot_file)).await?;
        let report = ReportWriter::new(config.report_file.clone());
        report.init().await?;

        Ok(Self {
            host: SnapshotHost::new(snapshot),
            flow: ReviewFlow::new(&config),
            report,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        self.write_annotations().await?;

        let reviews = match self.flow.review_document(&self.host, None).await {
            Ok(reviews) => reviews,
            Err(e) => {
                warn!("{}", user_message(&e));
                return Err(e.into());
            }
        };

        if reviews.is_empty() {
            info!("没有需要审阅的段落，程序结束");
            return Ok(());
        }

        let mut analyzed = 0;
        for review in &reviews {
            self.write_review(review).await?;
            if review.is_analyzed() {
                analyzed += 1;
            }
        }

        print_final_stats(analyzed, reviews.len() - analyzed, self.report.path());
        Ok(())
    }

    /// 文档里已有的批注原样写入报告
    async fn write_annotations(&self) -> Result<()> {
        let object = extract_document_object(&self.host).await?;
        if !object.properties.author.is_empty() {
            info!("文档作者: {}", object.properties.author);
        }

        for annotation in extract_annotations(&self.host).await? {
            let body = format!("[{}] {}", annotation.state, annotation.critique);
            self.report
                .write(annotation.paragraph_index, &format!("批注 {}", annotation.id), &body)
                .await?;
        }
        Ok(())
    }

    async fn write_review(&self, review: &ParagraphReview) -> Result<()> {
        match (review.failure(), review.result.as_ref()) {
            (None, Some(result)) => {
                let heading = result.clause_category().unwrap_or("(未分类)");
                let body = format!(
                    "摘要: {}\n建议措辞: {}",
                    result.summary().unwrap_or("-"),
                    result.suggested_wording().unwrap_or("-")
                );
                self.report.write(review.paragraph_index, heading, &body).await?;
            }
            (reason, _) => {
                let reason = reason.unwrap_or("未知原因");
                self.report
                    .write(review.paragraph_index, "分析失败", reason)
                    .await?;
            }
        }
        Ok(())
    }
}
