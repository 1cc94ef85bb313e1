//! # Clause Review
//!
//! 把文档中的修订（tracked changes）按段落整理后送去做条款分析，
//! 并可用分析给出的建议措辞替换段落
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 宿主编辑器能力，只暴露读写操作
//! - `DocumentHost` - 宿主能力 trait，每次调用是一次同步点
//! - `SnapshotHost` - 基于 TOML 快照的内存实现
//!
//! ### ② 业务能力层（Services / Clients）
//! - `services/` - 清洗、段落提取、修订提取、分组、文档修改、报告写入
//! - `clients/` - 分析服务 HTTP 客户端与诊断输出
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 整篇文档审阅、选区审阅、应用建议
//! - 唯一把错误转换为用户提示的地方
//!
//! ### ④ 编排层（App）
//! - `app` - 加载快照、运行审阅、输出报告
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{AnalysisClient, DiagnosticSink, MemorySink, TracingSink};
pub use config::Config;
pub use error::{ApiError, AppError, AppResult, FileError, HostError};
pub use infrastructure::{DocumentHost, SnapshotHost};
pub use models::{
    AnalysisRequestBatch, AnalysisResult, AnalysisResultMap, ChangeLogEntry, DocumentSnapshot,
    TrackedChange,
};
pub use services::{build_batch, extract_paragraphs, extract_tracked_changes, sanitize};
pub use workflow::{ParagraphReview, ReviewFlow};
