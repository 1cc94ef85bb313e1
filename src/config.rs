/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 分析服务地址
    pub analysis_api_base_url: String,
    /// 文档快照文件（TOML）
    pub snapshot_file: String,
    /// 审阅报告输出文件
    pub report_file: String,
    /// 是否把诊断信息输出到日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis_api_base_url: "http://localhost:8000".to_string(),
            snapshot_file: "document.toml".to_string(),
            report_file: "review_report.txt".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            analysis_api_base_url: std::env::var("ANALYSIS_API_BASE_URL").unwrap_or(default.analysis_api_base_url),
            snapshot_file: std::env::var("SNAPSHOT_FILE").unwrap_or(default.snapshot_file),
            report_file: std::env::var("REPORT_FILE").unwrap_or(default.report_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 单段落分析接口
    pub fn single_endpoint(&self) -> String {
        format!("{}/analyze_changes", self.analysis_api_base_url.trim_end_matches('/'))
    }

    /// 批量分析接口
    pub fn batch_endpoint(&self) -> String {
        format!("{}/analyze_changes_batch", self.analysis_api_base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_ignore_trailing_slash() {
        let config = Config {
            analysis_api_base_url: "http://review.local:8000/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.single_endpoint(), "http://review.local:8000/analyze_changes");
        assert_eq!(config.batch_endpoint(), "http://review.local:8000/analyze_changes_batch");
    }
}
