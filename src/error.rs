use thiserror::Error;

/// 应用程序错误类型
///
/// 提取、分析客户端都直接向上传播这些错误，不做本地重试；
/// 只有流程层（`workflow`）把它们统一转换为面向用户的提示。
#[derive(Debug, Error)]
pub enum AppError {
    /// 宿主编辑器错误
    #[error("宿主错误: {0}")]
    Host(#[from] HostError),
    /// 分析服务调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 调用方传入的参数不合法
    #[error("参数错误: {0}")]
    Validation(String),
}

/// 宿主编辑器相关错误
#[derive(Debug, Error)]
pub enum HostError {
    /// 宿主上下文无法访问或同步失败
    #[error("无法访问宿主编辑器 ({operation}): {reason}")]
    Unavailable { operation: String, reason: String },
}

/// 分析服务调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 收到响应，但状态码表示失败
    #[error("API返回错误响应 ({endpoint}): status={status}, body={body}")]
    Remote {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// 请求没有完成（DNS、连接失败等）
    #[error("API请求失败 ({endpoint}): {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 响应体不是合法 JSON
    #[error("响应解析失败 ({endpoint}): {source}")]
    MalformedResponse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    /// 请求体序列化失败
    #[error("请求体序列化失败: {0}")]
    InvalidPayload(#[source] serde_json::Error),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建宿主不可用错误
    pub fn host_unavailable(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Host(HostError::Unavailable {
            operation: operation.into(),
            reason: reason.into(),
        })
    }

    /// 创建远端错误响应
    pub fn remote(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        AppError::Api(ApiError::Remote {
            endpoint: endpoint.into(),
            status,
            body: body.into(),
        })
    }

    /// 创建网络传输错误
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::Transport {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建响应解析错误
    pub fn malformed_response(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        AppError::Api(ApiError::MalformedResponse {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 是否为宿主不可用
    pub fn is_host_unavailable(&self) -> bool {
        matches!(self, AppError::Host(HostError::Unavailable { .. }))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display_carries_status_and_body() {
        let err = AppError::remote("http://localhost/analyze_changes", 500, "server error");
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("server error"));
    }

    #[test]
    fn test_host_unavailable_helper() {
        let err = AppError::host_unavailable("paragraphs", "context lost");
        assert!(err.is_host_unavailable());
        assert!(!AppError::Validation("x".into()).is_host_unavailable());
    }
}
