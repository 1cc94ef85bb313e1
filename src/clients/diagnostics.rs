//! 诊断输出
//!
//! 分析客户端把请求体、响应状态、响应体逐行交给诊断接收器，只做记录，不影响流程。

use std::sync::Mutex;
use tracing::debug;

/// 诊断接收器
pub trait DiagnosticSink: Send + Sync {
    fn trace(&self, line: &str);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn trace(&self, line: &str) {
        self(line)
    }
}

/// 转发到 `tracing` 的诊断接收器
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn trace(&self, line: &str) {
        debug!(target: "clause_review::diagnostics", "{}", line);
    }
}

/// 收集到内存的诊断接收器
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }
}

impl DiagnosticSink for MemorySink {
    fn trace(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_memory_sink_collects() {
        let sink = MemorySink::new();
        sink.trace("one");
        sink.trace("two");
        assert_eq!(sink.lines(), vec!["one", "two"]);
    }

    #[test]
    fn test_closure_sink() {
        let count = AtomicUsize::new(0);
        let sink = |_: &str| {
            count.fetch_add(1, Ordering::SeqCst);
        };
        let dyn_sink: &dyn DiagnosticSink = &sink;
        dyn_sink.trace("x");
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
