pub mod analysis_client;
pub mod diagnostics;

pub use analysis_client::AnalysisClient;
pub use diagnostics::{DiagnosticSink, MemorySink, TracingSink};
