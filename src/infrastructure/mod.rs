pub mod document_host;
pub mod snapshot_host;

pub use document_host::{ChangeTrackingMode, CompareOptions, CompareTarget, DocumentHost};
pub use snapshot_host::{CompareRecord, SnapshotHost};
