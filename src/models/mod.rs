pub mod analysis;
pub mod annotation;
pub mod document;
pub mod loaders;
pub mod snapshot;

pub use analysis::{
    AnalysisRequest, AnalysisRequestBatch, AnalysisResult, AnalysisResultMap, BatchItem,
    ChangeLogEntry,
};
pub use annotation::{
    Annotation, CritiqueAnnotation, DocumentBody, DocumentObject, DocumentProperties, HostAnnotation,
};
pub use document::{
    ChangeType, DocumentSnapshot, HostTrackedChange, SelectedParagraph, Selection, TrackedChange,
    UnattributedChange,
};
pub use loaders::load_snapshot_file;
pub use snapshot::{DocumentSnapshotFile, SnapshotParagraph, SnapshotSelection};
