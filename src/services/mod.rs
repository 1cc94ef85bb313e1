pub mod annotation_extractor;
pub mod batcher;
pub mod change_extractor;
pub mod document_mutator;
pub mod paragraph_extractor;
pub mod report_writer;
pub mod sanitizer;

pub use annotation_extractor::extract_annotations;
pub use batcher::{build_batch, build_request};
pub use change_extractor::{
    changes_for_paragraph, extract_snapshot, extract_tracked_changes, extract_unattributed_changes,
};
pub use document_mutator::{append_paragraph, compare_documents, replace_selection_with};
pub use paragraph_extractor::{extract_document_object, extract_paragraphs, locate_selection};
pub use report_writer::ReportWriter;
pub use sanitizer::sanitize;
