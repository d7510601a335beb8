//! Document upload and preview use cases.

mod list_documents;
mod preview_document;
mod upload_document;

pub use list_documents::ListDocuments;
pub use preview_document::PreviewDocument;
pub use upload_document::{UploadDocument, UploadOutcome};
