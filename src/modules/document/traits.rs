use crate::modules::document::domain::Document;
use crate::shared::errors::AppResult;
use std::path::Path;

/// Turns a document model into a file
pub trait DocumentWriter: Send + Sync {
    /// File extension this writer produces, without the dot
    fn extension(&self) -> &'static str;

    fn write(&self, document: &Document, path: &Path) -> AppResult<()>;
}
