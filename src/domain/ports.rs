use crate::domain::model::DocumentModel;
use crate::utils::error::Result;

/// Turns a document model into a paginated binary artifact (A4 pages).
///
/// Implementations must not branch on content beyond iterating supplied rows,
/// and must reject degenerate models (no module rows, no checklist rows).
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, model: &DocumentModel) -> Result<Vec<u8>>;
}
