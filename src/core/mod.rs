pub mod assembler;
pub mod catalog;
pub mod session;

pub use crate::domain::model::{DeploymentRequest, DocumentModel, HistoryEntry, Platform};
pub use crate::domain::ports::DocumentRenderer;
pub use crate::utils::error::Result;
