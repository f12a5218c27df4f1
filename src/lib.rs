pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::pdf::PdfRenderer;
pub use config::{catalog_file::CatalogFile, CliConfig};
pub use core::catalog::Catalog;
pub use core::session::{GenerationOutput, Generator, Session};
pub use domain::model::{DeploymentRequest, DocumentModel, HistoryEntry, Platform};
pub use domain::ports::DocumentRenderer;
pub use utils::error::{DeployError, Result};
