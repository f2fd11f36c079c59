//! Template registry - display-name to PDFMonkey template id bindings and
//! the file-backed form catalog consumed by the frontend form builder.

pub mod handlers;
pub mod models;
pub mod registry;

#[cfg(test)]
mod mod_tests;

pub use models::{TemplateDescriptor, TemplateSummary};
pub use registry::{FormCatalog, TemplateRegistry};

use std::path::PathBuf;

use thiserror::Error;

/// Errors reading the form catalog file.
///
/// A missing file and a malformed file are kept distinct: the first is a
/// deployment gap (404), the second a corrupt configuration (500).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("form template configuration file not found: {0}")]
    Missing(PathBuf),
    #[error("form template configuration is not valid JSON: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("failed to read form template configuration: {0}")]
    Io(#[source] std::io::Error),
}
