//! PDF generation module - payload mapping, PDFMonkey submission, and the
//! single-shot draft status refresh.

pub mod client;
pub mod completion;
pub mod handlers;
pub mod models;
pub mod payload;


pub use client::{DocumentService, PdfMonkeyClient};
pub use completion::resolve_completion;
pub use models::{DocumentPayload, DocumentSnapshot, DocumentStatus};
pub use payload::build_payload;

use thiserror::Error;

/// Errors raised while preparing or performing calls to PDFMonkey.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("missing PDFMonkey configuration: {0} is not set")]
    MissingConfig(&'static str),
    #[error("no template id found for '{0}'")]
    UnknownTemplate(String),
    #[error("PDFMonkey rejected the request with status {status}")]
    RemoteRejected { status: u16, body: String },
    #[error("PDFMonkey returned an unreadable body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("transport failure talking to PDFMonkey: {0}")]
    Transport(#[from] reqwest::Error),
}
