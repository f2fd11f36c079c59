use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Caller-supplied form fields. No schema is enforced here; the payload
/// builder extracts the fields it recognises and ignores the rest.
pub type FormData = HashMap<String, String>;

/// Inbound body for `POST /pdf/`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GeneratePdfRequest {
    #[serde(rename = "formData", default)]
    pub form_data: FormData,
    /// Template display name, e.g. "Plan de Prevención".
    #[serde(default)]
    pub template_id: String,
}

/// The fixed field set the prevention-plan template renders.
///
/// Every key is always present; absent form fields become empty strings
/// so the builder is total over arbitrary submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DocumentPayload {
    pub patient_name: String,
    pub date: String,
    pub orientation_name: String,
    pub recommendation: String,
    pub additional_info: String,
}

/// Document lifecycle states reported by PDFMonkey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentStatus {
    Draft,
    Generating,
    Success,
    Failure,
    Other(String),
}

impl DocumentStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "draft" => Self::Draft,
            "generating" => Self::Generating,
            "success" => Self::Success,
            "failure" => Self::Failure,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A point-in-time view of a PDFMonkey document.
///
/// The raw body is kept verbatim and returned to the caller as-is; the
/// accessors only peek at the `document.id` and `document.status` fields
/// the orchestration needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    pub body: Value,
}

impl DocumentSnapshot {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    pub fn id(&self) -> Option<&str> {
        self.body.get("document")?.get("id")?.as_str()
    }

    pub fn status(&self) -> Option<DocumentStatus> {
        let raw = self.body.get("document")?.get("status")?.as_str()?;
        Some(DocumentStatus::parse(raw))
    }
}

/// 400 body carrying PDFMonkey's verbatim rejection.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct RemoteRejectionResponse {
    pub error: String,
    pub details: String,
    pub status_code: u16,
}

/// 500 body for configuration and transport faults.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ServerErrorResponse {
    pub error: String,
    pub message: String,
}
