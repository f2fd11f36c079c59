use async_trait::async_trait;
use serde_json::json;

use super::models::{DocumentPayload, DocumentSnapshot};
use super::PdfError;
use crate::config::PdfMonkeyConfig;

const BODY_LOG_LIMIT: usize = 1000;

/// Seam over the remote rendering service.
///
/// Handlers only see this trait, so route tests can run against an
/// in-memory fake instead of PDFMonkey.
#[async_trait]
pub trait DocumentService: Send + Sync {
    /// Submit a creation request. Only HTTP 201 counts as success; any
    /// other response surfaces as `PdfError::RemoteRejected` with the
    /// remote body kept verbatim. Single attempt, no retries.
    async fn create_document(
        &self,
        template_id: &str,
        payload: &DocumentPayload,
    ) -> Result<DocumentSnapshot, PdfError>;

    /// Fetch the current snapshot of a document by id. Expects HTTP 200.
    async fn fetch_document(&self, document_id: &str) -> Result<DocumentSnapshot, PdfError>;
}

/// reqwest-backed PDFMonkey client. Stateless between calls; the shared
/// connection pool lives in the `reqwest::Client`.
pub struct PdfMonkeyClient {
    config: PdfMonkeyConfig,
    http: reqwest::Client,
}

impl PdfMonkeyClient {
    pub fn new(config: PdfMonkeyConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Credential check happens before any network call so a missing key
    /// fails fast with a configuration error, not a transport one.
    fn api_key(&self) -> Result<&str, PdfError> {
        self.config
            .api_key
            .as_deref()
            .ok_or(PdfError::MissingConfig("PDFMONKEY_API_KEY"))
    }
}

#[async_trait]
impl DocumentService for PdfMonkeyClient {
    async fn create_document(
        &self,
        template_id: &str,
        payload: &DocumentPayload,
    ) -> Result<DocumentSnapshot, PdfError> {
        let api_key = self.api_key()?;

        let request = json!({
            "document": {
                "document_template_id": template_id,
                "payload": payload,
            }
        });

        log::info!("Submitting document to PDFMonkey with template_id={template_id}");

        let response = self
            .http
            .post(format!("{}/documents", self.config.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log::info!(
            "PDFMonkey create response: status_code={} body={}",
            status.as_u16(),
            truncate(&body, BODY_LOG_LIMIT)
        );

        if status != reqwest::StatusCode::CREATED {
            return Err(PdfError::RemoteRejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(DocumentSnapshot::new(serde_json::from_str(&body)?))
    }

    async fn fetch_document(&self, document_id: &str) -> Result<DocumentSnapshot, PdfError> {
        let api_key = self.api_key()?;

        let response = self
            .http
            .get(format!("{}/documents/{document_id}", self.config.base_url))
            .bearer_auth(api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != reqwest::StatusCode::OK {
            log::error!(
                "PDFMonkey status check for {document_id} failed: status_code={} body={}",
                status.as_u16(),
                truncate(&body, BODY_LOG_LIMIT)
            );
            return Err(PdfError::RemoteRejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(DocumentSnapshot::new(serde_json::from_str(&body)?))
    }
}

/// Truncate on a char boundary so log lines stay bounded even for large
/// remote bodies.
pub(crate) fn truncate(body: &str, limit: usize) -> &str {
    if body.len() <= limit {
        return body;
    }
    let mut end = limit;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
