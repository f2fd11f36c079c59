use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::web;
use async_trait::async_trait;

use prevencion_pdf_server::pdf::client::DocumentService;
use prevencion_pdf_server::pdf::models::{DocumentPayload, DocumentSnapshot};
use prevencion_pdf_server::pdf::PdfError;
use prevencion_pdf_server::state::AppState;
use prevencion_pdf_server::templates::models::TemplateDescriptor;
use prevencion_pdf_server::templates::registry::{
    FormCatalog, TemplateRegistry, PREVENTION_PLAN_TEMPLATE,
};

/// Mock implementation of DocumentService for route tests.
///
/// Responses are consumed once; calls are recorded so tests can assert
/// how many outbound requests a route performed.
pub struct MockDocumentService {
    create_response: Mutex<Option<Result<DocumentSnapshot, PdfError>>>,
    fetch_response: Mutex<Option<Result<DocumentSnapshot, PdfError>>>,
    pub create_calls: Mutex<Vec<(String, DocumentPayload)>>,
    pub fetch_calls: Mutex<Vec<String>>,
}

impl MockDocumentService {
    pub fn new(
        create_response: Option<Result<DocumentSnapshot, PdfError>>,
        fetch_response: Option<Result<DocumentSnapshot, PdfError>>,
    ) -> Self {
        Self {
            create_response: Mutex::new(create_response),
            fetch_response: Mutex::new(fetch_response),
            create_calls: Mutex::new(Vec::new()),
            fetch_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn create_call_count(&self) -> usize {
        self.create_calls.lock().unwrap().len()
    }

    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DocumentService for MockDocumentService {
    async fn create_document(
        &self,
        template_id: &str,
        payload: &DocumentPayload,
    ) -> Result<DocumentSnapshot, PdfError> {
        self.create_calls
            .lock()
            .unwrap()
            .push((template_id.to_string(), payload.clone()));
        self.create_response
            .lock()
            .unwrap()
            .take()
            .expect("unexpected create_document call")
    }

    async fn fetch_document(&self, document_id: &str) -> Result<DocumentSnapshot, PdfError> {
        self.fetch_calls
            .lock()
            .unwrap()
            .push(document_id.to_string());
        self.fetch_response
            .lock()
            .unwrap()
            .take()
            .expect("unexpected fetch_document call")
    }
}

/// AppState wired to the given service, with the prevention-plan template
/// registered and a zero draft-poll delay so tests run instantly.
pub fn test_state(service: Arc<dyn DocumentService>) -> web::Data<AppState> {
    let registry = TemplateRegistry::new(
        vec![TemplateDescriptor {
            name: PREVENTION_PLAN_TEMPLATE.to_string(),
            template_id: "tpl-123".to_string(),
        }],
        None,
    );
    let catalog = FormCatalog::new("./does-not-exist/form_templates.json");
    web::Data::new(AppState::with_service(
        service,
        registry,
        catalog,
        Duration::ZERO,
    ))
}
