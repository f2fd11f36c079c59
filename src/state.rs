use std::sync::Arc;
use std::time::Duration;

use crate::config::PdfMonkeyConfig;
use crate::pdf::client::{DocumentService, PdfMonkeyClient};
use crate::pdf::completion::DRAFT_POLL_DELAY;
use crate::templates::registry::{FormCatalog, TemplateRegistry};

/// Shared per-process state. Read-only after startup, so handlers need no
/// locks; tests swap in a fake `DocumentService` and a zero poll delay.
pub struct AppState {
    pub service: Arc<dyn DocumentService>,
    pub registry: TemplateRegistry,
    pub catalog: FormCatalog,
    pub draft_poll_delay: Duration,
}

impl AppState {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let config = PdfMonkeyConfig::from_env();
        if config.api_key.is_none() {
            log::warn!("PDFMONKEY_API_KEY is not set; PDF generation will fail until it is");
        }

        let http_client = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(900))
            .user_agent("prevencion-pdf-server/0.3")
            .build()
            .expect("Failed to create reqwest client");

        let registry = TemplateRegistry::from_config(&config);
        let catalog = FormCatalog::from_env();

        Self {
            service: Arc::new(PdfMonkeyClient::new(config, http_client)),
            registry,
            catalog,
            draft_poll_delay: DRAFT_POLL_DELAY,
        }
    }

    pub fn with_service(
        service: Arc<dyn DocumentService>,
        registry: TemplateRegistry,
        catalog: FormCatalog,
        draft_poll_delay: Duration,
    ) -> Self {
        Self {
            service,
            registry,
            catalog,
            draft_poll_delay,
        }
    }
}
