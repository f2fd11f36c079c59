use std::env;

const DEFAULT_BASE_URL: &str = "https://api.pdfmonkey.io/api/v1";

/// Connection settings for the PDFMonkey API, read once at startup.
///
/// A missing API key is not a startup error: the server still boots and
/// reports the problem per request, so template browsing keeps working
/// while the credential is being provisioned.
#[derive(Clone, Debug)]
pub struct PdfMonkeyConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub default_template_id: Option<String>,
}

impl PdfMonkeyConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty_var("PDFMONKEY_API_KEY"),
            base_url: env::var("PDFMONKEY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            default_template_id: non_empty_var("PDFMONKEY_PREVENTION_TEMPLATE_ID"),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
