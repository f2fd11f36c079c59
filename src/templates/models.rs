use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A display-name to remote template id binding.
///
/// Display names are what callers send in `template_id`; the
/// `template_id` field here is the opaque id PDFMonkey knows the
/// template by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub name: String,
    pub template_id: String,
}

/// Catalog entry summary returned by `GET /templates/?list=true`.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
