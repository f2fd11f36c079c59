use super::models::{DocumentPayload, FormData};
use crate::templates::models::TemplateDescriptor;

/// Map caller form fields onto the payload the template expects.
///
/// Total over any submission: recognised fields are copied, missing ones
/// default to empty strings, unknown ones are ignored.
pub fn build_payload(form: &FormData, template: &TemplateDescriptor) -> DocumentPayload {
    log::info!(
        "Building payload for template '{}' from {} form fields",
        template.name,
        form.len()
    );

    let field = |key: &str| form.get(key).cloned().unwrap_or_default();

    DocumentPayload {
        patient_name: field("patient_name"),
        date: field("date"),
        orientation_name: field("orientation_name"),
        recommendation: field("recommendation"),
        additional_info: field("additional_info"),
    }
}
