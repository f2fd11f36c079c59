use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use super::CatalogError;
use crate::state::AppState;

#[derive(Deserialize, IntoParams)]
pub struct TemplateQuery {
    /// When "true", return only id/name/description summaries.
    pub list: Option<String>,
    /// Return the single catalog entry with this id.
    pub id: Option<String>,
}

#[utoipa::path(
    tag = "Form Templates",
    get,
    path = "/templates/",
    params(TemplateQuery),
    responses(
        (status = 200, description = "Catalog, summary list, or a single template"),
        (status = 404, description = "Unknown template id, or catalog file missing"),
        (status = 500, description = "Catalog file present but unreadable")
    )
)]
pub async fn get_form_templates(
    query: web::Query<TemplateQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let catalog = &data.catalog;

    if query.list.as_deref() == Some("true") {
        return match catalog.list() {
            Ok(templates) => HttpResponse::Ok().json(json!({ "templates": templates })),
            Err(e) => catalog_error_response(e),
        };
    }

    if let Some(id) = &query.id {
        return match catalog.find(id) {
            Ok(Some(template)) => HttpResponse::Ok().json(json!({ "template": template })),
            Ok(None) => {
                log::warn!("Template lookup for unknown id: {id}");
                HttpResponse::NotFound().json(json!({
                    "error": format!("No template found with ID: {id}")
                }))
            }
            Err(e) => catalog_error_response(e),
        };
    }

    match catalog.load() {
        Ok(raw) => HttpResponse::Ok().json(raw),
        Err(e) => catalog_error_response(e),
    }
}

fn catalog_error_response(err: CatalogError) -> HttpResponse {
    match err {
        CatalogError::Missing(path) => {
            log::error!("Form template configuration file not found: {}", path.display());
            HttpResponse::NotFound().json(json!({
                "error": "Form template configuration file not found"
            }))
        }
        CatalogError::Corrupt(e) => {
            log::error!("Form template configuration is not valid JSON: {e}");
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to parse form template configuration",
                "message": e.to_string()
            }))
        }
        CatalogError::Io(e) => {
            log::error!("Failed to read form template configuration: {e}");
            HttpResponse::InternalServerError().json(json!({
                "error": e.to_string(),
                "message": "Failed to read form template configuration"
            }))
        }
    }
}
