use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;

use super::client::truncate;
use super::completion::resolve_completion;
use super::models::{GeneratePdfRequest, RemoteRejectionResponse, ServerErrorResponse};
use super::payload::build_payload;
use super::PdfError;
use crate::state::AppState;

#[utoipa::path(
    tag = "PDF Generation",
    post,
    path = "/pdf/",
    request_body = GeneratePdfRequest,
    responses(
        (status = 201, description = "Document created; body is the PDFMonkey document JSON, refreshed once if it was still a draft"),
        (status = 400, description = "PDFMonkey rejected the request, or the template name resolved to no id", body = RemoteRejectionResponse),
        (status = 500, description = "Missing configuration or transport fault", body = ServerErrorResponse)
    )
)]
pub async fn generate_pdf(
    req: web::Json<GeneratePdfRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request_id = Uuid::new_v4();
    let req = req.into_inner();

    log::info!(
        "[{request_id}] Generating PDF for template '{}' with {} form fields",
        req.template_id,
        req.form_data.len()
    );

    let Some(template) = data.registry.resolve_or_default(&req.template_id) else {
        let err = PdfError::UnknownTemplate(req.template_id);
        log::error!("[{request_id}] {err}");
        return HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    };

    let payload = build_payload(&req.form_data, &template);

    let created = match data
        .service
        .create_document(&template.template_id, &payload)
        .await
    {
        Ok(snapshot) => snapshot,
        Err(e) => return creation_error_response(request_id, e),
    };

    log::info!(
        "[{request_id}] Document created: id={:?} status={:?}",
        created.id(),
        created.status()
    );

    let resolved = resolve_completion(data.service.as_ref(), created, data.draft_poll_delay).await;
    HttpResponse::Created().json(resolved.body)
}

#[utoipa::path(
    tag = "PDF Generation",
    get,
    path = "/pdf/status/{document_id}/",
    params(
        ("document_id" = String, Path, description = "PDFMonkey document id")
    ),
    responses(
        (status = 200, description = "Current PDFMonkey document JSON"),
        (status = 400, description = "PDFMonkey rejected the status check", body = RemoteRejectionResponse),
        (status = 500, description = "Missing configuration or transport fault", body = ServerErrorResponse)
    )
)]
pub async fn check_document_status(
    document_id: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let document_id = document_id.into_inner();

    match data.service.fetch_document(&document_id).await {
        Ok(snapshot) => {
            log::info!("Document {document_id} status: {:?}", snapshot.status());
            HttpResponse::Ok().json(snapshot.body)
        }
        Err(e) => status_error_response(&document_id, e),
    }
}

fn creation_error_response(request_id: Uuid, err: PdfError) -> HttpResponse {
    match err {
        PdfError::RemoteRejected { status, body } => {
            log::error!(
                "[{request_id}] PDF creation rejected: status_code={status} body={}",
                truncate(&body, 1000)
            );
            HttpResponse::BadRequest().json(RemoteRejectionResponse {
                error: "PDF creation failed".to_string(),
                details: body,
                status_code: status,
            })
        }
        PdfError::MissingConfig(var) => {
            log::error!("[{request_id}] Missing PDFMonkey configuration: {var}");
            HttpResponse::InternalServerError().json(ServerErrorResponse {
                error: "Missing PDFMonkey configuration".to_string(),
                message: format!("{var} is not set"),
            })
        }
        other => {
            log::error!("[{request_id}] Unexpected error while generating PDF: {other}");
            HttpResponse::InternalServerError().json(ServerErrorResponse {
                error: other.to_string(),
                message: "PDF generation failed unexpectedly".to_string(),
            })
        }
    }
}

fn status_error_response(document_id: &str, err: PdfError) -> HttpResponse {
    match err {
        PdfError::RemoteRejected { status, body } => {
            log::error!(
                "Status check for {document_id} rejected: status_code={status} body={}",
                truncate(&body, 1000)
            );
            HttpResponse::BadRequest().json(RemoteRejectionResponse {
                error: "Status check failed".to_string(),
                details: body,
                status_code: status,
            })
        }
        PdfError::MissingConfig(var) => {
            log::error!("Missing PDFMonkey configuration: {var}");
            HttpResponse::InternalServerError().json(ServerErrorResponse {
                error: "Missing PDFMonkey configuration".to_string(),
                message: format!("{var} is not set"),
            })
        }
        other => {
            log::error!("Unexpected error checking status of {document_id}: {other}");
            HttpResponse::InternalServerError().json(ServerErrorResponse {
                error: other.to_string(),
                message: "Error checking document status".to_string(),
            })
        }
    }
}
