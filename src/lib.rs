use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod pdf;
pub mod state;
pub mod templates;

pub use crate::state::AppState;

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::pdf::handlers::generate_pdf,
            crate::pdf::handlers::check_document_status,
            crate::templates::handlers::get_form_templates
        ),
        components(
            schemas(
                pdf::models::GeneratePdfRequest,
                pdf::models::DocumentPayload,
                pdf::models::RemoteRejectionResponse,
                pdf::models::ServerErrorResponse,
                templates::models::TemplateSummary,
            )
        ),
        tags(
            (name = "PDF Generation", description = "PDFMonkey document creation and status endpoints."),
            (name = "Form Templates", description = "Form template catalog endpoints.")
        ),
        servers(
            (url = "http://127.0.0.1:8080", description = "Localhost server")
        )
    )]
    struct ApiDoc;

    let app_state = web::Data::new(AppState::from_env());

    log::info!("Starting server at http://0.0.0.0:8080");

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://127.0.0.1:5173")
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::ACCEPT,
                header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(cors)
            .app_data(app_state)
            .service(web::resource("/pdf/").route(web::post().to(pdf::handlers::generate_pdf)))
            .service(
                web::resource("/pdf/status/{document_id}/")
                    .route(web::get().to(pdf::handlers::check_document_status)),
            )
            .service(
                web::resource("/templates/")
                    .route(web::get().to(templates::handlers::get_form_templates)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(("0.0.0.0", 8080))?
    .run()
    .await
}
