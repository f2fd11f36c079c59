#[actix_web::main]
async fn main() -> std::io::Result<()> {
    prevencion_pdf_server::run().await
}
