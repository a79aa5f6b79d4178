use actix_web::{HttpResponse, http::header::ContentType};

/// Liveness probe
///
/// GET /ping
pub async fn ping_handler() -> HttpResponse {
  HttpResponse::Ok()
    .content_type(ContentType::plaintext())
    .body("Ok")
}
