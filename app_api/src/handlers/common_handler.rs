use crate::result::result;
use actix_web::{Responder, get, web};
use common::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(status);
}
#[utoipa::path(
    get,
    path = "/status",
    tag = "Common",
    summary = "Get the status of the service",
    responses(
        (status = 200, description = "Service is up", body = String)
    )
)]
#[get("/status")]
async fn status() -> Result<impl Responder, AppError> {
    Ok(web::Json(result()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_status() {
        let app = test::init_service(App::new().configure(configure)).await;
        let body: serde_json::Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/status").to_request()).await;
        assert_eq!(body["code"], 200);
        assert_eq!(body["success"], true);
    }
}
