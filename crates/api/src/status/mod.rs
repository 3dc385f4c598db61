use actix_web::{web, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
struct APIResponse {
    pub message: String,
}

async fn status() -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "Yo! We are up!\r\n".into(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
