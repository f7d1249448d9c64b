pub mod chat;

use actix_cors::Cors;
use actix_web::web;

use crate::handlers;
use crate::services::ChatService;

pub fn configure(cfg: &mut web::ServiceConfig, chat_service: web::Data<ChatService>) {
    cfg.service(chat::chat_routes(chat_service))
        .route("/", web::get().to(handlers::root_handler));
}

/// Allows every origin, method and header, with credentials. Development only.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}
